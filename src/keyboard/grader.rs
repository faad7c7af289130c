// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Placing a scale on the keyboard and grading a selection against it.
//!
//! The keyboard starts at C, not at the scale's root, and every pitch class
//! appears on it twice. Degrees are therefore placed by walking a cursor
//! strictly left to right from the root's white key: each degree takes the
//! first matching key at or after the cursor.

use std::collections::HashSet;

use tracing::{debug, info};

use super::layout::{KeyIdentity, KeyboardLayout};
use crate::error::{DrillError, Result};
use crate::music::{NoteName, Scale, SCALE_DEGREES};

/// How a key should be shown after a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFeedback {
    /// Selected and in the scale
    Correct,
    /// Selected but not in the scale
    Incorrect,
    /// In the scale but not selected
    Missed,
    /// Neither selected nor in the scale
    Untouched,
}

const NO_WHITE_KEY: &str = "no white key left at or after cursor";
const NO_BLACK_KEY: &str = "no black key left at or after cursor";

fn misplaced(degree: usize, note: &NoteName, reason: impl Into<String>) -> DrillError {
    DrillError::MappingInvariant {
        degree,
        note: note.to_string(),
        reason: reason.into(),
    }
}

impl KeyboardLayout {
    /// The keys a scale occupies, in keyboard order (one per degree).
    ///
    /// Fails if any degree cannot be placed after the previous one; a
    /// partial answer would grade wrongly.
    pub fn scale_keys(&self, scale: &Scale) -> Result<Vec<KeyIdentity>> {
        let degrees = scale.degrees();
        let white = self.white_keys();

        // Anchor on the root's white key in the first octave
        let root = &degrees[0];
        let anchor = white
            .iter()
            .take(7)
            .position(|&pc| pc == root.pitch_class())
            .ok_or_else(|| misplaced(0, root, "root is not a white key in the first octave"))?;

        let mut keys = Vec::with_capacity(SCALE_DEGREES);
        keys.push(KeyIdentity::White { index: anchor as u8 });
        let mut cursor = anchor + 1;

        for (degree, note) in degrees.iter().enumerate().skip(1) {
            let pc = note.pitch_class();
            if pc.is_natural() {
                let index = (cursor..white.len())
                    .find(|&i| white[i] == pc)
                    .ok_or_else(|| misplaced(degree, note, NO_WHITE_KEY))?;
                keys.push(KeyIdentity::White { index: index as u8 });
                cursor = index + 1;
            } else {
                // A black key at `position` sits just right of white key
                // `position - 1`, so it may directly follow the last white key
                let slot = self
                    .black_keys()
                    .iter()
                    .filter(|slot| slot.pitch_class == pc && slot.position >= cursor)
                    .min_by_key(|slot| slot.position)
                    .ok_or_else(|| misplaced(degree, note, NO_BLACK_KEY))?;
                keys.push(slot.identity());
                cursor = slot.position;
            }
        }

        // Keys must climb strictly; a repeat or step back means the table is wrong
        for (degree, pair) in keys.windows(2).enumerate() {
            if self.semitone(pair[0]) >= self.semitone(pair[1]) {
                return Err(misplaced(degree + 1, &degrees[degree + 1], "keys do not ascend"));
            }
        }

        debug!(
            scale = %scale,
            keys = %keys.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(" "),
            "mapped scale onto keyboard"
        );
        Ok(keys)
    }

    /// The set of keys a correct answer selects
    pub fn expected_keys(&self, scale: &Scale) -> Result<HashSet<KeyIdentity>> {
        Ok(self.scale_keys(scale)?.into_iter().collect())
    }
}

/// Expected keys for a scale on the standard keyboard
pub fn expected_keys(scale: &Scale) -> Result<HashSet<KeyIdentity>> {
    KeyboardLayout::standard().expected_keys(scale)
}

/// Whether a selection is exactly the scale's expected keys
pub fn grade(scale: &Scale, selected: &HashSet<KeyIdentity>) -> Result<bool> {
    Ok(GradeResult::compute(scale, selected)?.is_correct())
}

/// Outcome of checking one selection against one scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeResult {
    expected: HashSet<KeyIdentity>,
    selected: HashSet<KeyIdentity>,
    correct: bool,
}

impl GradeResult {
    /// Grade a selection. Extra keys count against the answer even when
    /// they would sound like a scale note in the other octave.
    pub fn compute(scale: &Scale, selected: &HashSet<KeyIdentity>) -> Result<Self> {
        let expected = expected_keys(scale)?;
        let correct = selected.len() == expected.len() && selected.is_subset(&expected);
        info!(scale = %scale, selected = selected.len(), correct, "graded selection");

        Ok(Self {
            expected,
            selected: selected.clone(),
            correct,
        })
    }

    pub fn is_correct(&self) -> bool {
        self.correct
    }

    pub fn expected(&self) -> &HashSet<KeyIdentity> {
        &self.expected
    }

    pub fn selected(&self) -> &HashSet<KeyIdentity> {
        &self.selected
    }

    /// Feedback for a single key
    pub fn feedback(&self, key: KeyIdentity) -> KeyFeedback {
        match (self.selected.contains(&key), self.expected.contains(&key)) {
            (true, true) => KeyFeedback::Correct,
            (true, false) => KeyFeedback::Incorrect,
            (false, true) => KeyFeedback::Missed,
            (false, false) => KeyFeedback::Untouched,
        }
    }

    /// Expected keys that were not selected, in keyboard order
    pub fn missed(&self) -> Vec<KeyIdentity> {
        self.in_order(self.expected.difference(&self.selected))
    }

    /// Selected keys that are not in the scale, in keyboard order
    pub fn incorrect(&self) -> Vec<KeyIdentity> {
        self.in_order(self.selected.difference(&self.expected))
    }

    fn in_order<'a>(&self, keys: impl Iterator<Item = &'a KeyIdentity>) -> Vec<KeyIdentity> {
        let layout = KeyboardLayout::standard();
        let mut keys: Vec<KeyIdentity> = keys.copied().collect();
        keys.sort_by_key(|&k| layout.semitone(k));
        keys
    }
}
