// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale construction for the drill.
//!
//! Builds major and natural minor scales from a white-key root, spelling
//! every chromatic degree the way the key's signature writes it.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::key_signature::KeySignature;
use super::pitch::{NoteName, NoteNaming, PitchClass};
use crate::error::{DrillError, Result};

/// Number of degrees in a built scale, root through its octave
pub const SCALE_DEGREES: usize = 8;

/// Scale modes supported by the drill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Major,        // Ionian
    NaturalMinor, // Aeolian
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Major, Mode::NaturalMinor];

    /// Semitone steps between consecutive degrees; always sums to 12
    pub fn steps(self) -> [u8; 7] {
        match self {
            Mode::Major => [2, 2, 1, 2, 2, 2, 1],
            Mode::NaturalMinor => [2, 1, 2, 2, 1, 2, 2],
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "Major",
            Mode::NaturalMinor => "Minor",
        }
    }

    /// The other mode on the same root
    pub fn parallel(self) -> Self {
        match self {
            Mode::Major => Mode::NaturalMinor,
            Mode::NaturalMinor => Mode::Major,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Mode {
    type Err = DrillError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "major" | "ionian" | "maj" => Ok(Mode::Major),
            "minor" | "naturalminor" | "aeolian" | "min" => Ok(Mode::NaturalMinor),
            _ => Err(DrillError::UnknownMode(s.trim().to_string())),
        }
    }
}

/// A built scale: eight spelled degrees from the root to its octave
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scale {
    root: PitchClass,
    mode: Mode,
    degrees: [NoteName; SCALE_DEGREES],
    signature: &'static KeySignature,
}

impl Scale {
    /// Build the scale of `mode` on `root`.
    ///
    /// The root must be one of the seven natural pitch classes. Chromatic
    /// degrees take their spelling from the key signature table.
    pub fn build(root: PitchClass, mode: Mode) -> Result<Self> {
        let signature = KeySignature::of(root, mode).ok_or(DrillError::InvalidRoot { root })?;
        Self::spell(root, mode, signature)
    }

    /// Walk the mode's steps from `root`, spelling each chromatic degree
    /// from `signature`
    fn spell(root: PitchClass, mode: Mode, signature: &'static KeySignature) -> Result<Self> {
        let root_name = NoteName::natural(root).ok_or(DrillError::InvalidRoot { root })?;

        let mut degrees = [root_name; SCALE_DEGREES];
        let mut current = root;
        for (i, &step) in mode.steps().iter().enumerate() {
            current = current.transpose(step as i8);
            degrees[i + 1] = match NoteName::natural(current) {
                Some(name) => name,
                None => {
                    let spelling = signature.spelling_for(current).ok_or_else(|| {
                        DrillError::UnspelledDegree {
                            key: format!("{} {}", root, mode),
                            pitch_class: current,
                        }
                    })?;
                    NoteName::from_parts(current, spelling)
                }
            };
        }

        let scale = Self {
            root,
            mode,
            degrees,
            signature,
        };
        debug!(scale = %scale, degrees = %scale.answer(NoteNaming::English), "built scale");
        Ok(scale)
    }

    /// Parse a scale from strings (e.g., "F", "major")
    pub fn parse(root_str: &str, mode_str: &str) -> Result<Self> {
        let root = PitchClass::from_str(root_str)?;
        let mode = Mode::from_str(mode_str)?;
        Scale::build(root, mode)
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// All eight degrees; the last repeats the root an octave up
    pub fn degrees(&self) -> &[NoteName; SCALE_DEGREES] {
        &self.degrees
    }

    /// The seven distinct notes, without the octave
    pub fn notes(&self) -> &[NoteName] {
        &self.degrees[..SCALE_DEGREES - 1]
    }

    pub fn key_signature(&self) -> &'static KeySignature {
        self.signature
    }

    /// Check if a pitch class is in this scale
    pub fn contains(&self, pitch_class: PitchClass) -> bool {
        self.notes().iter().any(|n| n.pitch_class() == pitch_class)
    }

    /// The scale's spelling of a pitch class, if it is in the scale
    pub fn spelling_of(&self, pitch_class: PitchClass) -> Option<NoteName> {
        self.notes()
            .iter()
            .copied()
            .find(|n| n.pitch_class() == pitch_class)
    }

    /// The degrees joined for display, e.g. "F - G - A - Bb - C - D - E - F"
    pub fn answer(&self, naming: NoteNaming) -> String {
        self.degrees
            .iter()
            .map(|n| n.display(naming))
            .collect::<Vec<_>>()
            .join(" - ")
    }

    /// Title for display, e.g. "F Major" or "H Minor"
    pub fn title(&self, naming: NoteNaming) -> String {
        format!("{} {}", self.degrees[0].display(naming), self.mode)
    }

    /// Same root, other mode
    pub fn parallel(&self) -> Result<Scale> {
        Scale::build(self.root, self.mode.parallel())
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.mode)
    }
}

/// Pick a scale uniformly from the given roots and modes.
///
/// Empty slices fall back to all seven naturals and both modes.
pub fn random_scale_from<R: Rng + ?Sized>(
    rng: &mut R,
    roots: &[PitchClass],
    modes: &[Mode],
) -> Result<Scale> {
    let roots: &[PitchClass] = if roots.is_empty() {
        &PitchClass::NATURALS
    } else {
        roots
    };
    let modes: &[Mode] = if modes.is_empty() { &Mode::ALL } else { modes };

    let root = roots[rng.gen_range(0..roots.len())];
    let mode = modes[rng.gen_range(0..modes.len())];
    Scale::build(root, mode)
}

/// Random scale on any natural root, in either mode
pub fn random_scale_with<R: Rng + ?Sized>(rng: &mut R) -> Result<Scale> {
    random_scale_from(rng, &PitchClass::NATURALS, &Mode::ALL)
}

/// Random scale from the thread-local RNG
pub fn random_scale() -> Result<Scale> {
    random_scale_with(&mut rand::thread_rng())
}
