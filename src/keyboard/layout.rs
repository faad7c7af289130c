// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The fixed two-octave keyboard.
//!
//! Fourteen white keys starting at C and ten black keys. White keys are
//! identified by index (0-13); black keys by pitch class and octave (1-2),
//! which keeps their identity independent of how a scale spells them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DrillError;
use crate::music::{NoteName, NoteNaming, PitchClass, Scale, Spelling};

pub const WHITE_KEY_COUNT: usize = 14;
pub const BLACK_KEY_COUNT: usize = 10;
pub const OCTAVES: u8 = 2;

/// Stable identity of a physical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeyIdentity {
    White { index: u8 },
    Black { pitch_class: PitchClass, octave: u8 },
}

impl KeyIdentity {
    pub fn is_black(&self) -> bool {
        matches!(self, KeyIdentity::Black { .. })
    }
}

impl fmt::Display for KeyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyIdentity::White { index } => write!(f, "white-{}", index),
            KeyIdentity::Black {
                pitch_class,
                octave,
            } => write!(f, "black-{}-{}", octave, pitch_class),
        }
    }
}

impl KeyIdentity {
    /// Parse a key id ("white-7", "black-1-C#") or a note with its octave,
    /// reading the note in the given naming ("Bb1" in English, "B1" or
    /// "Es1" in German). Key ids always use English names.
    pub fn parse_with(text: &str, naming: NoteNaming) -> Result<Self, DrillError> {
        let text = text.trim();
        let unknown = || DrillError::UnknownKey(text.to_string());
        let lower = text.to_lowercase();

        let key = if let Some(index) = lower.strip_prefix("white-") {
            let index: u8 = index.parse().map_err(|_| unknown())?;
            KeyIdentity::White { index }
        } else if let Some(rest) = lower.strip_prefix("black-") {
            let (octave, note) = rest.split_once('-').ok_or_else(unknown)?;
            let octave: u8 = octave.parse().map_err(|_| unknown())?;
            let pitch_class = PitchClass::from_str(note).map_err(|_| unknown())?;
            KeyIdentity::Black {
                pitch_class,
                octave,
            }
        } else {
            let split = text
                .char_indices()
                .last()
                .filter(|(_, c)| c.is_ascii_digit())
                .map(|(i, _)| i)
                .ok_or_else(unknown)?;
            let (note, octave) = text.split_at(split);
            let octave: u8 = octave.parse().map_err(|_| unknown())?;
            let note = NoteName::parse_with(note, naming).map_err(|_| unknown())?;
            KeyboardLayout::standard()
                .key_for(note.pitch_class(), octave)
                .ok_or_else(unknown)?
        };

        if KeyboardLayout::standard().contains(key) {
            Ok(key)
        } else {
            Err(unknown())
        }
    }
}

impl FromStr for KeyIdentity {
    type Err = DrillError;

    /// Parse a key id or an English note with its octave ("C2", "Bb1")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyIdentity::parse_with(s, NoteNaming::English)
    }
}

/// A black key and where it sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackKeySlot {
    pub pitch_class: PitchClass,
    pub octave: u8,
    /// Index of the white key directly to its right
    pub position: usize,
}

impl BlackKeySlot {
    pub fn identity(&self) -> KeyIdentity {
        KeyIdentity::Black {
            pitch_class: self.pitch_class,
            octave: self.octave,
        }
    }
}

const fn black(pitch_class: PitchClass, octave: u8, position: usize) -> BlackKeySlot {
    BlackKeySlot {
        pitch_class,
        octave,
        position,
    }
}

static WHITE_KEYS: [PitchClass; WHITE_KEY_COUNT] = [
    PitchClass::C,
    PitchClass::D,
    PitchClass::E,
    PitchClass::F,
    PitchClass::G,
    PitchClass::A,
    PitchClass::B,
    PitchClass::C,
    PitchClass::D,
    PitchClass::E,
    PitchClass::F,
    PitchClass::G,
    PitchClass::A,
    PitchClass::B,
];

static BLACK_KEYS: [BlackKeySlot; BLACK_KEY_COUNT] = [
    black(PitchClass::Cs, 1, 1),
    black(PitchClass::Ds, 1, 2),
    black(PitchClass::Fs, 1, 4),
    black(PitchClass::Gs, 1, 5),
    black(PitchClass::As, 1, 6),
    black(PitchClass::Cs, 2, 8),
    black(PitchClass::Ds, 2, 9),
    black(PitchClass::Fs, 2, 11),
    black(PitchClass::Gs, 2, 12),
    black(PitchClass::As, 2, 13),
];

static STANDARD: KeyboardLayout = KeyboardLayout {
    white: &WHITE_KEYS,
    black: &BLACK_KEYS,
};

/// Static description of the keyboard's keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardLayout {
    white: &'static [PitchClass],
    black: &'static [BlackKeySlot],
}

impl KeyboardLayout {
    /// The two-octave keyboard starting at C
    pub fn standard() -> &'static KeyboardLayout {
        &STANDARD
    }

    /// Pitch classes of the white keys, left to right
    pub fn white_keys(&self) -> &'static [PitchClass] {
        self.white
    }

    /// Black keys, left to right
    pub fn black_keys(&self) -> &'static [BlackKeySlot] {
        self.black
    }

    /// Every key in pitch order, lowest first
    pub fn keys(&self) -> Vec<KeyIdentity> {
        let mut keys: Vec<KeyIdentity> = (0..self.white.len())
            .map(|index| KeyIdentity::White { index: index as u8 })
            .chain(self.black.iter().map(BlackKeySlot::identity))
            .collect();
        keys.sort_by_key(|&key| self.semitone(key));
        keys
    }

    /// Check that a key exists on this keyboard
    pub fn contains(&self, key: KeyIdentity) -> bool {
        self.semitone(key).is_some()
    }

    /// Pitch class sounded by a key
    pub fn pitch_class(&self, key: KeyIdentity) -> Option<PitchClass> {
        match key {
            KeyIdentity::White { index } => self.white.get(index as usize).copied(),
            KeyIdentity::Black { .. } => self.black_slot(key).map(|slot| slot.pitch_class),
        }
    }

    /// Semitones above the lowest C
    pub fn semitone(&self, key: KeyIdentity) -> Option<u8> {
        match key {
            KeyIdentity::White { index } => {
                let pc = self.white.get(index as usize)?;
                Some((index / 7) * 12 + pc.semitone())
            }
            KeyIdentity::Black { .. } => {
                let slot = self.black_slot(key)?;
                Some((slot.octave - 1) * 12 + slot.pitch_class.semitone())
            }
        }
    }

    /// The key for a pitch class in octave 1 or 2
    pub fn key_for(&self, pitch_class: PitchClass, octave: u8) -> Option<KeyIdentity> {
        if !(1..=OCTAVES).contains(&octave) {
            return None;
        }
        match pitch_class.natural_index() {
            Some(natural) => Some(KeyIdentity::White {
                index: (octave - 1) * 7 + natural as u8,
            }),
            None => self
                .black
                .iter()
                .find(|slot| slot.pitch_class == pitch_class && slot.octave == octave)
                .map(BlackKeySlot::identity),
        }
    }

    pub fn black_slot(&self, key: KeyIdentity) -> Option<&'static BlackKeySlot> {
        match key {
            KeyIdentity::Black {
                pitch_class,
                octave,
            } => self
                .black
                .iter()
                .find(|slot| slot.pitch_class == pitch_class && slot.octave == octave),
            KeyIdentity::White { .. } => None,
        }
    }

    /// Label shown on a key. Black keys use the scale's spelling when the
    /// scale contains them and the sharp name otherwise.
    pub fn label(&self, key: KeyIdentity, scale: Option<&Scale>, naming: NoteNaming) -> String {
        let Some(pc) = self.pitch_class(key) else {
            return String::new();
        };
        let name = scale
            .and_then(|s| s.spelling_of(pc))
            .or_else(|| NoteName::natural(pc))
            .unwrap_or_else(|| NoteName::from_parts(pc, Spelling::Sharp));
        name.display(naming)
    }
}
