// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and their written spellings.
//!
//! A [`PitchClass`] is one of the twelve equal-tempered notes of the octave.
//! A [`NoteName`] is a pitch class together with the way it is written
//! (`Bb` rather than `A#`), which is what a scale actually displays.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DrillError;

/// Note names (pitch classes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// The seven white-key pitch classes, in keyboard order from C
    pub const NATURALS: [PitchClass; 7] = [
        PitchClass::C,
        PitchClass::D,
        PitchClass::E,
        PitchClass::F,
        PitchClass::G,
        PitchClass::A,
        PitchClass::B,
    ];

    /// Semitones above C (0-11)
    pub fn semitone(self) -> u8 {
        match self {
            PitchClass::C => 0,
            PitchClass::Cs => 1,
            PitchClass::D => 2,
            PitchClass::Ds => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::Fs => 6,
            PitchClass::G => 7,
            PitchClass::Gs => 8,
            PitchClass::A => 9,
            PitchClass::As => 10,
            PitchClass::B => 11,
        }
    }

    /// Pitch class from a semitone count (wraps at the octave)
    pub fn from_semitone(semitone: u8) -> Self {
        PitchClass::ALL[(semitone % 12) as usize]
    }

    /// True for the seven white-key pitch classes
    pub fn is_natural(self) -> bool {
        self.letter().is_some()
    }

    /// Letter name of a natural pitch class
    pub fn letter(self) -> Option<char> {
        match self {
            PitchClass::C => Some('C'),
            PitchClass::D => Some('D'),
            PitchClass::E => Some('E'),
            PitchClass::F => Some('F'),
            PitchClass::G => Some('G'),
            PitchClass::A => Some('A'),
            PitchClass::B => Some('B'),
            _ => None,
        }
    }

    /// Natural pitch class for an English letter name, any case
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(PitchClass::C),
            'D' => Some(PitchClass::D),
            'E' => Some(PitchClass::E),
            'F' => Some(PitchClass::F),
            'G' => Some(PitchClass::G),
            'A' => Some(PitchClass::A),
            'B' => Some(PitchClass::B),
            _ => None,
        }
    }

    /// Position among the naturals (C = 0 .. B = 6)
    pub fn natural_index(self) -> Option<usize> {
        PitchClass::NATURALS.iter().position(|&pc| pc == self)
    }

    /// Transpose by semitones
    pub fn transpose(self, semitones: i8) -> Self {
        let pc = (self.semitone() as i16 + semitones as i16).rem_euclid(12) as u8;
        PitchClass::from_semitone(pc)
    }

    /// Ascending interval in semitones to another pitch class
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.semitone() as i16 - self.semitone() as i16).rem_euclid(12) as u8
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter() {
            Some(letter) => write!(f, "{}", letter),
            None => write!(f, "{}", NoteName::from_parts(*self, Spelling::Sharp)),
        }
    }
}

impl FromStr for PitchClass {
    type Err = DrillError;

    /// Parse a pitch class, accepting either spelling ("C#", "Cs", "Db").
    /// Accepts exactly the spellings [`NoteName`] does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<NoteName>().map(|name| name.pitch_class())
    }
}

/// How a pitch class is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spelling {
    Natural,
    Sharp,
    Flat,
}

/// Language used when displaying note names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteNaming {
    /// C D E F G A B, with # and b
    #[default]
    English,
    /// C D E F G A H, with -is and -es (B means B-flat)
    German,
}

/// A pitch class with its written spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteName {
    pitch_class: PitchClass,
    spelling: Spelling,
}

impl NoteName {
    /// Create a note name, rejecting spellings that would need a natural
    /// pitch class to carry an accidental (E#, Cb) or vice versa
    pub fn new(pitch_class: PitchClass, spelling: Spelling) -> Option<Self> {
        let valid = match spelling {
            Spelling::Natural => pitch_class.is_natural(),
            Spelling::Sharp | Spelling::Flat => !pitch_class.is_natural(),
        };
        valid.then_some(Self {
            pitch_class,
            spelling,
        })
    }

    pub(crate) fn from_parts(pitch_class: PitchClass, spelling: Spelling) -> Self {
        Self {
            pitch_class,
            spelling,
        }
    }

    /// Natural spelling of a white-key pitch class
    pub fn natural(pitch_class: PitchClass) -> Option<Self> {
        Self::new(pitch_class, Spelling::Natural)
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.pitch_class
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// The written letter: the pitch itself for naturals, the neighbouring
    /// white key for accidentals (A for A#, B for Bb)
    pub fn letter(&self) -> char {
        let base = match self.spelling {
            Spelling::Natural => self.pitch_class,
            Spelling::Sharp => self.pitch_class.transpose(-1),
            Spelling::Flat => self.pitch_class.transpose(1),
        };
        base.letter().unwrap_or('?')
    }

    /// The other spelling of the same pitch class, if it has one
    pub fn enharmonic(&self) -> Option<NoteName> {
        match self.spelling {
            Spelling::Natural => None,
            Spelling::Sharp => Some(Self::from_parts(self.pitch_class, Spelling::Flat)),
            Spelling::Flat => Some(Self::from_parts(self.pitch_class, Spelling::Sharp)),
        }
    }

    /// Render in the given naming convention
    pub fn display(&self, naming: NoteNaming) -> String {
        match naming {
            NoteNaming::English => self.to_string(),
            NoteNaming::German => self.german(),
        }
    }

    /// Parse a written note in the given naming convention
    pub fn parse_with(text: &str, naming: NoteNaming) -> Result<Self, DrillError> {
        match naming {
            NoteNaming::English => text.parse(),
            NoteNaming::German => Self::parse_german(text),
        }
    }

    /// German names: H is B natural, B is B-flat, -is sharpens, -es (or a
    /// bare -s after E and A) flattens
    fn parse_german(text: &str) -> Result<Self, DrillError> {
        let text = text.trim();
        let unknown = || DrillError::UnknownNote(text.to_string());
        let lower = text.to_lowercase();

        let (pitch_class, spelling) = match lower.as_str() {
            "h" => (PitchClass::B, Spelling::Natural),
            "b" => (PitchClass::As, Spelling::Flat),
            "es" => (PitchClass::Ds, Spelling::Flat),
            "as" => (PitchClass::Gs, Spelling::Flat),
            _ => {
                let mut chars = lower.chars();
                let base = chars
                    .next()
                    .filter(|&c| c != 'b')
                    .and_then(PitchClass::from_letter)
                    .ok_or_else(unknown)?;
                match chars.as_str() {
                    "" => (base, Spelling::Natural),
                    "is" => (base.transpose(1), Spelling::Sharp),
                    "es" => (base.transpose(-1), Spelling::Flat),
                    _ => return Err(unknown()),
                }
            }
        };

        NoteName::new(pitch_class, spelling).ok_or_else(unknown)
    }

    fn german(&self) -> String {
        let letter = self.letter();
        match (letter, self.spelling) {
            ('B', Spelling::Natural) => "H".to_string(),
            ('B', Spelling::Flat) => "B".to_string(),
            (l, Spelling::Natural) => l.to_string(),
            (l, Spelling::Sharp) => format!("{}is", l),
            ('E' | 'A', Spelling::Flat) => format!("{}s", letter),
            (l, Spelling::Flat) => format!("{}es", l),
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spelling {
            Spelling::Natural => write!(f, "{}", self.letter()),
            Spelling::Sharp => write!(f, "{}#", self.letter()),
            Spelling::Flat => write!(f, "{}b", self.letter()),
        }
    }
}

impl FromStr for NoteName {
    type Err = DrillError;

    /// Parse a written note ("F", "F#", "Gb"), keeping the spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let unknown = || DrillError::UnknownNote(text.to_string());

        let mut chars = text.chars();
        let base = chars
            .next()
            .and_then(PitchClass::from_letter)
            .ok_or_else(unknown)?;

        let rest = chars.as_str().to_ascii_lowercase();
        let (pitch_class, spelling) = match rest.as_str() {
            "" => (base, Spelling::Natural),
            "#" | "s" => (base.transpose(1), Spelling::Sharp),
            "b" => (base.transpose(-1), Spelling::Flat),
            _ => return Err(unknown()),
        };

        NoteName::new(pitch_class, spelling).ok_or_else(unknown)
    }
}
