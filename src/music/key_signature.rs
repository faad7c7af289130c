// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Conventional key signatures for the fourteen drillable keys.
//!
//! Every major and natural minor key rooted on a white key has one standard
//! spelling for each of its accidentals. The spellings are listed here as
//! data rather than derived, so F major always reads Bb and never A#.

use std::fmt;

use super::pitch::{NoteName, PitchClass, Spelling};
use super::scale::Mode;

use PitchClass::{As, Cs, Ds, Fs, Gs};
use Spelling::{Flat, Sharp};

/// The spelled accidentals of one key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySignature {
    tonic: PitchClass,
    mode: Mode,
    accidentals: &'static [(PitchClass, Spelling)],
}

static KEY_SIGNATURES: [KeySignature; 14] = [
    // Major keys
    KeySignature {
        tonic: PitchClass::C,
        mode: Mode::Major,
        accidentals: &[],
    },
    KeySignature {
        tonic: PitchClass::D,
        mode: Mode::Major,
        accidentals: &[(Fs, Sharp), (Cs, Sharp)],
    },
    KeySignature {
        tonic: PitchClass::E,
        mode: Mode::Major,
        accidentals: &[(Fs, Sharp), (Cs, Sharp), (Gs, Sharp), (Ds, Sharp)],
    },
    KeySignature {
        tonic: PitchClass::F,
        mode: Mode::Major,
        accidentals: &[(As, Flat)],
    },
    KeySignature {
        tonic: PitchClass::G,
        mode: Mode::Major,
        accidentals: &[(Fs, Sharp)],
    },
    KeySignature {
        tonic: PitchClass::A,
        mode: Mode::Major,
        accidentals: &[(Fs, Sharp), (Cs, Sharp), (Gs, Sharp)],
    },
    KeySignature {
        tonic: PitchClass::B,
        mode: Mode::Major,
        accidentals: &[(Fs, Sharp), (Cs, Sharp), (Gs, Sharp), (Ds, Sharp), (As, Sharp)],
    },
    // Natural minor keys
    KeySignature {
        tonic: PitchClass::C,
        mode: Mode::NaturalMinor,
        accidentals: &[(As, Flat), (Ds, Flat), (Gs, Flat)],
    },
    KeySignature {
        tonic: PitchClass::D,
        mode: Mode::NaturalMinor,
        accidentals: &[(As, Flat)],
    },
    KeySignature {
        tonic: PitchClass::E,
        mode: Mode::NaturalMinor,
        accidentals: &[(Fs, Sharp)],
    },
    KeySignature {
        tonic: PitchClass::F,
        mode: Mode::NaturalMinor,
        accidentals: &[(As, Flat), (Ds, Flat), (Gs, Flat), (Cs, Flat)],
    },
    KeySignature {
        tonic: PitchClass::G,
        mode: Mode::NaturalMinor,
        accidentals: &[(As, Flat), (Ds, Flat)],
    },
    KeySignature {
        tonic: PitchClass::A,
        mode: Mode::NaturalMinor,
        accidentals: &[],
    },
    KeySignature {
        tonic: PitchClass::B,
        mode: Mode::NaturalMinor,
        accidentals: &[(Fs, Sharp), (Cs, Sharp)],
    },
];

impl KeySignature {
    /// Look up the signature of a key; only white-key tonics have one
    pub fn of(tonic: PitchClass, mode: Mode) -> Option<&'static KeySignature> {
        KEY_SIGNATURES
            .iter()
            .find(|sig| sig.tonic == tonic && sig.mode == mode)
    }

    /// All fourteen signatures
    pub fn all() -> &'static [KeySignature] {
        &KEY_SIGNATURES
    }

    pub fn tonic(&self) -> PitchClass {
        self.tonic
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Spelled accidentals, in the order they appear in the signature
    pub fn accidentals(&self) -> impl Iterator<Item = NoteName> + '_ {
        self.accidentals
            .iter()
            .map(|&(pc, spelling)| NoteName::from_parts(pc, spelling))
    }

    /// How this key writes a chromatic pitch class
    pub fn spelling_for(&self, pitch_class: PitchClass) -> Option<Spelling> {
        self.accidentals
            .iter()
            .find(|(pc, _)| *pc == pitch_class)
            .map(|&(_, spelling)| spelling)
    }

    pub fn sharps(&self) -> usize {
        self.count(Spelling::Sharp)
    }

    pub fn flats(&self) -> usize {
        self.count(Spelling::Flat)
    }

    fn count(&self, spelling: Spelling) -> usize {
        self.accidentals.iter().filter(|(_, s)| *s == spelling).count()
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.sharps(), self.flats()) {
            (0, 0) => write!(f, "no sharps or flats"),
            (1, 0) => write!(f, "1 sharp"),
            (n, 0) => write!(f, "{} sharps", n),
            (0, 1) => write!(f, "1 flat"),
            (0, n) => write!(f, "{} flats", n),
            (s, b) => write!(f, "{} sharps, {} flats", s, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_natural_key_has_a_signature() {
        for &tonic in &PitchClass::NATURALS {
            for &mode in &Mode::ALL {
                assert!(KeySignature::of(tonic, mode).is_some(), "{} {}", tonic, mode);
            }
        }
        assert!(KeySignature::of(PitchClass::Fs, Mode::Major).is_none());
        assert_eq!(KeySignature::all().len(), 14);
    }

    #[test]
    fn test_signatures_never_mix_sharps_and_flats() {
        for sig in KeySignature::all() {
            assert!(sig.sharps() == 0 || sig.flats() == 0, "{} {}", sig.tonic(), sig.mode());
        }
    }

    #[test]
    fn test_relative_keys_share_a_signature() {
        let pairs = [
            (PitchClass::C, PitchClass::A),
            (PitchClass::D, PitchClass::B),
            (PitchClass::G, PitchClass::E),
            (PitchClass::F, PitchClass::D),
        ];
        for (major, minor) in pairs {
            let mut a: Vec<_> = KeySignature::of(major, Mode::Major)
                .unwrap()
                .accidentals()
                .collect();
            let mut b: Vec<_> = KeySignature::of(minor, Mode::NaturalMinor)
                .unwrap()
                .accidentals()
                .collect();
            b.sort_by_key(|n| n.pitch_class());
            a.sort_by_key(|n| n.pitch_class());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_signature_display() {
        let shown = |tonic, mode| KeySignature::of(tonic, mode).unwrap().to_string();
        assert_eq!(shown(PitchClass::C, Mode::Major), "no sharps or flats");
        assert_eq!(shown(PitchClass::F, Mode::Major), "1 flat");
        assert_eq!(
            KeySignature::of(PitchClass::F, Mode::NaturalMinor).unwrap().to_string(),
            "4 flats"
        );
        assert_eq!(KeySignature::of(PitchClass::B, Mode::Major).unwrap().to_string(), "5 sharps");
    }

    #[test]
    fn test_spelling_for() {
        let c_minor = KeySignature::of(PitchClass::C, Mode::NaturalMinor).unwrap();
        assert_eq!(c_minor.spelling_for(PitchClass::Ds), Some(Spelling::Flat));
        assert_eq!(c_minor.spelling_for(PitchClass::Fs), None);
    }
}
