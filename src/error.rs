// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for scale construction, keyboard mapping, and drill rounds.

use thiserror::Error;

use crate::music::PitchClass;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, DrillError>;

/// Errors produced by the drill engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    /// Scales may only be rooted on one of the seven natural pitch classes
    #[error("invalid root '{root}': scales must start on a natural note (C D E F G A B)")]
    InvalidRoot { root: PitchClass },

    /// The key-signature table has no spelling for a chromatic degree
    #[error("no spelling for {pitch_class} in the key signature of {key}")]
    UnspelledDegree { key: String, pitch_class: PitchClass },

    /// A scale degree could not be placed on the two-octave keyboard
    #[error("cannot place degree {degree} ({note}) on the keyboard: {reason}")]
    MappingInvariant {
        degree: usize,
        note: String,
        reason: String,
    },

    /// Text could not be parsed as a note name
    #[error("unknown note: '{0}'")]
    UnknownNote(String),

    /// Text could not be parsed as a mode
    #[error("unknown mode: '{0}' (expected major or minor)")]
    UnknownMode(String),

    /// Text could not be parsed as a keyboard key
    #[error("unknown key: '{0}'")]
    UnknownKey(String),

    /// Selections are locked once the round has been checked
    #[error("round already checked; request a new scale first")]
    RoundChecked,
}
