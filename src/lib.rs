// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale drill engine.
//!
//! Builds correctly spelled major and natural minor scales, places them on
//! a two-octave keyboard, and grades a set of selected keys against them.

pub mod config;
pub mod drill;
pub mod error;
pub mod keyboard;
pub mod music;

pub use config::DrillConfig;
pub use drill::{DrillSession, SelectionSet, Tally};
pub use error::{DrillError, Result};
pub use keyboard::{expected_keys, grade, GradeResult, KeyFeedback, KeyIdentity, KeyboardLayout};
pub use music::{random_scale, Mode, NoteName, NoteNaming, PitchClass, Scale, Spelling};
