// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory for the drill.
//!
//! This module provides pitch classes and spellings, the conventional key
//! signatures, and construction of the scales the drill asks for.

pub mod key_signature;
pub mod pitch;
pub mod scale;

pub use key_signature::KeySignature;
pub use pitch::{NoteName, NoteNaming, PitchClass, Spelling};
pub use scale::{random_scale, random_scale_from, random_scale_with, Mode, Scale, SCALE_DEGREES};
