// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The two-octave keyboard the drill is answered on.
//!
//! This module provides the static key layout, the mapping of a scale onto
//! concrete keys, grading of a selection, and a text rendering.

pub mod grader;
pub mod layout;
pub mod render;

pub use grader::{expected_keys, grade, GradeResult, KeyFeedback};
pub use layout::{BlackKeySlot, KeyIdentity, KeyboardLayout, BLACK_KEY_COUNT, WHITE_KEY_COUNT};
pub use render::{render_keyboard, RenderOptions};
