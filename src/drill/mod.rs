// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Drill rounds: selection state and the session that owns it.

pub mod selection;
pub mod session;

pub use selection::SelectionSet;
pub use session::{DrillSession, Tally};
