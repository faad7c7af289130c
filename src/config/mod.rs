// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for drill sessions.
//!
//! Controls which keys random rounds are drawn from, how notes are named,
//! and whether rounds are reproducible.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::{Mode, NoteNaming, PitchClass};

/// Drill settings, usually loaded from a YAML file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrillConfig {
    /// Roots random rounds may use (e.g., "C", "F")
    #[serde(default = "default_roots")]
    pub roots: Vec<String>,
    /// Modes random rounds may use ("major", "minor")
    #[serde(default = "default_modes")]
    pub modes: Vec<String>,
    /// Note naming for display
    #[serde(default)]
    pub naming: NoteNaming,
    /// Fixed RNG seed for reproducible rounds
    #[serde(default)]
    pub seed: Option<u64>,
    /// Highlight the root key before checking
    #[serde(default = "default_mark_root")]
    pub mark_root: bool,
}

fn default_roots() -> Vec<String> {
    PitchClass::NATURALS.iter().map(|pc| pc.to_string()).collect()
}
fn default_modes() -> Vec<String> {
    vec!["major".to_string(), "minor".to_string()]
}
fn default_mark_root() -> bool {
    true
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            modes: default_modes(),
            naming: NoteNaming::default(),
            seed: None,
            mark_root: default_mark_root(),
        }
    }
}

impl DrillConfig {
    /// Load a drill configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a drill configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Roots as pitch classes; each must be a natural note
    pub fn roots(&self) -> Result<Vec<PitchClass>> {
        if self.roots.is_empty() {
            bail!("Config must list at least one root");
        }
        self.roots
            .iter()
            .map(|name| {
                let pc = PitchClass::from_str(name)
                    .with_context(|| format!("Invalid root in config: {:?}", name))?;
                if !pc.is_natural() {
                    bail!("Root {:?} is not a natural note (C D E F G A B)", name);
                }
                Ok(pc)
            })
            .collect()
    }

    /// Modes as parsed values
    pub fn modes(&self) -> Result<Vec<Mode>> {
        if self.modes.is_empty() {
            bail!("Config must list at least one mode");
        }
        self.modes
            .iter()
            .map(|name| {
                Mode::from_str(name).with_context(|| format!("Invalid mode in config: {:?}", name))
            })
            .collect()
    }
}

/// Load and fully check a configuration without starting a drill
pub fn validate_config<P: AsRef<Path>>(path: P) -> Result<DrillConfig> {
    let config = DrillConfig::load(path)?;
    config.roots()?;
    config.modes()?;
    Ok(config)
}
