// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! One interactive drill: the current scale, the user's selection, and
//! the verdict once checked.
//!
//! A round runs: new scale -> toggle keys -> check. After a check the
//! selection is locked until the next scale is requested.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use super::selection::SelectionSet;
use crate::config::DrillConfig;
use crate::error::{DrillError, Result};
use crate::keyboard::{GradeResult, KeyIdentity, KeyboardLayout};
use crate::music::{random_scale_from, Mode, PitchClass, Scale};

/// Running count of checked rounds, kept in memory only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub rounds: u32,
    pub correct: u32,
}

/// State of a drill session
#[derive(Debug)]
pub struct DrillSession {
    rng: StdRng,
    roots: Vec<PitchClass>,
    modes: Vec<Mode>,
    scale: Scale,
    selection: SelectionSet,
    result: Option<GradeResult>,
    tally: Tally,
}

impl DrillSession {
    /// Start a session with a random first scale drawn from the config
    pub fn new(config: &DrillConfig) -> anyhow::Result<Self> {
        let roots = config.roots()?;
        let modes = config.modes()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scale = random_scale_from(&mut rng, &roots, &modes)?;
        info!(scale = %scale, "drill started");

        Ok(Self {
            rng,
            roots,
            modes,
            scale,
            selection: SelectionSet::new(),
            result: None,
            tally: Tally::default(),
        })
    }

    /// Start a session on a given scale, with all keys eligible afterwards
    pub fn with_scale(scale: Scale) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            roots: PitchClass::NATURALS.to_vec(),
            modes: Mode::ALL.to_vec(),
            scale,
            selection: SelectionSet::new(),
            result: None,
            tally: Tally::default(),
        }
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The verdict of the current round, once checked
    pub fn result(&self) -> Option<&GradeResult> {
        self.result.as_ref()
    }

    pub fn is_checked(&self) -> bool {
        self.result.is_some()
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Draw a new random scale and reset the round
    pub fn new_scale(&mut self) -> Result<&Scale> {
        let scale = random_scale_from(&mut self.rng, &self.roots, &self.modes)?;
        Ok(self.start_round(scale))
    }

    /// Switch to a specific scale and reset the round
    pub fn set_scale(&mut self, root: PitchClass, mode: Mode) -> Result<&Scale> {
        let scale = Scale::build(root, mode)?;
        Ok(self.start_round(scale))
    }

    fn start_round(&mut self, scale: Scale) -> &Scale {
        info!(scale = %scale, "new round");
        self.scale = scale;
        self.selection.clear();
        self.result = None;
        &self.scale
    }

    /// Flip a key on or off; returns true if it is now selected
    pub fn toggle(&mut self, key: KeyIdentity) -> Result<bool> {
        if self.is_checked() {
            warn!(key = %key, "toggle ignored, round already checked");
            return Err(DrillError::RoundChecked);
        }
        if !KeyboardLayout::standard().contains(key) {
            return Err(DrillError::UnknownKey(key.to_string()));
        }
        Ok(self.selection.toggle(key))
    }

    /// Grade the selection and lock the round. Checking again returns the
    /// same verdict without counting another round.
    pub fn check(&mut self) -> Result<&GradeResult> {
        let result = match self.result.take() {
            Some(result) => result,
            None => {
                let result = GradeResult::compute(&self.scale, self.selection.as_set())?;
                self.tally.rounds += 1;
                if result.is_correct() {
                    self.tally.correct += 1;
                }
                info!(
                    scale = %self.scale,
                    correct = result.is_correct(),
                    rounds = self.tally.rounds,
                    "round checked"
                );
                result
            }
        };
        Ok(&*self.result.insert(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::expected_keys;

    fn seeded(seed: u64) -> DrillConfig {
        DrillConfig {
            seed: Some(seed),
            ..DrillConfig::default()
        }
    }

    #[test]
    fn test_correct_round() {
        let scale = Scale::build(PitchClass::A, Mode::Major).unwrap();
        let mut session = DrillSession::with_scale(scale.clone());

        for key in expected_keys(&scale).unwrap() {
            assert!(session.toggle(key).unwrap());
        }
        let result = session.check().unwrap();
        assert!(result.is_correct());
        assert_eq!(session.tally(), Tally { rounds: 1, correct: 1 });
    }

    #[test]
    fn test_toggle_locked_after_check() {
        let scale = Scale::build(PitchClass::E, Mode::NaturalMinor).unwrap();
        let mut session = DrillSession::with_scale(scale);
        session.toggle(KeyIdentity::White { index: 2 }).unwrap();

        assert!(!session.check().unwrap().is_correct());
        assert_eq!(
            session.toggle(KeyIdentity::White { index: 3 }),
            Err(DrillError::RoundChecked)
        );
        assert_eq!(session.selection().len(), 1);
    }

    #[test]
    fn test_repeat_check_is_stable() {
        let scale = Scale::build(PitchClass::C, Mode::Major).unwrap();
        let mut session = DrillSession::with_scale(scale);
        let first = session.check().unwrap().clone();
        let second = session.check().unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(session.tally().rounds, 1);
    }

    #[test]
    fn test_new_scale_resets_round() {
        let mut session = DrillSession::new(&seeded(5)).unwrap();
        session.toggle(KeyIdentity::White { index: 0 }).unwrap();
        session.check().unwrap();
        assert!(session.is_checked());

        session.new_scale().unwrap();
        assert!(!session.is_checked());
        assert!(session.selection().is_empty());
        assert!(session.toggle(KeyIdentity::White { index: 0 }).unwrap());
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let mut a = DrillSession::new(&seeded(17)).unwrap();
        let mut b = DrillSession::new(&seeded(17)).unwrap();
        assert_eq!(a.scale(), b.scale());
        for _ in 0..5 {
            assert_eq!(a.new_scale().unwrap().clone(), b.new_scale().unwrap().clone());
        }
    }

    #[test]
    fn test_config_restricts_rounds() {
        let config = DrillConfig {
            roots: vec!["G".to_string()],
            modes: vec!["minor".to_string()],
            seed: Some(1),
            ..DrillConfig::default()
        };
        let mut session = DrillSession::new(&config).unwrap();
        for _ in 0..5 {
            assert_eq!(session.new_scale().unwrap().to_string(), "G Minor");
        }
    }

    #[test]
    fn test_set_scale() {
        let mut session = DrillSession::new(&seeded(2)).unwrap();
        let scale = session.set_scale(PitchClass::F, Mode::Major).unwrap();
        assert_eq!(scale.to_string(), "F Major");
        assert!(session.set_scale(PitchClass::Cs, Mode::Major).is_err());
    }

    #[test]
    fn test_toggle_rejects_missing_key() {
        let scale = Scale::build(PitchClass::C, Mode::Major).unwrap();
        let mut session = DrillSession::with_scale(scale);
        let bogus = KeyIdentity::White { index: 20 };
        assert!(matches!(session.toggle(bogus), Err(DrillError::UnknownKey(_))));
    }
}
