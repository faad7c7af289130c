// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The keys a user has toggled on during a round.

use std::collections::HashSet;

use crate::keyboard::{KeyIdentity, KeyboardLayout};

/// Set of selected keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    keys: HashSet<KeyIdentity>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a key; returns true if it is now selected
    pub fn toggle(&mut self, key: KeyIdentity) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn insert(&mut self, key: KeyIdentity) -> bool {
        self.keys.insert(key)
    }

    pub fn remove(&mut self, key: KeyIdentity) -> bool {
        self.keys.remove(&key)
    }

    pub fn contains(&self, key: KeyIdentity) -> bool {
        self.keys.contains(&key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyIdentity> {
        self.keys.iter()
    }

    /// Selected keys in keyboard order
    pub fn sorted(&self) -> Vec<KeyIdentity> {
        let layout = KeyboardLayout::standard();
        let mut keys: Vec<KeyIdentity> = self.keys.iter().copied().collect();
        keys.sort_by_key(|&k| layout.semitone(k));
        keys
    }

    pub fn as_set(&self) -> &HashSet<KeyIdentity> {
        &self.keys
    }
}

impl FromIterator<KeyIdentity> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = KeyIdentity>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
