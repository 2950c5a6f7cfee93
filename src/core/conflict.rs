// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Hotkey collision detection
//!
//! Two bindings collide when pressing one trigger chain unavoidably presses
//! the other (see `KeyChain::collides_with`). Unlike exact duplicates, prefix
//! collisions can't be found with a hash lookup, so the detector compares
//! pairs directly.
//!
//! # Performance
//! - Add binding: O(1)
//! - Collisions for one chain: O(n · k) where k = chain length
//! - All colliding pairs: O(n² · k)
//!
//! Binding tables are small (tens of entries, chains of a few keys), so the
//! quadratic pass is fine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::chain::KeyChain;

/// A named action bound to a trigger chain.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HotkeyBinding {
    /// Name of the bound action (unique within a store)
    pub name: String,

    /// Keys that fire the action
    pub trigger: KeyChain,
}

impl HotkeyBinding {
    pub fn new(name: impl Into<String>, trigger: KeyChain) -> Self {
        Self {
            name: name.into(),
            trigger,
        }
    }
}

impl fmt::Display for HotkeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.trigger)
    }
}

/// Detects colliding trigger chains among registered bindings.
///
/// Bindings are kept in registration order, which is also the order
/// collisions are reported in.
#[derive(Debug, Default)]
pub struct CollisionDetector {
    bindings: Vec<HotkeyBinding>,
}

/// Two bindings whose triggers collide.
#[derive(Clone, Debug, PartialEq)]
pub struct Collision {
    /// The binding registered first
    pub first: HotkeyBinding,

    /// The binding registered later
    pub second: HotkeyBinding,
}

impl CollisionDetector {
    /// Creates a new empty collision detector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a binding.
    pub fn add_binding(&mut self, binding: HotkeyBinding) {
        tracing::debug!("Registering hotkey '{}' on {}", binding.name, binding.trigger);
        self.bindings.push(binding);
    }

    /// All registered bindings whose trigger collides with `chain`.
    ///
    /// Call before registering a new hotkey to see what it would clash with.
    pub fn colliding_with(&self, chain: &KeyChain) -> Vec<&HotkeyBinding> {
        self.bindings
            .iter()
            .filter(|binding| binding.trigger.collides_with(chain))
            .collect()
    }

    /// Returns true if `chain` collides with any registered binding.
    pub fn has_collision(&self, chain: &KeyChain) -> bool {
        self.bindings
            .iter()
            .any(|binding| binding.trigger.collides_with(chain))
    }

    /// Finds every pair of registered bindings that collide.
    pub fn find_collisions(&self) -> Vec<Collision> {
        let mut collisions = Vec::new();

        for (i, first) in self.bindings.iter().enumerate() {
            for second in &self.bindings[i + 1..] {
                if first.trigger.collides_with(&second.trigger) {
                    tracing::debug!("'{}' collides with '{}'", first.name, second.name);
                    collisions.push(Collision {
                        first: first.clone(),
                        second: second.clone(),
                    });
                }
            }
        }

        collisions
    }

    /// Returns the total number of bindings tracked.
    pub fn total_bindings(&self) -> usize {
        self.bindings.len()
    }
}
