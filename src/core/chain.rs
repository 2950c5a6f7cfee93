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

//! src/core/chain.rs
//!
//! Ordered hotkey trigger chains
//!
//! A `KeyChain` is the sequence of keys a user holds down, in order, to fire
//! a binding. This module owns:
//! - Construction and in-place mutation
//! - The prefix-collision check used when registering a new hotkey
//! - Equality and hashing on the key-code sequence (sides ignored)
//! - The JSON array-of-integers persistence format
//!
//! # Modifier sides
//! `contains` and `KeyStroke` equality look at the modifier side, while
//! `collides_with`, `==` and `Hash` only look at key codes. Persistence
//! drops sides entirely, so a round trip resets them to `Unknown`.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

use crate::core::keys::{KeyNames, StandardKeyNames};
use crate::core::types::{KeyCode, KeyStroke};

/// Reasons a JSON array cannot be turned into a `KeyChain`.
#[derive(Debug, Error, PartialEq)]
pub enum ChainJsonError {
    #[error("Element {index} is not a key code: {value}")]
    NotAKeyCode { index: usize, value: String },

    #[error("Key code out of range at element {index}: {value}")]
    OutOfRange { index: usize, value: String },
}

/// An ordered sequence of key strokes that together form a trigger.
///
/// Each stroke carries its own key code and modifier side, so the two can
/// never drift out of alignment.
///
/// # Example
/// ```
/// use hotkey_chain::core::KeyChain;
///
/// let asd = KeyChain::from_keys([65, 83, 68]);
/// let as_ = KeyChain::from_keys([65, 83]);
/// let sd = KeyChain::from_keys([83, 68]);
///
/// assert!(asd.collides_with(&as_));
/// assert!(!asd.collides_with(&sd));
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeyChain {
    strokes: Vec<KeyStroke>,
}

impl KeyChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a one-key chain with an unspecified side.
    pub fn from_key(key_code: KeyCode) -> Self {
        Self::from_keys([key_code])
    }

    /// Creates a chain from raw key codes, every side `Unknown`.
    pub fn from_keys<I>(key_codes: I) -> Self
    where
        I: IntoIterator<Item = KeyCode>,
    {
        Self {
            strokes: key_codes.into_iter().map(KeyStroke::new).collect(),
        }
    }

    /// Creates a chain from strokes, keeping their sides.
    pub fn from_strokes<I>(strokes: I) -> Self
    where
        I: IntoIterator<Item = KeyStroke>,
    {
        Self {
            strokes: strokes.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// The strokes in press order.
    pub fn strokes(&self) -> &[KeyStroke] {
        &self.strokes
    }

    /// Key codes in press order.
    pub fn key_codes(&self) -> impl ExactSizeIterator<Item = KeyCode> + '_ {
        self.strokes.iter().map(KeyStroke::key_code)
    }

    /// Returns true if some stroke matches `stroke` exactly, side included.
    pub fn contains(&self, stroke: &KeyStroke) -> bool {
        self.strokes.iter().any(|s| s == stroke)
    }

    /// Checks whether triggering one chain forces the other to trigger.
    ///
    /// To trigger a chain is to press its keys in order without releasing
    /// any of them. So the two collide exactly when the shorter chain's key
    /// codes are the leading codes of the longer one. An empty chain is a
    /// prefix of everything. Modifier sides are not consulted.
    ///
    /// `A + S + D` collides with `A + S`, but not with `S + D` or `D + S`.
    /// `Ctrl + Shift + C` does not collide with `Ctrl + C`.
    pub fn collides_with(&self, other: &KeyChain) -> bool {
        let (shorter, longer) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        shorter.key_codes().eq(longer.key_codes().take(shorter.len()))
    }

    /// Appends one stroke.
    pub fn add_key_stroke(&mut self, stroke: KeyStroke) {
        self.strokes.push(stroke);
    }

    /// Appends every stroke of `other`, in order. `other` is left untouched.
    pub fn add_from(&mut self, other: &KeyChain) {
        self.strokes.extend_from_slice(&other.strokes);
    }

    /// Removes all strokes.
    pub fn clear_keys(&mut self) {
        self.strokes.clear();
    }

    /// Renders key names joined by `" + "` using the given lookup.
    pub fn display<'a>(&'a self, names: &'a dyn KeyNames) -> ChainDisplay<'a> {
        ChainDisplay { chain: self, names }
    }

    /// Persisted form: a JSON array of key codes. Sides are dropped.
    pub fn to_json(&self) -> Value {
        Value::Array(self.key_codes().map(Value::from).collect())
    }

    /// Restores a chain from its persisted form.
    ///
    /// Every side comes back as `Unknown`. On any malformed element the
    /// failure is logged and `None` is returned; callers treat that as a
    /// recoverable parse failure.
    pub fn from_json(nodes: &[Value]) -> Option<KeyChain> {
        match Self::try_from_json(nodes) {
            Ok(chain) => Some(chain),
            Err(e) => {
                tracing::warn!("Unable to parse KeyChain: {}", e);
                None
            }
        }
    }

    /// Like [`KeyChain::from_json`], but hands back the failure instead of
    /// logging it.
    ///
    /// Accepts integer numbers and strings holding an integer, both within
    /// `i32` range. Strings must be the bare integer, no surrounding
    /// whitespace.
    pub fn try_from_json(nodes: &[Value]) -> Result<KeyChain, ChainJsonError> {
        nodes
            .iter()
            .enumerate()
            .map(|(index, node)| key_code_from_node(index, node))
            .collect::<Result<Vec<_>, _>>()
            .map(KeyChain::from_keys)
    }
}

fn key_code_from_node(index: usize, node: &Value) -> Result<KeyCode, ChainJsonError> {
    let wide = match node {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(|| ChainJsonError::NotAKeyCode {
        index,
        value: node.to_string(),
    })?;

    KeyCode::try_from(wide).map_err(|_| ChainJsonError::OutOfRange {
        index,
        value: node.to_string(),
    })
}

impl PartialEq for KeyChain {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.key_codes().eq(other.key_codes())
    }
}

impl Eq for KeyChain {}

impl Hash for KeyChain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with PartialEq: codes only, never sides.
        self.len().hash(state);
        for code in self.key_codes() {
            code.hash(state);
        }
    }
}

impl From<KeyCode> for KeyChain {
    fn from(key_code: KeyCode) -> Self {
        Self::from_key(key_code)
    }
}

impl FromIterator<KeyCode> for KeyChain {
    fn from_iter<I: IntoIterator<Item = KeyCode>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl FromIterator<KeyStroke> for KeyChain {
    fn from_iter<I: IntoIterator<Item = KeyStroke>>(iter: I) -> Self {
        Self::from_strokes(iter)
    }
}

impl Extend<KeyStroke> for KeyChain {
    fn extend<I: IntoIterator<Item = KeyStroke>>(&mut self, iter: I) {
        self.strokes.extend(iter);
    }
}

impl fmt::Display for KeyChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(&StandardKeyNames))
    }
}

/// Named rendering of a [`KeyChain`], produced by [`KeyChain::display`].
pub struct ChainDisplay<'a> {
    chain: &'a KeyChain,
    names: &'a dyn KeyNames,
}

impl fmt::Display for ChainDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .chain
            .key_codes()
            .map(|code| self.names.name(code))
            .collect::<Vec<_>>()
            .join(" + ");
        write!(f, "{}", rendered)
    }
}

impl Serialize for KeyChain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.key_codes())
    }
}

impl<'de> Deserialize<'de> for KeyChain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Same acceptance rules as the persisted form, numeric strings included
        let nodes = Vec::<Value>::deserialize(deserializer)?;
        KeyChain::try_from_json(&nodes).map_err(de::Error::custom)
    }
}
