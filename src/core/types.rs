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

//! src/core/types.rs
//!
//! Leaf value types for hotkey chains
//!
//! This module defines the smallest building blocks:
//! - `KeyCode`: Platform-defined logical key identifier
//! - `ModifierSide`: Which half of a mirrored key pair was pressed
//! - `KeyStroke`: One physical key press (code + side)
//!
//! Key codes are opaque here. Equality is by raw value, and turning a
//! code into something human-readable is the job of `core::keys`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::keys::KeyNames;

/// Platform-defined logical key identifier.
pub type KeyCode = i32;

/// Physical side of a key that exists as a mirrored pair
///
/// Shift, Ctrl and Alt each have a left and a right physical key sharing
/// one key code. `Unknown` covers both "not recorded" and keys that have
/// no mirror at all.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ModifierSide {
    /// Unspecified, or a key without a mirrored twin
    #[default]
    Unknown,
    /// Left-hand key of the pair
    Left,
    /// Right-hand key of the pair
    Right,
}

impl ModifierSide {
    /// Numeric tag used by recorders and legacy data (0, 1, 2).
    pub fn as_raw(self) -> i32 {
        match self {
            ModifierSide::Unknown => 0,
            ModifierSide::Left => 1,
            ModifierSide::Right => 2,
        }
    }

    /// Inverse of [`ModifierSide::as_raw`]. Out-of-range tags map to `Unknown`.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => ModifierSide::Left,
            2 => ModifierSide::Right,
            _ => ModifierSide::Unknown,
        }
    }
}

impl fmt::Display for ModifierSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierSide::Unknown => write!(f, "unknown"),
            ModifierSide::Left => write!(f, "left"),
            ModifierSide::Right => write!(f, "right"),
        }
    }
}

/// A single key press
///
/// Immutable value: two strokes are equal iff both the key code and the
/// modifier side match. Note that `KeyChain` equality deliberately looks at
/// key codes only; see `core::chain`.
///
/// # Example
/// ```
/// use hotkey_chain::core::{KeyStroke, ModifierSide};
///
/// let left_ctrl = KeyStroke::of(17, ModifierSide::Left);
/// assert_eq!(left_ctrl.key_code(), 17);
/// assert_ne!(left_ctrl, KeyStroke::of(17, ModifierSide::Right));
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct KeyStroke {
    key_code: KeyCode,
    modifier_side: ModifierSide,
}

impl KeyStroke {
    /// Creates a stroke for `key_code` pressed on `modifier_side`.
    pub fn of(key_code: KeyCode, modifier_side: ModifierSide) -> Self {
        Self {
            key_code,
            modifier_side,
        }
    }

    /// Creates a stroke with an unspecified side.
    pub fn new(key_code: KeyCode) -> Self {
        Self::of(key_code, ModifierSide::Unknown)
    }

    pub fn key_code(&self) -> KeyCode {
        self.key_code
    }

    pub fn modifier_side(&self) -> ModifierSide {
        self.modifier_side
    }

    /// Renders the stroke with a human-readable key name.
    ///
    /// The side is appended in parentheses unless it is `Unknown`,
    /// e.g. `Ctrl (left)`.
    pub fn display<'a>(&self, names: &'a dyn KeyNames) -> StrokeDisplay<'a> {
        StrokeDisplay {
            stroke: *self,
            names,
        }
    }
}

impl fmt::Display for KeyStroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key_code)?;
        if self.modifier_side != ModifierSide::Unknown {
            write!(f, "({})", self.modifier_side)?;
        }
        Ok(())
    }
}

/// Named rendering of a [`KeyStroke`], produced by [`KeyStroke::display`].
pub struct StrokeDisplay<'a> {
    stroke: KeyStroke,
    names: &'a dyn KeyNames,
}

impl fmt::Display for StrokeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.name(self.stroke.key_code))?;
        if self.stroke.modifier_side != ModifierSide::Unknown {
            write!(f, " ({})", self.stroke.modifier_side)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keys::StandardKeyNames;

    #[test]
    fn test_default_side_is_unknown() {
        assert_eq!(ModifierSide::default(), ModifierSide::Unknown);
        assert_eq!(KeyStroke::new(65).modifier_side(), ModifierSide::Unknown);
    }

    #[test]
    fn test_stroke_display_with_names() {
        let names = StandardKeyNames;
        let stroke = KeyStroke::of(17, ModifierSide::Right);
        assert_eq!(stroke.display(&names).to_string(), "Ctrl (right)");
        assert_eq!(KeyStroke::new(65).display(&names).to_string(), "A");
    }
}
