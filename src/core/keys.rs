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

//! src/core/keys.rs
//!
//! Key code ↔ human-readable name lookup
//!
//! Matching logic never looks at names; they exist for display and for
//! parsing chains typed by a user. The lookup is a trait so callers can plug
//! in a platform keyboard layout, while `StandardKeyNames` covers the
//! virtual key numbering used by persisted bindings (the AWT `VK_*` codes).

use std::borrow::Cow;

use crate::core::types::KeyCode;

/// Maps key codes to display names and back.
pub trait KeyNames {
    /// Human-readable name for `code`. Must never fail; unmapped codes get a
    /// placeholder name.
    fn name(&self, code: KeyCode) -> Cow<'static, str>;

    /// Reverse lookup, case-insensitive. `None` if no key has that name.
    fn code_for(&self, name: &str) -> Option<KeyCode>;
}

/// Fixed virtual-key table
///
/// Letters, digits, function keys and numpad digits are computed from their
/// contiguous ranges; everything else comes from `NAMED_KEYS`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardKeyNames;

const VK_0: KeyCode = 48;
const VK_9: KeyCode = 57;
const VK_A: KeyCode = 65;
const VK_Z: KeyCode = 90;
const VK_NUMPAD0: KeyCode = 96;
const VK_NUMPAD9: KeyCode = 105;
const VK_F1: KeyCode = 112;
const VK_F12: KeyCode = 123;

/// Named keys outside the computed ranges, in code order.
const NAMED_KEYS: &[(KeyCode, &str)] = &[
    (8, "Backspace"),
    (9, "Tab"),
    (10, "Enter"),
    (16, "Shift"),
    (17, "Ctrl"),
    (18, "Alt"),
    (19, "Pause"),
    (20, "Caps Lock"),
    (27, "Escape"),
    (32, "Space"),
    (33, "Page Up"),
    (34, "Page Down"),
    (35, "End"),
    (36, "Home"),
    (37, "Left"),
    (38, "Up"),
    (39, "Right"),
    (40, "Down"),
    (44, "Comma"),
    (45, "Minus"),
    (46, "Period"),
    (47, "Slash"),
    (59, "Semicolon"),
    (61, "Equals"),
    (91, "Open Bracket"),
    (92, "Back Slash"),
    (93, "Close Bracket"),
    (106, "NumPad *"),
    (107, "NumPad +"),
    (109, "NumPad -"),
    (110, "NumPad ."),
    (111, "NumPad /"),
    (127, "Delete"),
    (144, "Num Lock"),
    (145, "Scroll Lock"),
    (154, "Print Screen"),
    (155, "Insert"),
    (157, "Meta"),
    (192, "Back Quote"),
    (222, "Quote"),
    (524, "Windows"),
    (525, "Context Menu"),
];

/// Alternative spellings accepted by `code_for` (lowercase).
const ALIASES: &[(&str, KeyCode)] = &[
    ("control", 17),
    ("esc", 27),
    ("return", 10),
    ("win", 524),
    ("super", 524),
    ("del", 127),
    ("ins", 155),
    ("pgup", 33),
    ("pgdn", 34),
    ("menu", 525),
];

impl KeyNames for StandardKeyNames {
    fn name(&self, code: KeyCode) -> Cow<'static, str> {
        match code {
            VK_A..=VK_Z | VK_0..=VK_9 => {
                // Both ranges are ASCII, so the cast is lossless.
                Cow::Owned(char::from(code as u8).to_string())
            }
            VK_F1..=VK_F12 => Cow::Owned(format!("F{}", code - VK_F1 + 1)),
            VK_NUMPAD0..=VK_NUMPAD9 => Cow::Owned(format!("NumPad-{}", code - VK_NUMPAD0)),
            _ => NAMED_KEYS
                .binary_search_by_key(&code, |(c, _)| *c)
                .map(|idx| Cow::Borrowed(NAMED_KEYS[idx].1))
                .unwrap_or_else(|_| Cow::Owned(format!("Unknown keyCode: 0x{:x}", code))),
        }
    }

    fn code_for(&self, name: &str) -> Option<KeyCode> {
        let name = name.trim();
        let lower = name.to_lowercase();

        // Single letter or digit
        let mut chars = lower.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_lowercase() {
                return Some(VK_A + (c as KeyCode - 'a' as KeyCode));
            }
            if c.is_ascii_digit() {
                return Some(VK_0 + (c as KeyCode - '0' as KeyCode));
            }
        }

        // F1..F12
        if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<KeyCode>().ok()) {
            if (1..=12).contains(&n) {
                return Some(VK_F1 + n - 1);
            }
        }

        // NumPad-0..NumPad-9
        if let Some(n) = lower.strip_prefix("numpad-").and_then(|n| n.parse::<KeyCode>().ok()) {
            if (0..=9).contains(&n) {
                return Some(VK_NUMPAD0 + n);
            }
        }

        NAMED_KEYS
            .iter()
            .find(|(_, key_name)| key_name.eq_ignore_ascii_case(name))
            .map(|(code, _)| *code)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == lower)
                    .map(|(_, code)| *code)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys_sorted_for_binary_search() {
        assert!(NAMED_KEYS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_computed_ranges() {
        let names = StandardKeyNames;
        assert_eq!(names.name(65), "A");
        assert_eq!(names.name(90), "Z");
        assert_eq!(names.name(48), "0");
        assert_eq!(names.name(112), "F1");
        assert_eq!(names.name(123), "F12");
        assert_eq!(names.name(96), "NumPad-0");
    }

    #[test]
    fn test_named_and_unknown() {
        let names = StandardKeyNames;
        assert_eq!(names.name(17), "Ctrl");
        assert_eq!(names.name(32), "Space");
        assert_eq!(names.name(0x7777), "Unknown keyCode: 0x7777");
    }

    #[test]
    fn test_reverse_lookup_is_case_insensitive() {
        let names = StandardKeyNames;
        assert_eq!(names.code_for("ctrl"), Some(17));
        assert_eq!(names.code_for("CAPS LOCK"), Some(20));
        assert_eq!(names.code_for("a"), Some(65));
        assert_eq!(names.code_for("f10"), Some(121));
        assert_eq!(names.code_for("NumPad-7"), Some(103));
    }

    #[test]
    fn test_reverse_lookup_aliases() {
        let names = StandardKeyNames;
        assert_eq!(names.code_for("Control"), Some(17));
        assert_eq!(names.code_for("esc"), Some(27));
        assert_eq!(names.code_for("Super"), Some(524));
        assert_eq!(names.code_for("Hyper"), None);
        assert_eq!(names.code_for("F13"), None);
    }

    #[test]
    fn test_every_name_round_trips() {
        let names = StandardKeyNames;
        for code in (0..600).filter(|c| !names.name(*c).starts_with("Unknown")) {
            assert_eq!(names.code_for(&names.name(code)), Some(code), "code {code}");
        }
    }
}
