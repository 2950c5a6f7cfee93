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

use crate::core::types::{KeyStroke, ModifierSide};

#[test]
fn test_stroke_equality_uses_both_fields() {
    assert_eq!(KeyStroke::of(17, ModifierSide::Left), KeyStroke::of(17, ModifierSide::Left));
    assert_ne!(KeyStroke::of(17, ModifierSide::Left), KeyStroke::of(17, ModifierSide::Right));
    assert_ne!(KeyStroke::of(17, ModifierSide::Left), KeyStroke::of(16, ModifierSide::Left));
}

#[test]
fn test_stroke_accessors() {
    let stroke = KeyStroke::of(16, ModifierSide::Right);
    assert_eq!(stroke.key_code(), 16);
    assert_eq!(stroke.modifier_side(), ModifierSide::Right);
}

#[test]
fn test_new_is_unknown_side() {
    assert_eq!(KeyStroke::new(65), KeyStroke::of(65, ModifierSide::Unknown));
}

#[test]
fn test_modifier_side_raw_tags() {
    for side in [ModifierSide::Unknown, ModifierSide::Left, ModifierSide::Right] {
        assert_eq!(ModifierSide::from_raw(side.as_raw()), side);
    }
    assert_eq!(ModifierSide::Left.as_raw(), 1);
    assert_eq!(ModifierSide::from_raw(7), ModifierSide::Unknown);
}

#[test]
fn test_stroke_display() {
    assert_eq!(format!("{}", KeyStroke::new(65)), "65");
    assert_eq!(format!("{}", KeyStroke::of(17, ModifierSide::Left)), "17(left)");
}
