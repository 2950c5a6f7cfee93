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

use crate::core::{CollisionDetector, HotkeyBinding, KeyChain};

const CTRL: i32 = 17;
const SHIFT: i32 = 16;
const C: i32 = 67;
const V: i32 = 86;

/// Helper to create test bindings
fn test_binding(name: &str, keys: &[i32]) -> HotkeyBinding {
    HotkeyBinding::new(name, KeyChain::from_keys(keys.iter().copied()))
}

#[test]
fn test_no_collisions_when_empty() {
    let detector = CollisionDetector::new();
    assert_eq!(detector.find_collisions().len(), 0);
    assert_eq!(detector.total_bindings(), 0);
}

#[test]
fn test_no_collisions_with_distinct_chains() {
    let mut detector = CollisionDetector::new();

    detector.add_binding(test_binding("copy", &[CTRL, C]));
    detector.add_binding(test_binding("paste", &[CTRL, V]));
    detector.add_binding(test_binding("copy-all", &[CTRL, SHIFT, C]));
    detector.add_binding(test_binding("type-c", &[C]));

    assert!(detector.find_collisions().is_empty());
    assert_eq!(detector.total_bindings(), 4);
}

#[test]
fn test_detects_prefix_collision() {
    let mut detector = CollisionDetector::new();

    detector.add_binding(test_binding("copy", &[CTRL, C]));
    detector.add_binding(test_binding("copy-then-paste", &[CTRL, C, V]));

    let collisions = detector.find_collisions();
    assert_eq!(collisions.len(), 1);
    assert_eq!(collisions[0].first.name, "copy");
    assert_eq!(collisions[0].second.name, "copy-then-paste");
}

#[test]
fn test_detects_exact_duplicate() {
    let mut detector = CollisionDetector::new();

    detector.add_binding(test_binding("copy", &[CTRL, C]));
    detector.add_binding(test_binding("clone", &[CTRL, C]));

    assert_eq!(detector.find_collisions().len(), 1);
}

#[test]
fn test_reports_every_pair() {
    let mut detector = CollisionDetector::new();

    // Ctrl prefixes both of the others, which also collide with each other
    detector.add_binding(test_binding("ctrl", &[CTRL]));
    detector.add_binding(test_binding("copy", &[CTRL, C]));
    detector.add_binding(test_binding("copy-again", &[CTRL, C, C]));
    detector.add_binding(test_binding("unrelated", &[SHIFT, V]));

    let collisions = detector.find_collisions();
    assert_eq!(collisions.len(), 3);
    assert!(collisions
        .iter()
        .all(|c| c.first.name != "unrelated" && c.second.name != "unrelated"));
}

#[test]
fn test_colliding_with_candidate() {
    let mut detector = CollisionDetector::new();

    detector.add_binding(test_binding("copy", &[CTRL, C]));
    detector.add_binding(test_binding("paste", &[CTRL, V]));

    let candidate = KeyChain::from_keys([CTRL, C, V]);
    let hits = detector.colliding_with(&candidate);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "copy");
    assert!(detector.has_collision(&candidate));
    assert!(!detector.has_collision(&KeyChain::from_keys([SHIFT])));
}

#[test]
fn test_empty_candidate_collides_with_all() {
    let mut detector = CollisionDetector::new();

    detector.add_binding(test_binding("copy", &[CTRL, C]));
    detector.add_binding(test_binding("paste", &[CTRL, V]));

    assert_eq!(detector.colliding_with(&KeyChain::new()).len(), 2);
}
