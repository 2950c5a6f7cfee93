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

//! Hotkey Chain
//!
//! Trigger chains for keyboard-driven automation: ordered key presses that
//! fire an action when held down in sequence.
//!
//! # Features
//!
//! - **Collision Detection:** Finds bindings where pressing one chain
//!   unavoidably presses another (prefix match)
//! - **Map-friendly Identity:** Chains compare and hash by key codes, so they
//!   work as `HashMap` keys
//! - **Persistence:** JSON array-of-key-codes format with tolerant parsing
//! - **Text Form:** Chains display as `Ctrl + Shift + C` and parse back
//!
//! # Architecture
//!
//! - **`core`:** Data model (strokes, chains), key names, parser, collisions
//! - **`config`:** Binding store on disk (loading, atomic saving)
//!
//! # Examples
//!
//! ## Checking two chains
//!
//! ```
//! use hotkey_chain::core::KeyChain;
//!
//! let copy = KeyChain::from_keys([17, 67]);
//! let copy_paste = KeyChain::from_keys([17, 67, 86]);
//!
//! assert!(copy.collides_with(&copy_paste));
//! assert_eq!(copy.to_string(), "Ctrl + C");
//! ```
//!
//! ## Detecting collisions in a binding file
//!
//! ```no_run
//! use hotkey_chain::config::BindingStore;
//! use std::path::Path;
//!
//! let store = BindingStore::load(Path::new("/tmp/bindings.json"))?;
//! let collisions = store.detector().find_collisions();
//! if collisions.is_empty() {
//!     println!("No collisions!");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types for convenience
pub use core::{HotkeyBinding, KeyChain, KeyStroke, ModifierSide};
