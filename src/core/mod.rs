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

//! src/core/mod.rs
//!
//! Core hotkey chain model
//!
//! This module contains the data structures and algorithms for trigger
//! chains, including:
//! - Key stroke and modifier side value types
//! - The `KeyChain` sequence with its prefix-collision check
//! - Key code ↔ name lookup
//! - Text parsing of chains
//! - Collision detection across a table of bindings
//!
//! Nothing here touches the filesystem; persistence lives in `config`.

pub mod chain;
pub mod conflict;
pub mod keys;
pub mod parser;
pub mod types;

pub use chain::{ChainDisplay, ChainJsonError, KeyChain};
pub use conflict::{Collision, CollisionDetector, HotkeyBinding};
pub use keys::{KeyNames, StandardKeyNames};
pub use types::*;

#[cfg(test)]
mod tests;
