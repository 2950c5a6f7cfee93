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

//! Binding table persistence.
//!
//! Stores named hotkey bindings in a small JSON document:
//!
//! ```json
//! { "bindings": [ { "name": "copy", "trigger": [17, 67] } ] }
//! ```
//!
//! - **Lossy triggers**: chains are written as key codes only, so modifier
//!   sides come back as `Unknown`
//! - **Tolerant loading**: an entry whose trigger can't be parsed is skipped
//!   with a warning instead of failing the whole file
//! - **Atomic writes**: saving goes through a temp file and rename, so a
//!   crash never leaves a half-written store
//!
//! # Example
//!
//! ```no_run
//! use hotkey_chain::config::BindingStore;
//! use hotkey_chain::core::{HotkeyBinding, KeyChain};
//! use std::path::Path;
//!
//! let path = Path::new("/tmp/bindings.json");
//! let mut store = BindingStore::load(path)?;
//! store.insert(HotkeyBinding::new("copy", KeyChain::from_keys([17, 67])))?;
//! store.save(path)?;
//! # Ok::<(), hotkey_chain::config::ConfigError>(())
//! ```

mod error;

pub use error::ConfigError;

use atomic_write_file::AtomicWriteFile;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::{CollisionDetector, HotkeyBinding, KeyChain};

/// On-disk shape used when reading. Triggers stay raw so each one can be
/// validated on its own.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    bindings: Vec<RawBinding>,
}

#[derive(Deserialize)]
struct RawBinding {
    name: String,
    trigger: Value,
}

#[derive(Serialize)]
struct Document<'a> {
    bindings: &'a [HotkeyBinding],
}

/// An ordered table of uniquely named hotkey bindings.
#[derive(Clone, Debug, Default)]
pub struct BindingStore {
    bindings: Vec<HotkeyBinding>,
}

impl BindingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a store from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist and
    /// `ConfigError::Malformed` if it isn't a bindings document. Entries with
    /// an unreadable trigger or a repeated name are skipped, not errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content).map_err(|e| ConfigError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parses a store from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let raw: RawDocument = serde_json::from_str(content)?;
        let mut store = Self::new();

        for entry in raw.bindings {
            let trigger = match entry.trigger.as_array() {
                Some(nodes) => KeyChain::from_json(nodes),
                None => {
                    tracing::warn!("Unable to parse KeyChain: trigger is not an array");
                    None
                }
            };
            let Some(trigger) = trigger else {
                tracing::warn!("Skipping binding '{}': unreadable trigger", entry.name);
                continue;
            };

            if let Err(e) = store.insert(HotkeyBinding::new(entry.name, trigger)) {
                tracing::warn!("Skipping binding: {}", e);
            }
        }

        Ok(store)
    }

    /// Serialises the store as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Document {
            bindings: &self.bindings,
        })
    }

    /// Writes the store to `path` atomically, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self
            .to_json_string()
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to serialise bindings: {}", e)))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Open file for atomic writing
        let mut file = AtomicWriteFile::options().open(path).map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e))
        })?;

        file.write_all(content.as_bytes())
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

        file.commit().map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e))
        })?;

        tracing::debug!("Saved {} bindings to {}", self.bindings.len(), path.display());
        Ok(())
    }

    /// Adds a binding.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateName` if the name is taken. Colliding
    /// triggers are allowed here; use [`BindingStore::detector`] to find them.
    pub fn insert(&mut self, binding: HotkeyBinding) -> Result<(), ConfigError> {
        if self.get(&binding.name).is_some() {
            return Err(ConfigError::DuplicateName(binding.name));
        }
        self.bindings.push(binding);
        Ok(())
    }

    /// Removes and returns the binding called `name`.
    pub fn remove(&mut self, name: &str) -> Option<HotkeyBinding> {
        let idx = self.bindings.iter().position(|b| b.name == name)?;
        Some(self.bindings.remove(idx))
    }

    pub fn get(&self, name: &str) -> Option<&HotkeyBinding> {
        self.bindings.iter().find(|b| b.name == name)
    }

    pub fn bindings(&self) -> &[HotkeyBinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Builds a collision detector over every stored binding.
    pub fn detector(&self) -> CollisionDetector {
        let mut detector = CollisionDetector::new();
        for binding in &self.bindings {
            detector.add_binding(binding.clone());
        }
        detector
    }
}

/// Expands a leading `~` in a user-supplied path.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

#[cfg(test)]
mod tests;
