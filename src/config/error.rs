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

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving a binding store.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Binding file does not exist.
    #[error("Bindings file not found: {0}")]
    NotFound(PathBuf),
    /// File exists but is not a valid bindings document.
    #[error("Malformed bindings file {path}: {message}")]
    Malformed { path: PathBuf, message: String },
    /// A binding with this name is already stored.
    #[error("Binding '{0}' already exists")]
    DuplicateName(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
