// Dweve Inclusion - Nested Inclusion Directives
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for the inclusion CLI.
//!
//! Every command returns `Result<(), CliError>`; the dispatcher turns the
//! error into the message printed after `Error:`.

use inclusion_c14n::CanonicalError;
use inclusion_core::ParseError;
use inclusion_json::JsonError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// Implements `Clone` so batch workers can hand results across threads.
///
/// # Examples
///
/// ```rust,no_run
/// use inclusion_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured maximum.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes. Set INCL_MAX_FILE_SIZE to raise the limit")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
    },

    /// Directive parsing error.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Canonical rendering error.
    #[error("Canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalError),

    /// JSON conversion error.
    #[error("JSON conversion error: {0}")]
    Json(#[from] JsonError),

    /// `format --check` found a directive that differs from its canonical form.
    #[error("Directive is not in canonical form (expected '{expected}')")]
    NotCanonical {
        /// The canonical form of the input
        expected: String,
    },

    /// One or more lines of a batch failed.
    #[error("{failed} of {total} directives failed validation")]
    BatchFailed {
        /// Number of failed lines
        failed: usize,
        /// Number of processed lines
        total: usize,
    },

    /// Thread pool construction failed.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Invalid command-line input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
