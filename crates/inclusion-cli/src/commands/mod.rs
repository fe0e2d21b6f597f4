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

//! CLI command implementations

mod batch_commands;
mod completion;
mod convert;
mod format;
mod inspect;
mod validate;

pub use batch_commands::batch_validate;
pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use convert::{from_json, to_json};
pub use format::format;
pub use inspect::inspect;
pub use validate::{validate, LimitArgs};

use crate::error::CliError;
use std::fs;
use std::io::{self, Read, Write};

/// Default maximum input size (1 MiB).
///
/// Can be overridden via the `INCL_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Label used for a directive passed on the command line.
pub const ARGUMENT_LABEL: &str = "<argument>";

/// Label used for a directive read from standard input.
pub const STDIN_LABEL: &str = "<stdin>";

fn get_max_file_size() -> u64 {
    std::env::var("INCL_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// A directive together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// `<argument>`, `<stdin>` or the file path
    pub source: String,
    /// The directive text, surrounding whitespace removed
    pub directive: String,
}

/// Read a file from disk with size validation.
///
/// Files larger than `INCL_MAX_FILE_SIZE` bytes are rejected before reading.
///
/// # Examples
///
/// ```no_run
/// use inclusion_cli::commands::read_file;
///
/// # fn main() -> Result<(), inclusion_cli::error::CliError> {
/// let content = read_file("directives.txt")?;
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

fn read_stdin() -> Result<String, CliError> {
    let max_file_size = get_max_file_size();
    let mut buffer = String::new();

    io::stdin()
        .lock()
        .take(max_file_size.saturating_add(1))
        .read_to_string(&mut buffer)
        .map_err(|e| CliError::io_error(STDIN_LABEL, e))?;

    if buffer.len() as u64 > max_file_size {
        return Err(CliError::file_too_large(
            STDIN_LABEL,
            buffer.len() as u64,
            max_file_size,
        ));
    }

    Ok(buffer)
}

/// Resolve the directive to work on.
///
/// The positional directive wins, then `--file`, then standard input.
/// File and stdin content is trimmed so a trailing newline does not end up
/// in the last name.
pub fn read_input(directive: Option<&str>, file: Option<&str>) -> Result<Input, CliError> {
    let input = match (directive, file) {
        (Some(directive), _) => Input {
            source: ARGUMENT_LABEL.to_string(),
            directive: directive.to_string(),
        },
        (None, Some(path)) => Input {
            source: path.to_string(),
            directive: read_file(path)?.trim().to_string(),
        },
        (None, None) => Input {
            source: STDIN_LABEL.to_string(),
            directive: read_stdin()?.trim().to_string(),
        },
    };

    tracing::debug!(source = %input.source, length = input.directive.len(), "resolved input");
    Ok(input)
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
