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

//! CLI command definitions and argument parsing.
//!
//! Commands are organized into the following modules:
//!
//! - [`core`]: validate, format, inspect
//! - [`conversion`]: to-json, from-json
//! - [`batch`]: batch-validate
//! - [`utility`]: completion
//!
//! Commands that work on a single directive take it as a positional
//! argument, from `--file`, or from standard input, in that order.

mod batch;
mod conversion;
mod core;
mod utility;

use clap::{Parser, Subcommand};

pub use batch::BatchCommands;
pub use conversion::ConversionCommands;
pub use core::CoreCommands;
pub use utility::UtilityCommands;

/// incl - inclusion directive toolkit
///
/// Validates, formats, inspects and converts inclusion directives such as
/// `tags,people(account,projects(posts,tags))`.
///
/// # Examples
///
/// ```bash
/// # Validate a directive
/// incl validate 'tags,people(account)'
///
/// # Canonical form
/// echo ' tags , people ( account ) ' | incl format
///
/// # Convert to JSON
/// incl to-json 'tags,people(account)' --pretty
///
/// # Validate one directive per line
/// incl batch-validate directives.txt --parallel
/// ```
#[derive(Parser)]
#[command(name = "incl")]
#[command(author, version, about = "incl - inclusion directive toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Core (validate, format, inspect)
/// ├── Conversion (to-json, from-json)
/// ├── Batch (batch-validate)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Core commands - flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Conversion commands - flattened to appear at top level
    #[command(flatten)]
    Conversion(ConversionCommands),

    // Batch commands - flattened to appear at top level
    #[command(flatten)]
    Batch(BatchCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns the message of the [`CliError`](crate::error::CliError) the
    /// command failed with.
    pub fn execute(self) -> Result<(), String> {
        let result = match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Conversion(cmd) => cmd.execute(),
            Commands::Batch(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        };
        result.map_err(|e| e.to_string())
    }
}
