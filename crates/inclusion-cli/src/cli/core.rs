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

//! Core commands for validation, formatting, and inspection.

use crate::commands::{self, LimitArgs};
use crate::error::CliError;
use clap::Subcommand;

/// Core directive commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Validate a directive
    ///
    /// Parses the directive under the default limits (depth 32, 10000 names,
    /// 65536 characters) unless overridden.
    Validate {
        /// Directive to validate (reads --file or stdin when omitted)
        #[arg(value_name = "DIRECTIVE")]
        directive: Option<String>,

        /// Read the directive from a file
        #[arg(short, long, conflicts_with = "directive")]
        file: Option<String>,

        /// Maximum group nesting depth
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,

        /// Maximum number of names
        #[arg(long, value_name = "N")]
        max_inclusions: Option<usize>,

        /// Disable all limits
        #[arg(long, conflicts_with_all = ["max_depth", "max_inclusions"])]
        unlimited: bool,
    },

    /// Format a directive to canonical form
    ///
    /// Removes spaces, empty groups and duplicate names.
    Format {
        /// Directive to format (reads --file or stdin when omitted)
        #[arg(value_name = "DIRECTIVE")]
        directive: Option<String>,

        /// Read the directive from a file
        #[arg(short, long, conflicts_with = "directive")]
        file: Option<String>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Sort sibling names
        #[arg(long)]
        sort: bool,

        /// Put a space after each comma
        #[arg(long)]
        spaced: bool,

        /// Check only (exit 1 if not canonical)
        #[arg(short, long)]
        check: bool,
    },

    /// Print the parsed tree
    Inspect {
        /// Directive to inspect (reads --file or stdin when omitted)
        #[arg(value_name = "DIRECTIVE")]
        directive: Option<String>,

        /// Read the directive from a file
        #[arg(short, long, conflicts_with = "directive")]
        file: Option<String>,

        /// Show paths and statistics
        #[arg(short, long)]
        verbose: bool,
    },
}

impl CoreCommands {
    /// Execute the core command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Validate {
                directive,
                file,
                max_depth,
                max_inclusions,
                unlimited,
            } => {
                let limits = LimitArgs {
                    max_depth,
                    max_inclusions,
                    unlimited,
                };
                commands::validate(directive.as_deref(), file.as_deref(), &limits)
            }
            CoreCommands::Format {
                directive,
                file,
                output,
                sort,
                spaced,
                check,
            } => commands::format(
                directive.as_deref(),
                file.as_deref(),
                output.as_deref(),
                sort,
                spaced,
                check,
            ),
            CoreCommands::Inspect {
                directive,
                file,
                verbose,
            } => commands::inspect(directive.as_deref(), file.as_deref(), verbose),
        }
    }
}
