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

//! Format conversion commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Conversion between directives and JSON.
#[derive(Subcommand)]
pub enum ConversionCommands {
    /// Convert a directive to JSON
    ToJson {
        /// Directive to convert (reads --file or stdin when omitted)
        #[arg(value_name = "DIRECTIVE")]
        directive: Option<String>,

        /// Read the directive from a file
        #[arg(short, long, conflicts_with = "directive")]
        file: Option<String>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Convert a JSON object to a directive
    FromJson {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Put a space after each comma
        #[arg(long)]
        spaced: bool,
    },
}

impl ConversionCommands {
    /// Execute the conversion command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ConversionCommands::ToJson {
                directive,
                file,
                output,
                pretty,
            } => commands::to_json(directive.as_deref(), file.as_deref(), output.as_deref(), pretty),
            ConversionCommands::FromJson {
                file,
                output,
                spaced,
            } => commands::from_json(&file, output.as_deref(), spaced),
        }
    }
}
