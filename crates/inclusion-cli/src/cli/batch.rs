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

//! Batch processing commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Commands that work on many directives.
#[derive(Subcommand)]
pub enum BatchCommands {
    /// Validate one directive per line of a file
    ///
    /// Blank lines are skipped. Failures are reported with their line numbers.
    BatchValidate {
        /// File with one directive per line
        #[arg(value_name = "FILE")]
        file: String,

        /// Process in parallel regardless of batch size
        #[arg(short, long)]
        parallel: bool,

        /// Number of worker threads
        #[arg(short = 'j', long, value_name = "THREADS")]
        threads: Option<usize>,

        /// Report every line
        #[arg(short, long)]
        verbose: bool,
    },
}

impl BatchCommands {
    /// Execute the batch command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            BatchCommands::BatchValidate {
                file,
                parallel,
                threads,
                verbose,
            } => commands::batch_validate(&file, parallel, threads, verbose),
        }
    }
}
