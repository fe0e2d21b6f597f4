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

//! Batch command implementations - validate many directives at once

use super::read_file;
use crate::batch::{BatchConfig, BatchProcessor, DirectiveLine, ValidationOperation};
use crate::error::CliError;
use colored::Colorize;

/// Validate every non-blank line of a file as a directive.
///
/// Lines are parsed under the default limits. All lines are processed even
/// when some fail; the failures are then listed with their line numbers.
///
/// # Arguments
///
/// * `file` - File with one directive per line
/// * `parallel` - Process in parallel regardless of batch size
/// * `threads` - Size of a dedicated thread pool
/// * `verbose` - Report each line as it is processed
///
/// # Examples
///
/// ```no_run
/// use inclusion_cli::commands::batch_validate;
///
/// # fn main() -> Result<(), inclusion_cli::error::CliError> {
/// batch_validate("directives.txt", true, Some(4), false)?;
/// # Ok(())
/// # }
/// ```
pub fn batch_validate(
    file: &str,
    parallel: bool,
    threads: Option<usize>,
    verbose: bool,
) -> Result<(), CliError> {
    if threads == Some(0) {
        return Err(CliError::invalid_input("--threads must be at least 1"));
    }

    let content = read_file(file)?;
    let lines = DirectiveLine::from_text(&content);

    let defaults = BatchConfig::default();
    let config = BatchConfig {
        parallel_threshold: if parallel { 1 } else { defaults.parallel_threshold },
        max_threads: threads,
        verbose,
    };

    let processor = BatchProcessor::new(config);
    let results = processor.process(&lines, ValidationOperation::default(), true)?;

    if results.has_failures() {
        eprintln!();
        eprintln!("{}", "Validation failures:".red().bold());
        for failure in results.failures() {
            eprintln!("  {} line {}: {}", "✗".red(), failure.line, failure.directive);
            if let Err(e) = &failure.result {
                eprintln!("    {}", e.to_string().dimmed());
            }
        }
        return Err(CliError::BatchFailed {
            failed: results.failure_count(),
            total: results.total(),
        });
    }

    Ok(())
}
