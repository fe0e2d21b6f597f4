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

//! Validate command - directive syntax and limit checking

use super::read_input;
use crate::error::CliError;
use colored::Colorize;
use inclusion_core::{parse_with_options, ParseOptions};

/// Limit overrides accepted by `validate`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LimitArgs {
    /// Override the maximum nesting depth
    pub max_depth: Option<usize>,
    /// Override the maximum number of names
    pub max_inclusions: Option<usize>,
    /// Disable all limits
    pub unlimited: bool,
}

impl LimitArgs {
    /// Parse options for these overrides, starting from the default limits.
    pub fn to_options(&self) -> ParseOptions {
        if self.unlimited {
            return ParseOptions::unlimited();
        }

        let mut builder = ParseOptions::builder();
        if let Some(depth) = self.max_depth {
            builder = builder.max_depth(depth);
        }
        if let Some(count) = self.max_inclusions {
            builder = builder.max_inclusions(count);
        }
        builder.build()
    }
}

/// Validate a directive.
///
/// Prints `✓` with the number of inclusions and the nesting depth, or `✗`
/// followed by an error.
///
/// # Examples
///
/// ```no_run
/// use inclusion_cli::commands::{validate, LimitArgs};
///
/// # fn main() -> Result<(), inclusion_cli::error::CliError> {
/// validate(Some("tags,people(account)"), None, &LimitArgs::default())?;
///
/// let strict = LimitArgs { max_depth: Some(1), ..LimitArgs::default() };
/// assert!(validate(Some("a(b(c))"), None, &strict).is_err());
/// # Ok(())
/// # }
/// ```
pub fn validate(
    directive: Option<&str>,
    file: Option<&str>,
    limits: &LimitArgs,
) -> Result<(), CliError> {
    let input = read_input(directive, file)?;

    match parse_with_options(&input.directive, &limits.to_options()) {
        Ok(tree) => {
            println!("{} {}", "✓".green().bold(), input.source);
            println!("  Inclusions: {}", tree.total_count());
            println!("  Depth: {}", tree.depth());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), input.source);
            Err(e.into())
        }
    }
}
