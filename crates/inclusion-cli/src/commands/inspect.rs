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

//! Inspect command - inclusion tree visualization

use super::read_input;
use crate::error::CliError;
use colored::Colorize;
use inclusion_core::traverse::{traverse, InclusionVisitor, TraverseError, VisitorContext};
use inclusion_core::{parse_with_options, InclusionTree, ParseOptions, StatsCollector};

/// Inspect and visualize the tree a directive parses to.
///
/// Groups show their number of nested names. In verbose mode the dotted
/// path of every inclusion and summary statistics follow the tree.
///
/// # Examples
///
/// ```no_run
/// use inclusion_cli::commands::inspect;
///
/// # fn main() -> Result<(), inclusion_cli::error::CliError> {
/// inspect(Some("tags,people(account,projects(posts,tags))"), None, true)?;
/// # Ok(())
/// # }
/// ```
///
/// # Output
///
/// ```text
/// Inclusion Tree
///
/// Source:  <argument>
///
/// Tree:
///   tags
///   people (2)
///     account
///     projects (2)
///       posts
///       tags
/// ```
pub fn inspect(directive: Option<&str>, file: Option<&str>, verbose: bool) -> Result<(), CliError> {
    let input = read_input(directive, file)?;
    let tree = parse_with_options(&input.directive, &ParseOptions::default())?;

    println!("{}", "Inclusion Tree".bold().underline());
    println!();
    println!("{}  {}", "Source:".cyan(), input.source);
    println!();
    println!("{}", "Tree:".cyan());

    if tree.is_empty() {
        println!("  {}", "(empty)".dimmed());
    } else {
        let mut printer = TreePrinter::default();
        traverse(&tree, &mut printer).map_err(|e| CliError::invalid_input(e.to_string()))?;
        for line in &printer.lines {
            println!("{}", line);
        }
    }

    if verbose {
        let stats =
            StatsCollector::collect(&tree).map_err(|e| CliError::invalid_input(e.to_string()))?;

        println!();
        println!("{}", "Paths:".cyan());
        for path in tree.paths() {
            println!("  {}", path);
        }

        println!();
        println!("{}", "Statistics:".cyan());
        println!("  Inclusions: {}", stats.inclusions);
        println!("  Leaves: {}", stats.leaves);
        println!("  Groups: {}", stats.groups);
        println!("  Max depth: {}", stats.max_depth);
    }

    Ok(())
}

#[derive(Default)]
struct TreePrinter {
    lines: Vec<String>,
}

impl InclusionVisitor for TreePrinter {
    type Error = TraverseError;

    fn visit_inclusion(
        &mut self,
        name: &str,
        subtree: &InclusionTree,
        ctx: &VisitorContext,
    ) -> Result<(), Self::Error> {
        let prefix = "  ".repeat(ctx.depth + 1);
        let line = if subtree.is_empty() {
            format!("{}{}", prefix, name.yellow())
        } else {
            format!(
                "{}{} {}",
                prefix,
                name.yellow().bold(),
                format!("({})", subtree.len()).dimmed()
            )
        };
        self.lines.push(line);
        Ok(())
    }
}
