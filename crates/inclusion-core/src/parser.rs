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

//! Inclusion directive parser.
//!
//! A directive is a comma-separated list of names, each optionally followed
//! by a parenthesized group of nested names:
//!
//! ```text
//! tags,people(account,projects(posts,tags))
//! ```
//!
//! The parser is a single left-to-right scan over characters with an explicit
//! stack of the groups that are still open, so nesting depth never touches
//! the call stack.

use crate::error::{ParseError, ParseResult};
use crate::limits::Limits;
use crate::tree::InclusionTree;

/// Parsing options.
///
/// # Examples
///
/// ```
/// use inclusion_core::{parse_with_options, ParseErrorKind, ParseOptions};
///
/// let options = ParseOptions::builder().max_depth(1).build();
///
/// assert!(parse_with_options("people(account)", &options).is_ok());
///
/// let err = parse_with_options("people(projects(posts))", &options).unwrap_err();
/// assert_eq!(err.kind(), ParseErrorKind::DepthExceeded);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Resource limits.
    pub limits: Limits,
}

impl ParseOptions {
    /// Options that never reject input for size, depth or count.
    pub fn unlimited() -> Self {
        Self {
            limits: Limits::unlimited(),
        }
    }

    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of [`ParseOptions`].
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    limits: Limits,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default limits.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
        }
    }

    /// Set the maximum input length in characters.
    pub fn max_input_length(mut self, length: usize) -> Self {
        self.limits.max_input_length = length;
        self
    }

    /// Set the maximum group nesting depth.
    ///
    /// `0` rejects every parenthesized group.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.limits.max_depth = depth;
        self
    }

    /// Set the maximum number of committed names.
    pub fn max_inclusions(mut self, count: usize) -> Self {
        self.limits.max_inclusions = count;
        self
    }

    /// Remove all limits.
    pub fn unlimited(mut self) -> Self {
        self.limits = Limits::unlimited();
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
        }
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an inclusion directive into a tree.
///
/// No limits are applied: the only failures are the three grammar errors
/// (`MissingTokenBeforeGroup`, `UnmatchedCloseParen`, `UnterminatedGroup`).
/// Empty or blank input yields an empty tree.
///
/// # Examples
///
/// ```
/// use inclusion_core::parse;
///
/// let tree = parse("tags,people(account,projects(posts,tags))").unwrap();
///
/// assert!(tree["tags"].is_leaf());
/// assert!(tree["people"]["projects"].contains("posts"));
/// assert_eq!(tree.depth(), 2);
///
/// assert!(parse("   ").unwrap().is_empty());
/// ```
///
/// # Errors
///
/// ```
/// use inclusion_core::{parse, ParseErrorKind};
///
/// let err = parse("tags,(account)").unwrap_err();
/// assert_eq!(err.kind(), ParseErrorKind::MissingTokenBeforeGroup);
/// assert_eq!(err.position(), Some(5));
/// ```
pub fn parse(input: &str) -> ParseResult<InclusionTree> {
    parse_with_options(input, &ParseOptions::unlimited())
}

/// Parse an inclusion directive, enforcing `options.limits`.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> ParseResult<InclusionTree> {
    let result = scan(input, &options.limits);

    match &result {
        Ok(tree) => tracing::trace!(
            inclusions = tree.total_count(),
            depth = tree.depth(),
            "parsed inclusion directive"
        ),
        Err(err) => tracing::debug!(
            kind = %err.kind(),
            position = ?err.position(),
            "rejected inclusion directive: {}",
            err
        ),
    }

    result
}

fn scan(input: &str, limits: &Limits) -> ParseResult<InclusionTree> {
    check_input_length(input, limits)?;

    if input.trim().is_empty() {
        return Ok(InclusionTree::new());
    }

    let mut scanner = Scanner::new(input, limits);
    let mut end = 0;

    for (position, character) in input.chars().enumerate() {
        scanner.step(position, character)?;
        end = position + 1;
    }

    scanner.finish(end)
}

fn check_input_length(input: &str, limits: &Limits) -> ParseResult<()> {
    // Byte length bounds the character count from above.
    if input.len() <= limits.max_input_length {
        return Ok(());
    }

    let length = input.chars().count();
    if length > limits.max_input_length {
        return Err(ParseError::InputTooLong {
            length,
            max: limits.max_input_length,
        });
    }

    Ok(())
}

/// Scan state: the tree being filled, the pending token, and the open groups.
///
/// Each stack frame owns the parent tree together with the name the current
/// tree is filed under. Closing a group moves the current tree back into its
/// parent, so no tree is ever aliased.
struct Scanner<'a> {
    input: &'a str,
    limits: &'a Limits,
    current: InclusionTree,
    token: String,
    stack: Vec<(InclusionTree, String)>,
    committed: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, limits: &'a Limits) -> Self {
        Self {
            input,
            limits,
            current: InclusionTree::new(),
            token: String::new(),
            stack: Vec::new(),
            committed: 0,
        }
    }

    fn step(&mut self, position: usize, character: char) -> ParseResult<()> {
        match character {
            ' ' => {}
            '(' => self.open_group(position)?,
            ')' => {
                self.commit_leaf(position)?;
                self.close_group(position)?;
            }
            ',' => self.commit_leaf(position)?,
            other => self.token.push(other),
        }
        Ok(())
    }

    fn finish(mut self, end: usize) -> ParseResult<InclusionTree> {
        self.commit_leaf(end)?;

        if !self.stack.is_empty() {
            return Err(ParseError::unterminated(self.input, self.stack.len()));
        }

        Ok(self.current)
    }

    fn open_group(&mut self, position: usize) -> ParseResult<()> {
        if self.token_is_blank() {
            return Err(ParseError::missing_token(self.input, position));
        }

        let depth = self.stack.len() + 1;
        if depth > self.limits.max_depth {
            return Err(ParseError::DepthExceeded {
                depth,
                max: self.limits.max_depth,
                position,
            });
        }

        self.count_commit(position)?;

        let name = std::mem::take(&mut self.token);
        // The placeholder claims (or overwrites) the name's slot now; the
        // finished group replaces it when the group closes.
        self.current.insert(name.clone(), InclusionTree::new());
        let parent = std::mem::take(&mut self.current);
        self.stack.push((parent, name));

        Ok(())
    }

    fn close_group(&mut self, position: usize) -> ParseResult<()> {
        let (mut parent, name) = self
            .stack
            .pop()
            .ok_or_else(|| ParseError::unmatched_close(self.input, position))?;

        let group = std::mem::take(&mut self.current);
        parent.insert(name, group);
        self.current = parent;

        Ok(())
    }

    /// Commit the pending token as a leaf of the current tree, if there is one.
    fn commit_leaf(&mut self, position: usize) -> ParseResult<()> {
        if self.token_is_blank() {
            self.token.clear();
            return Ok(());
        }

        self.count_commit(position)?;

        let name = std::mem::take(&mut self.token);
        self.current.insert(name, InclusionTree::new());

        Ok(())
    }

    fn count_commit(&mut self, position: usize) -> ParseResult<()> {
        self.committed += 1;
        if self.committed > self.limits.max_inclusions {
            return Err(ParseError::TooManyInclusions {
                count: self.committed,
                max: self.limits.max_inclusions,
                position,
            });
        }
        Ok(())
    }

    /// Spaces never reach the token; other whitespace does, and a token made
    /// only of it counts as empty.
    fn token_is_blank(&self) -> bool {
        self.token.trim().is_empty()
    }
}
