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

//! Error types for inclusion directive parsing.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// `(` with no name in front of it.
    MissingTokenBeforeGroup,
    /// `)` with no open group to close.
    UnmatchedCloseParen,
    /// End of input with groups still open.
    UnterminatedGroup,
    /// Input longer than the configured maximum.
    InputTooLong,
    /// Nesting deeper than the configured maximum.
    DepthExceeded,
    /// More names than the configured maximum.
    TooManyInclusions,
}

impl ParseErrorKind {
    /// Returns `true` for errors raised by [`Limits`](crate::Limits) rather
    /// than by the directive grammar.
    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            Self::InputTooLong | Self::DepthExceeded | Self::TooManyInclusions
        )
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTokenBeforeGroup => write!(f, "MissingTokenBeforeGroup"),
            Self::UnmatchedCloseParen => write!(f, "UnmatchedCloseParen"),
            Self::UnterminatedGroup => write!(f, "UnterminatedGroup"),
            Self::InputTooLong => write!(f, "InputTooLong"),
            Self::DepthExceeded => write!(f, "DepthExceeded"),
            Self::TooManyInclusions => write!(f, "TooManyInclusions"),
        }
    }
}

/// An error that occurred while parsing an inclusion directive.
///
/// Positions are 0-based character offsets into the input. `consumed` holds
/// the input up to and including the offending character.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// An opening parenthesis with no preceding name.
    #[error("Missing token before parenthesis at position {position}: {consumed}")]
    MissingTokenBeforeGroup { position: usize, consumed: String },

    /// A closing parenthesis with no matching open group.
    #[error("Too many closing parenthesis at position {position}: {consumed}")]
    UnmatchedCloseParen { position: usize, consumed: String },

    /// End of input reached with groups still open.
    #[error("Missing closing parenthesis: {input}")]
    UnterminatedGroup { open_groups: usize, input: String },

    /// Input exceeds `Limits::max_input_length`.
    #[error("input length {length} exceeds maximum {max}")]
    InputTooLong { length: usize, max: usize },

    /// A group opened past `Limits::max_depth`.
    #[error("nesting depth {depth} at position {position} exceeds maximum {max}")]
    DepthExceeded {
        depth: usize,
        max: usize,
        position: usize,
    },

    /// A name committed past `Limits::max_inclusions`.
    #[error("inclusion count {count} at position {position} exceeds maximum {max}")]
    TooManyInclusions {
        count: usize,
        max: usize,
        position: usize,
    },
}

impl ParseError {
    /// The kind of this error.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::MissingTokenBeforeGroup { .. } => ParseErrorKind::MissingTokenBeforeGroup,
            Self::UnmatchedCloseParen { .. } => ParseErrorKind::UnmatchedCloseParen,
            Self::UnterminatedGroup { .. } => ParseErrorKind::UnterminatedGroup,
            Self::InputTooLong { .. } => ParseErrorKind::InputTooLong,
            Self::DepthExceeded { .. } => ParseErrorKind::DepthExceeded,
            Self::TooManyInclusions { .. } => ParseErrorKind::TooManyInclusions,
        }
    }

    /// Character offset of the offending character, if the error has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::MissingTokenBeforeGroup { position, .. }
            | Self::UnmatchedCloseParen { position, .. }
            | Self::DepthExceeded { position, .. }
            | Self::TooManyInclusions { position, .. } => Some(*position),
            Self::UnterminatedGroup { .. } | Self::InputTooLong { .. } => None,
        }
    }

    pub(crate) fn missing_token(input: &str, position: usize) -> Self {
        Self::MissingTokenBeforeGroup {
            position,
            consumed: prefix_through(input, position),
        }
    }

    pub(crate) fn unmatched_close(input: &str, position: usize) -> Self {
        Self::UnmatchedCloseParen {
            position,
            consumed: prefix_through(input, position),
        }
    }

    pub(crate) fn unterminated(input: &str, open_groups: usize) -> Self {
        Self::UnterminatedGroup {
            open_groups,
            input: input.to_string(),
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Input up to and including the character at `position`.
fn prefix_through(input: &str, position: usize) -> String {
    input.chars().take(position + 1).collect()
}
