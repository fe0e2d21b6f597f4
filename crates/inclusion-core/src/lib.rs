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

//! Core parser and tree model for inclusion directives.
//!
//! An inclusion directive names the related resources a client wants loaded
//! alongside a primary resource, with nested requests in parentheses:
//!
//! ```text
//! tags,people(account,projects(posts,tags))
//! ```
//!
//! [`parse`] turns the directive into an [`InclusionTree`], an
//! insertion-ordered mapping from each name to the tree of names requested
//! under it. The crate does not know which names are real associations; it
//! only checks the syntax.
//!
//! # Examples
//!
//! ```
//! use inclusion_core::parse;
//!
//! let tree = parse("tags,people(account,projects(posts,tags))").unwrap();
//!
//! for (name, nested) in &tree {
//!     println!("{} -> {} nested", name, nested.len());
//! }
//! assert_eq!(tree["people"].keys().collect::<Vec<_>>(), vec!["account", "projects"]);
//! ```
//!
//! # Untrusted input
//!
//! [`parse`] accepts any input. Use [`parse_with_options`] with [`Limits`] to
//! bound input length, nesting depth and the number of names.

mod error;
mod limits;
mod parser;
pub mod traverse;
mod tree;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use limits::Limits;
pub use parser::{parse, parse_with_options, ParseOptions, ParseOptionsBuilder};
pub use traverse::{traverse, InclusionVisitor, StatsCollector, TraverseError, VisitorContext};
pub use tree::{InclusionTree, Iter};
