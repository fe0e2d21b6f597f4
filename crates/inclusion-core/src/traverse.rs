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

//! Tree traversal for inclusion consumers.
//!
//! Resource loaders, renderers and reporters all walk the same structure.
//! The visitor pattern keeps the walking here and the per-node work in the
//! consumer.
//!
//! # Example
//!
//! ```
//! use inclusion_core::traverse::{traverse, InclusionVisitor, TraverseError, VisitorContext};
//! use inclusion_core::{parse, InclusionTree};
//!
//! #[derive(Default)]
//! struct Loader {
//!     queries: Vec<String>,
//! }
//!
//! impl InclusionVisitor for Loader {
//!     type Error = TraverseError;
//!
//!     fn visit_inclusion(
//!         &mut self,
//!         name: &str,
//!         _subtree: &InclusionTree,
//!         ctx: &VisitorContext,
//!     ) -> Result<(), Self::Error> {
//!         self.queries.push(format!("load {} under {}", name, ctx.path_string()));
//!         Ok(())
//!     }
//! }
//!
//! let tree = parse("people(account)").unwrap();
//! let mut loader = Loader::default();
//! traverse(&tree, &mut loader).unwrap();
//!
//! assert_eq!(loader.queries, vec!["load people under root", "load account under people"]);
//! ```

use crate::InclusionTree;
use thiserror::Error;

/// Maximum nesting depth followed by [`traverse`].
pub const MAX_TRAVERSAL_DEPTH: usize = 1000;

/// Errors raised by the traversal itself.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TraverseError {
    /// The tree nests deeper than [`MAX_TRAVERSAL_DEPTH`].
    #[error("inclusion tree exceeds maximum traversal depth of {max} at '{path}'")]
    TooDeep { max: usize, path: String },
}

/// Context provided to visitors during traversal.
#[derive(Debug, Clone, Default)]
pub struct VisitorContext<'a> {
    /// Nesting depth of the visited name (0 = top level).
    pub depth: usize,
    /// Names of the enclosing inclusions, outermost first.
    pub path: Vec<&'a str>,
}

impl<'a> VisitorContext<'a> {
    /// Create a context for the top level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the context for the children of `name`.
    pub fn child(&self, name: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(name);
        Self {
            depth: self.depth + 1,
            path,
        }
    }

    /// The enclosing path as a string (for messages).
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            "root".to_string()
        } else {
            self.path.join(".")
        }
    }
}

/// Trait for visiting the names of an inclusion tree.
///
/// Only [`visit_inclusion`](Self::visit_inclusion) is required.
pub trait InclusionVisitor {
    /// Error type returned by visitor methods.
    type Error: From<TraverseError>;

    /// Called before anything else.
    fn begin_tree(&mut self, _tree: &InclusionTree) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for every name, before its children.
    fn visit_inclusion(
        &mut self,
        name: &str,
        subtree: &InclusionTree,
        ctx: &VisitorContext,
    ) -> Result<(), Self::Error>;

    /// Called for every name, after its children.
    fn end_inclusion(
        &mut self,
        _name: &str,
        _subtree: &InclusionTree,
        _ctx: &VisitorContext,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after everything else.
    fn end_tree(&mut self, _tree: &InclusionTree) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Traverse a tree in pre-order, children in insertion order.
pub fn traverse<V: InclusionVisitor>(tree: &InclusionTree, visitor: &mut V) -> Result<(), V::Error> {
    visitor.begin_tree(tree)?;
    traverse_level(tree, visitor, &VisitorContext::new())?;
    visitor.end_tree(tree)
}

fn traverse_level<'a, V: InclusionVisitor>(
    tree: &'a InclusionTree,
    visitor: &mut V,
    ctx: &VisitorContext<'a>,
) -> Result<(), V::Error> {
    if ctx.depth > MAX_TRAVERSAL_DEPTH {
        return Err(TraverseError::TooDeep {
            max: MAX_TRAVERSAL_DEPTH,
            path: ctx.path_string(),
        }
        .into());
    }

    for (name, subtree) in tree {
        visitor.visit_inclusion(name, subtree, ctx)?;
        if !subtree.is_empty() {
            traverse_level(subtree, visitor, &ctx.child(name))?;
        }
        visitor.end_inclusion(name, subtree, ctx)?;
    }

    Ok(())
}

/// Visitor that collects summary statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsCollector {
    /// Names at every level.
    pub inclusions: usize,
    /// Names with nothing nested below them.
    pub leaves: usize,
    /// Names with a non-empty group.
    pub groups: usize,
    /// Deepest nesting level reached (0 = top level only).
    pub max_depth: usize,
}

impl StatsCollector {
    /// Create a new stats collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for `tree`.
    pub fn collect(tree: &InclusionTree) -> Result<Self, TraverseError> {
        let mut stats = Self::new();
        traverse(tree, &mut stats)?;
        Ok(stats)
    }
}

impl InclusionVisitor for StatsCollector {
    type Error = TraverseError;

    fn visit_inclusion(
        &mut self,
        _name: &str,
        subtree: &InclusionTree,
        ctx: &VisitorContext,
    ) -> Result<(), Self::Error> {
        self.inclusions += 1;
        if subtree.is_leaf() {
            self.leaves += 1;
        } else {
            self.groups += 1;
        }
        self.max_depth = self.max_depth.max(ctx.depth);
        Ok(())
    }
}
