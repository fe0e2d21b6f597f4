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

//! Inclusion Canonicalization
//!
//! Renders an [`InclusionTree`] back into directive text.
//!
//! # Overview
//!
//! The canonical form of a tree is the shortest directive that parses back
//! to it:
//!
//! - **No spaces**: `people(account,projects)`, never `people( account , projects )`
//! - **Bare leaves**: `tags`, never `tags()`
//! - **Insertion order**: siblings appear in the order the tree holds them
//! - **Round-trip**: `parse(canonicalize(t)) == t` for every tree with valid names
//! - **Idempotency**: canonicalizing a re-parsed canonical string is a no-op
//!
//! # Examples
//!
//! ```
//! use inclusion_c14n::{canonicalize, canonicalize_with_config, CanonicalConfig};
//! use inclusion_core::parse;
//!
//! let tree = parse(" tags , people ( projects , account () ) ").unwrap();
//! assert_eq!(canonicalize(&tree).unwrap(), "tags,people(projects,account)");
//!
//! let config = CanonicalConfig::builder().sort_keys(true).spaced(true).build();
//! assert_eq!(
//!     canonicalize_with_config(&tree, &config).unwrap(),
//!     "people(account, projects), tags"
//! );
//! ```
//!
//! # Security
//!
//! Rendering is bounded to 1000 nesting levels so hand-built trees cannot
//! overflow the stack.

mod config;
mod error;
mod writer;

pub use config::{CanonicalConfig, CanonicalConfigBuilder};
pub use error::CanonicalError;
pub use writer::{is_valid_name, CanonicalWriter};

use inclusion_core::InclusionTree;

/// Canonicalize a tree with the default configuration.
///
/// # Errors
///
/// Returns [`CanonicalError::InvalidName`] if a name could not survive a
/// re-parse and [`CanonicalError::TooDeep`] past 1000 nesting levels.
///
/// # Examples
///
/// ```
/// use inclusion_c14n::canonicalize;
/// use inclusion_core::InclusionTree;
///
/// let tree = InclusionTree::new()
///     .with("tags", InclusionTree::new())
///     .with("people", InclusionTree::new().with("account", InclusionTree::new()));
///
/// assert_eq!(canonicalize(&tree).unwrap(), "tags,people(account)");
/// ```
pub fn canonicalize(tree: &InclusionTree) -> Result<String, CanonicalError> {
    canonicalize_with_config(tree, &CanonicalConfig::default())
}

/// Canonicalize a tree with custom configuration.
pub fn canonicalize_with_config(
    tree: &InclusionTree,
    config: &CanonicalConfig,
) -> Result<String, CanonicalError> {
    let mut writer = CanonicalWriter::new(config.clone());
    writer.write_tree(tree)
}
