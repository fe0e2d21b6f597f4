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

//! Canonical directive writer.

use crate::config::CanonicalConfig;
use crate::error::CanonicalError;
use inclusion_core::InclusionTree;

// ==================== Buffer Capacity Constants ====================

/// Initial buffer capacity for output string.
///
/// Typical directives are well under 256 bytes.
const INITIAL_OUTPUT_BUFFER_CAPACITY: usize = 256;

// ==================== Nesting Depth Constants ====================

/// Maximum nesting depth followed by the writer.
const MAX_NESTING_DEPTH: usize = 1000;

/// Whether `name` parses back as itself when written into a directive.
///
/// A valid name is not blank and contains no space, comma or parenthesis.
///
/// # Examples
///
/// ```
/// use inclusion_c14n::is_valid_name;
///
/// assert!(is_valid_name("projects"));
/// assert!(is_valid_name("line_items"));
/// assert!(!is_valid_name(""));
/// assert!(!is_valid_name("line items"));
/// assert!(!is_valid_name("a,b"));
/// assert!(!is_valid_name("\t"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains([' ', ',', '(', ')'])
}

/// Writer for canonical directive output.
///
/// A writer can be reused; each call to [`write_tree`](Self::write_tree)
/// starts from an empty buffer.
pub struct CanonicalWriter {
    config: CanonicalConfig,
    output: String,
}

impl CanonicalWriter {
    /// Creates a new canonical writer with the given configuration.
    pub fn new(config: CanonicalConfig) -> Self {
        Self {
            config,
            output: String::with_capacity(INITIAL_OUTPUT_BUFFER_CAPACITY),
        }
    }

    /// Renders a tree to directive text.
    pub fn write_tree(&mut self, tree: &InclusionTree) -> Result<String, CanonicalError> {
        self.output.clear();
        let mut path = Vec::new();
        let result = self.write_level(tree, &mut path);

        match result {
            Ok(()) => Ok(std::mem::take(&mut self.output)),
            Err(err) => {
                self.output.clear();
                Err(err)
            }
        }
    }

    fn write_level<'a>(
        &mut self,
        tree: &'a InclusionTree,
        path: &mut Vec<&'a str>,
    ) -> Result<(), CanonicalError> {
        if path.len() > MAX_NESTING_DEPTH {
            return Err(CanonicalError::TooDeep {
                max: MAX_NESTING_DEPTH,
            });
        }

        let mut entries: Vec<(&'a str, &'a InclusionTree)> = tree.iter().collect();
        if self.config.sort_keys {
            entries.sort_unstable_by_key(|(name, _)| *name);
        }

        let separator = self.config.separator();
        for (index, (name, subtree)) in entries.into_iter().enumerate() {
            if !is_valid_name(name) {
                return Err(CanonicalError::invalid_name(name, path));
            }

            if index > 0 {
                self.output.push_str(separator);
            }
            self.output.push_str(name);

            if !subtree.is_empty() {
                self.output.push('(');
                path.push(name);
                self.write_level(subtree, path)?;
                path.pop();
                self.output.push(')');
            }
        }

        Ok(())
    }
}
