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

//! Inclusion tree to JSON conversion

use crate::error::JsonError;
use crate::from_json::DEFAULT_MAX_DEPTH;
use inclusion_core::InclusionTree;
use serde_json::{Map, Value as JsonValue};

/// Configuration for JSON output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToJsonConfig {
    /// Indent nested objects (default: compact single line)
    pub pretty: bool,
    /// Maximum nesting of objects below the root (default: 100)
    pub max_depth: usize,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ToJsonConfig {
    /// Configuration for indented output.
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Convert a tree to a JSON string
///
/// Trees nesting deeper than `config.max_depth` are rejected with
/// [`JsonError::TooDeep`] before anything is written.
pub fn to_json(tree: &InclusionTree, config: &ToJsonConfig) -> Result<String, JsonError> {
    check_depth(tree, config.max_depth)?;

    let result = if config.pretty {
        serde_json::to_string_pretty(tree)
    } else {
        serde_json::to_string(tree)
    };
    result.map_err(|e| JsonError::Serialize(e.to_string()))
}

/// Convert a tree to a `serde_json::Value`
///
/// Every name maps to an object; leaves map to `{}`.
pub fn to_json_value(tree: &InclusionTree, config: &ToJsonConfig) -> Result<JsonValue, JsonError> {
    check_depth(tree, config.max_depth)?;
    Ok(tree_to_value(tree))
}

fn tree_to_value(tree: &InclusionTree) -> JsonValue {
    let mut map = Map::with_capacity(tree.len());
    for (name, subtree) in tree {
        map.insert(name.to_string(), tree_to_value(subtree));
    }
    JsonValue::Object(map)
}

/// Reject trees whose objects would nest deeper than `max_depth`, naming the
/// first group found beyond the limit.
fn check_depth(tree: &InclusionTree, max_depth: usize) -> Result<(), JsonError> {
    if tree.depth() <= max_depth {
        return Ok(());
    }

    let mut pending: Vec<(&InclusionTree, Vec<&str>)> = vec![(tree, Vec::new())];
    while let Some((subtree, path)) = pending.pop() {
        if path.len() > max_depth {
            return Err(JsonError::TooDeep {
                max: max_depth,
                path: path.join("."),
            });
        }
        for (name, child) in subtree.iter().filter(|(_, child)| !child.is_empty()) {
            let mut child_path = path.clone();
            child_path.push(name);
            pending.push((child, child_path));
        }
    }

    Ok(())
}
