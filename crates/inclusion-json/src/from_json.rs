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

//! JSON to inclusion tree conversion

use crate::error::JsonError;
use inclusion_c14n::is_valid_name;
use inclusion_core::InclusionTree;
use serde_json::{Map, Value};

/// Default maximum object nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Configuration for JSON import
///
/// # Examples
///
/// ```
/// use inclusion_json::{FromJsonConfig, DEFAULT_MAX_DEPTH};
///
/// assert_eq!(FromJsonConfig::default().max_depth, DEFAULT_MAX_DEPTH);
///
/// let config = FromJsonConfig::builder().max_depth(8).build();
/// assert_eq!(config.max_depth, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromJsonConfig {
    /// Maximum nesting of objects below the root (default: 100)
    pub max_depth: usize,
}

impl Default for FromJsonConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FromJsonConfig {
    /// Create a new builder for FromJsonConfig.
    pub fn builder() -> FromJsonConfigBuilder {
        FromJsonConfigBuilder::default()
    }
}

/// Builder for [`FromJsonConfig`].
#[derive(Debug, Clone, Default)]
pub struct FromJsonConfigBuilder {
    config: FromJsonConfig,
}

impl FromJsonConfigBuilder {
    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> FromJsonConfig {
        self.config
    }
}

/// Parse a JSON string into an inclusion tree
pub fn from_json(json: &str, config: &FromJsonConfig) -> Result<InclusionTree, JsonError> {
    let value: Value = serde_json::from_str(json)?;
    from_json_value(&value, config)
}

/// Convert a `serde_json::Value` into an inclusion tree
///
/// The root must be an object, or `null` for an empty tree. Member values
/// may be objects (nested names), `{}`, `true` or `null` (leaves).
pub fn from_json_value(value: &Value, config: &FromJsonConfig) -> Result<InclusionTree, JsonError> {
    match value {
        Value::Null => Ok(InclusionTree::new()),
        Value::Object(map) => {
            let mut path = Vec::new();
            object_to_tree(map, config, &mut path)
        }
        other => Err(JsonError::InvalidRoot(type_name(other).to_string())),
    }
}

fn object_to_tree<'a>(
    map: &'a Map<String, Value>,
    config: &FromJsonConfig,
    path: &mut Vec<&'a str>,
) -> Result<InclusionTree, JsonError> {
    if path.len() > config.max_depth {
        return Err(JsonError::TooDeep {
            max: config.max_depth,
            path: path_string(path),
        });
    }

    let mut tree = InclusionTree::with_capacity(map.len());

    for (name, value) in map {
        if !is_valid_name(name) {
            return Err(JsonError::InvalidName {
                name: name.clone(),
                path: path_string(path),
            });
        }

        let subtree = match value {
            Value::Null | Value::Bool(true) => InclusionTree::new(),
            Value::Object(members) if members.is_empty() => InclusionTree::new(),
            Value::Object(members) => {
                path.push(name);
                let subtree = object_to_tree(members, config, path)?;
                path.pop();
                subtree
            }
            other => {
                path.push(name);
                let err = JsonError::InvalidValue {
                    path: path_string(path),
                    found: type_name(other).to_string(),
                };
                return Err(err);
            }
        };

        tree.insert(name.as_str(), subtree);
    }

    Ok(tree)
}

fn path_string(path: &[&str]) -> String {
    if path.is_empty() {
        "root".to_string()
    } else {
        path.join(".")
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(true) => "true",
        Value::Bool(false) => "false",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
