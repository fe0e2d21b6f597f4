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

//! Inclusion JSON Conversion
//!
//! Converts between inclusion trees and JSON objects. A tree becomes an
//! object whose members are the inclusion names in order, each holding the
//! object of its nested names:
//!
//! ```json
//! {"tags": {}, "people": {"account": {}, "projects": {"posts": {}}}}
//! ```
//!
//! # Examples
//!
//! ```rust
//! use inclusion_json::{json_to_tree, tree_to_json};
//!
//! let tree = inclusion_core::parse("tags,people(account)").unwrap();
//! let json = tree_to_json(&tree).unwrap();
//! assert_eq!(json, r#"{"tags":{},"people":{"account":{}}}"#);
//!
//! // `true` and `null` members are accepted as leaves.
//! let tree = json_to_tree(r#"{"tags": true, "people": {"account": null}}"#).unwrap();
//! assert_eq!(inclusion_c14n::canonicalize(&tree).unwrap(), "tags,people(account)");
//! ```

mod error;
mod from_json;
mod to_json;

pub use error::JsonError;
pub use from_json::{
    from_json, from_json_value, FromJsonConfig, FromJsonConfigBuilder, DEFAULT_MAX_DEPTH,
};
pub use to_json::{to_json, to_json_value, ToJsonConfig};

use inclusion_core::InclusionTree;

/// Convert an inclusion tree to a compact JSON string
pub fn tree_to_json(tree: &InclusionTree) -> Result<String, String> {
    to_json(tree, &ToJsonConfig::default()).map_err(|e| e.to_string())
}

/// Convert a JSON string to an inclusion tree
pub fn json_to_tree(json: &str) -> Result<InclusionTree, String> {
    from_json(json, &FromJsonConfig::default()).map_err(|e| e.to_string())
}
