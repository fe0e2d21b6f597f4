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

//! End-to-end conversion between directives and JSON.

use inclusion_c14n::canonicalize;
use inclusion_core::{parse, InclusionTree};
use inclusion_json::{
    from_json, json_to_tree, to_json, tree_to_json, FromJsonConfig, JsonError, ToJsonConfig,
};
use proptest::prelude::*;

fn tree_strategy() -> impl Strategy<Value = InclusionTree> {
    Just(InclusionTree::new()).prop_recursive(4, 48, 4, |inner| {
        prop::collection::vec(("[a-z][a-z0-9_]{0,6}", inner), 0..4)
            .prop_map(|entries| entries.into_iter().collect::<InclusionTree>())
    })
}

// ==================== Directive ⇄ JSON tests ====================

#[test]
fn test_directive_to_json() {
    let tree = parse("tags,people(account,projects(posts,tags))").unwrap();
    assert_eq!(
        tree_to_json(&tree).unwrap(),
        r#"{"tags":{},"people":{"account":{},"projects":{"posts":{},"tags":{}}}}"#
    );
}

#[test]
fn test_json_to_directive() {
    let tree = json_to_tree(r#"{"people": {"projects": {"posts": true}}, "tags": null}"#).unwrap();
    assert_eq!(canonicalize(&tree).unwrap(), "people(projects(posts)),tags");
}

#[test]
fn test_duplicate_members_last_wins() {
    let tree = json_to_tree(r#"{"tags": {}, "people": {}, "tags": {"posts": {}}}"#).unwrap();
    assert_eq!(canonicalize(&tree).unwrap(), "tags(posts),people");
}

#[test]
fn test_pretty_output_parses_back() {
    let tree = parse("a(b(c)),d").unwrap();
    let pretty = to_json(&tree, &ToJsonConfig::pretty()).unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(from_json(&pretty, &FromJsonConfig::default()).unwrap(), tree);
}

#[test]
fn test_error_messages() {
    let err = json_to_tree("[]").unwrap_err();
    assert_eq!(err, "Root must be a JSON object, found array");

    let err = json_to_tree(r#"{"tags": "yes"}"#).unwrap_err();
    assert!(err.contains("tags"));
    assert!(err.contains("string"));
}

#[test]
fn test_default_depth_limit() {
    let mut json = String::new();
    for _ in 0..110 {
        json.push_str("{\"x\":");
    }
    json.push_str("{}");
    json.push_str(&"}".repeat(110));

    let err = from_json(&json, &FromJsonConfig::default()).unwrap_err();
    assert!(matches!(err, JsonError::TooDeep { max: 100, .. }));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: JSON conversion preserves the tree, including order.
    #[test]
    fn prop_json_roundtrip(tree in tree_strategy()) {
        let json = tree_to_json(&tree).unwrap();
        prop_assert_eq!(json_to_tree(&json).unwrap(), tree);
    }
}
