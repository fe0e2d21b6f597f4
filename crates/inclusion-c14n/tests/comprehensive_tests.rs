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

//! Canonical rendering of parsed directives.

use inclusion_c14n::{canonicalize, canonicalize_with_config, CanonicalConfig, CanonicalError};
use inclusion_core::{parse, InclusionTree};

fn canonical(input: &str) -> String {
    canonicalize(&parse(input).unwrap()).unwrap()
}

// ==================== Normalization tests ====================

#[test]
fn test_strips_spaces() {
    assert_eq!(canonical("  tags , people ( account )  "), "tags,people(account)");
}

#[test]
fn test_drops_empty_groups() {
    assert_eq!(canonical("tags(),people(account())"), "tags,people(account)");
}

#[test]
fn test_drops_empty_segments() {
    assert_eq!(canonical(",tags,,people,"), "tags,people");
}

#[test]
fn test_collapses_duplicates() {
    assert_eq!(canonical("tags,people(account),tags(posts)"), "tags(posts),people(account)");
}

#[test]
fn test_canonical_input_is_unchanged() {
    let input = "tags,people(account,projects(posts,tags))";
    assert_eq!(canonical(input), input);
}

#[test]
fn test_empty_input() {
    assert_eq!(canonical(""), "");
    assert_eq!(canonical("   "), "");
}

// ==================== Configuration tests ====================

#[test]
fn test_sorted_and_spaced() {
    let tree = parse("tags,people(projects(tags,posts),account)").unwrap();
    let config = CanonicalConfig::builder().sort_keys(true).spaced(true).build();
    assert_eq!(
        canonicalize_with_config(&tree, &config).unwrap(),
        "people(account, projects(posts, tags)), tags"
    );
}

// ==================== Error tests ====================

#[test]
fn test_hand_built_tree_with_invalid_name() {
    let tree = InclusionTree::new().with("a(b)", InclusionTree::new());
    let err = canonicalize(&tree).unwrap_err();
    assert!(matches!(err, CanonicalError::InvalidName { .. }));
    assert!(err.to_string().contains("a(b)"));
}
