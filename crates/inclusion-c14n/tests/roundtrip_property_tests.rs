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

//! Property-based tests for parse → canonicalize → parse roundtrip.
//!
//! # Properties Tested
//!
//! 1. **Semantic Preservation**: a canonical rendering parses back to the same tree
//! 2. **Canonicalization Idempotency**: canonicalizing canonical output is a no-op
//! 3. **Spacing Independence**: the spaced rendering parses to the same tree
//! 4. **Sorting**: the sorted rendering keeps every path and orders siblings

use inclusion_c14n::{canonicalize, canonicalize_with_config, CanonicalConfig};
use inclusion_core::{parse, InclusionTree};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn tree_strategy() -> impl Strategy<Value = InclusionTree> {
    Just(InclusionTree::new()).prop_recursive(5, 64, 5, |inner| {
        prop::collection::vec((name_strategy(), inner), 0..5)
            .prop_map(|entries| entries.into_iter().collect::<InclusionTree>())
    })
}

fn sorted_paths(tree: &InclusionTree) -> Vec<String> {
    let mut paths = tree.paths();
    paths.sort();
    paths
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: parse(canonicalize(t)) == t.
    #[test]
    fn prop_roundtrip_preserves_tree(tree in tree_strategy()) {
        let canonical = canonicalize(&tree).unwrap();
        let reparsed = parse(&canonical);
        prop_assert!(reparsed.is_ok(), "Canonical output failed to parse: {}", canonical);
        prop_assert_eq!(reparsed.unwrap(), tree);
    }

    /// Property: canonical output is a fixed point.
    #[test]
    fn prop_canonicalization_idempotent(tree in tree_strategy()) {
        let once = canonicalize(&tree).unwrap();
        let twice = canonicalize(&parse(&once).unwrap()).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Property: canonicalizing any accepted directive gives a fixed point.
    #[test]
    fn prop_canonical_form_of_parsed_input(input in "[a-c]{1,3}(,[a-c]{1,3}(\\([a-c]{1,3}(, ?[a-c]{1,3}){0,3}\\))?){0,5}") {
        let tree = parse(&input).unwrap();
        let canonical = canonicalize(&tree).unwrap();
        prop_assert!(!canonical.contains(' '));
        prop_assert_eq!(canonicalize(&parse(&canonical).unwrap()).unwrap(), canonical);
    }

    /// Property: spacing never changes the parsed tree.
    #[test]
    fn prop_spaced_roundtrip(tree in tree_strategy()) {
        let config = CanonicalConfig::new().with_spaced(true);
        let spaced = canonicalize_with_config(&tree, &config).unwrap();
        prop_assert_eq!(parse(&spaced).unwrap(), tree);
    }

    /// Property: sorting keeps the same set of paths.
    #[test]
    fn prop_sorted_keeps_paths(tree in tree_strategy()) {
        let config = CanonicalConfig::new().with_sort_keys(true);
        let sorted = canonicalize_with_config(&tree, &config).unwrap();
        let reparsed = parse(&sorted).unwrap();

        prop_assert_eq!(sorted_paths(&reparsed), sorted_paths(&tree));

        let top: Vec<&str> = reparsed.keys().collect();
        let mut expected = top.clone();
        expected.sort_unstable();
        prop_assert_eq!(top, expected);
    }
}
