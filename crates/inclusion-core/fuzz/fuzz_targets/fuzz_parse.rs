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

#![no_main]

//! Fuzz target for the inclusion directive parser.
//!
//! # Running the Fuzzer
//!
//! ```bash
//! cargo fuzz run fuzz_parse
//! ```
//!
//! # Expected Behavior
//!
//! - The parser never panics
//! - Without limits, only the three grammar errors are reported
//! - Every accepted directive survives a render/parse roundtrip

use inclusion_core::{parse, InclusionTree};
use libfuzzer_sys::fuzz_target;

fn render(tree: &InclusionTree) -> String {
    tree.iter()
        .map(|(name, subtree)| {
            if subtree.is_empty() {
                name.to_string()
            } else {
                format!("{}({})", name, render(subtree))
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    match parse(text) {
        Ok(tree) => {
            // Committed names never contain delimiters or spaces.
            let reparsed = parse(&render(&tree)).expect("rendered tree parses");
            assert_eq!(reparsed, tree);
        }
        Err(err) => assert!(!err.kind().is_limit()),
    }
});
