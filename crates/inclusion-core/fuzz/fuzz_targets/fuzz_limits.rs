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

//! Fuzz target for limit enforcement.
//!
//! Restrictive limits must hold for every input: an accepted tree never
//! exceeds them.
//!
//! ```bash
//! cargo fuzz run fuzz_limits -- -max_len=100000
//! ```

use inclusion_core::{parse_with_options, ParseOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let options = ParseOptions::builder()
        .max_input_length(4096)
        .max_depth(5)
        .max_inclusions(100)
        .build();

    if let Ok(tree) = parse_with_options(text, &options) {
        assert!(text.chars().count() <= 4096);
        assert!(tree.depth() <= 5);
        assert!(tree.total_count() <= 100);
    }
});
