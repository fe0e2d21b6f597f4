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

//! Resource limits for directive parsing.

/// Configurable limits for parsing untrusted directives.
///
/// Directives usually arrive in a query parameter, so these bound the work a
/// single request can cause. Only [`parse_with_options`](crate::parse_with_options)
/// enforces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input length in characters (default: 64K).
    pub max_input_length: usize,
    /// Maximum group nesting depth (default: 32).
    pub max_depth: usize,
    /// Maximum number of names committed across all levels (default: 10k).
    pub max_inclusions: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_length: 64 * 1024,
            max_depth: 32,
            max_inclusions: 10_000,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions.
    pub fn unlimited() -> Self {
        Self {
            max_input_length: usize::MAX,
            max_depth: usize::MAX,
            max_inclusions: usize::MAX,
        }
    }
}
