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

//! Error types for canonical rendering.

use thiserror::Error;

/// Errors that can occur while rendering a tree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CanonicalError {
    /// A name that would not parse back as itself.
    ///
    /// Names must not be blank or contain spaces, commas or parentheses.
    #[error("invalid inclusion name '{name}' at '{path}'")]
    InvalidName { name: String, path: String },

    /// The tree nests deeper than the writer follows.
    #[error("maximum nesting depth of {max} exceeded")]
    TooDeep { max: usize },
}

impl CanonicalError {
    pub(crate) fn invalid_name(name: &str, path: &[&str]) -> Self {
        CanonicalError::InvalidName {
            name: name.to_string(),
            path: if path.is_empty() {
                "root".to_string()
            } else {
                path.join(".")
            },
        }
    }
}
