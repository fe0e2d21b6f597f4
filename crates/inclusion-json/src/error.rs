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

//! Error types for JSON conversion.

use thiserror::Error;

/// Errors that can occur during JSON conversion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JsonError {
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    Parse(String),

    /// JSON serialization failed
    #[error("JSON serialization error: {0}")]
    Serialize(String),

    /// Root value must be an object
    #[error("Root must be a JSON object, found {0}")]
    InvalidRoot(String),

    /// A member value that is neither an object nor a leaf marker
    #[error("Invalid value at '{path}': expected object, true or null, found {found}")]
    InvalidValue { path: String, found: String },

    /// A member name that cannot be written in a directive
    #[error("Invalid inclusion name '{name}' at '{path}'")]
    InvalidName { name: String, path: String },

    /// Maximum nesting depth exceeded
    #[error("Maximum nesting depth ({max}) exceeded at '{path}'")]
    TooDeep { max: usize, path: String },
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        JsonError::Parse(err.to_string())
    }
}
