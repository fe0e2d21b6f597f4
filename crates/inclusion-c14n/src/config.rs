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

//! Canonicalization configuration.

/// Configuration for canonical output format.
///
/// The default produces the canonical form: insertion order, no spaces.
///
/// # Examples
///
/// ```
/// use inclusion_c14n::CanonicalConfig;
///
/// let config = CanonicalConfig::default();
/// assert!(!config.sort_keys);
/// assert!(!config.spaced);
///
/// let config = CanonicalConfig::new().with_sort_keys(true).with_spaced(true);
/// assert!(config.sort_keys && config.spaced);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct CanonicalConfig {
    /// Order siblings lexicographically instead of by insertion.
    ///
    /// A sorted rendering parses back to a tree with the same names but a
    /// different order, so it only round-trips up to ordering.
    pub sort_keys: bool,

    /// Separate siblings with `", "` instead of `","`.
    pub spaced: bool,
}

impl CanonicalConfig {
    /// Create a new configuration with all default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a `CanonicalConfig`.
    pub fn builder() -> CanonicalConfigBuilder {
        CanonicalConfigBuilder::new()
    }

    /// Set whether to sort siblings.
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    /// Set whether to put a space after each comma.
    pub fn with_spaced(mut self, spaced: bool) -> Self {
        self.spaced = spaced;
        self
    }

    pub(crate) fn separator(&self) -> &'static str {
        if self.spaced {
            ", "
        } else {
            ","
        }
    }
}

/// Builder for constructing a `CanonicalConfig` with a chainable API.
///
/// # Examples
///
/// ```
/// use inclusion_c14n::CanonicalConfig;
///
/// let config = CanonicalConfig::builder().sort_keys(true).build();
/// assert!(config.sort_keys);
///
/// assert_eq!(CanonicalConfig::builder().build(), CanonicalConfig::default());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CanonicalConfigBuilder {
    sort_keys: bool,
    spaced: bool,
}

impl CanonicalConfigBuilder {
    /// Create a new builder with default configuration values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to sort siblings.
    pub fn sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    /// Set whether to put a space after each comma.
    pub fn spaced(mut self, spaced: bool) -> Self {
        self.spaced = spaced;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> CanonicalConfig {
        CanonicalConfig {
            sort_keys: self.sort_keys,
            spaced: self.spaced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_matches_fluent_api() {
        let built = CanonicalConfig::builder().sort_keys(true).spaced(true).build();
        let fluent = CanonicalConfig::new().with_sort_keys(true).with_spaced(true);
        assert_eq!(built, fluent);
    }

    #[test]
    fn test_separator() {
        assert_eq!(CanonicalConfig::new().separator(), ",");
        assert_eq!(CanonicalConfig::new().with_spaced(true).separator(), ", ");
    }
}
