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

//! Conversion commands - directive ⇄ JSON

use super::{read_file, read_input, write_output};
use crate::error::CliError;
use inclusion_c14n::{canonicalize_with_config, CanonicalConfig};
use inclusion_core::{parse_with_options, ParseOptions};
use inclusion_json::{FromJsonConfig, ToJsonConfig};

/// Convert a directive to JSON.
///
/// Each name becomes an object member holding the object of its nested names.
///
/// # Examples
///
/// ```no_run
/// use inclusion_cli::commands::to_json;
///
/// # fn main() -> Result<(), inclusion_cli::error::CliError> {
/// // Prints {"tags":{},"people":{"account":{}}}
/// to_json(Some("tags,people(account)"), None, None, false)?;
///
/// to_json(None, Some("directive.txt"), Some("tree.json"), true)?;
/// # Ok(())
/// # }
/// ```
pub fn to_json(
    directive: Option<&str>,
    file: Option<&str>,
    output: Option<&str>,
    pretty: bool,
) -> Result<(), CliError> {
    let input = read_input(directive, file)?;
    let tree = parse_with_options(&input.directive, &ParseOptions::default())?;

    let config = ToJsonConfig {
        pretty,
        ..ToJsonConfig::default()
    };
    let json = inclusion_json::to_json(&tree, &config)?;
    write_output(&format!("{}\n", json), output)
}

/// Convert a JSON file to a canonical directive.
///
/// Members may hold objects (nested names), `{}`, `true` or `null`.
pub fn from_json(file: &str, output: Option<&str>, spaced: bool) -> Result<(), CliError> {
    let content = read_file(file)?;
    let tree = inclusion_json::from_json(&content, &FromJsonConfig::default())?;

    let config = CanonicalConfig::new().with_spaced(spaced);
    let directive = canonicalize_with_config(&tree, &config)?;
    write_output(&format!("{}\n", directive), output)
}
