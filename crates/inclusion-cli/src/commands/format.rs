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

//! Format command - directive canonicalization

use super::{read_input, write_output};
use crate::error::CliError;
use inclusion_c14n::{canonicalize_with_config, CanonicalConfig};
use inclusion_core::{parse_with_options, ParseOptions};

/// Format a directive to canonical form.
///
/// With `check`, nothing is written: the command fails unless the input is
/// already canonical.
///
/// # Examples
///
/// ```no_run
/// use inclusion_cli::commands::format;
///
/// # fn main() -> Result<(), inclusion_cli::error::CliError> {
/// // Prints "people(account,projects)"
/// format(Some(" people ( account , projects ) "), None, None, false, false, false)?;
///
/// // Fails: the input contains spaces
/// assert!(format(Some("a , b"), None, None, false, false, true).is_err());
/// # Ok(())
/// # }
/// ```
pub fn format(
    directive: Option<&str>,
    file: Option<&str>,
    output: Option<&str>,
    sort: bool,
    spaced: bool,
    check: bool,
) -> Result<(), CliError> {
    let input = read_input(directive, file)?;
    let tree = parse_with_options(&input.directive, &ParseOptions::default())?;

    let config = CanonicalConfig::new()
        .with_sort_keys(sort)
        .with_spaced(spaced);
    let canonical = canonicalize_with_config(&tree, &config)?;

    if check {
        if canonical != input.directive {
            return Err(CliError::NotCanonical {
                expected: canonical,
            });
        }
        println!("Directive is in canonical form");
        Ok(())
    } else {
        write_output(&format!("{}\n", canonical), output)
    }
}
