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

//! Inclusion CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Validation & Inspection
//!
//! - **validate**: Check directive syntax, optionally under custom limits
//! - **inspect**: Show the parsed tree, with paths and statistics in verbose mode
//!
//! ## Formatting
//!
//! - **format**: Canonical form, or `--check` that the input already is canonical
//!
//! ## Conversion
//!
//! - **to-json/from-json**: Directive ⇄ JSON object
//!
//! ## Batch Processing
//!
//! - **batch-validate**: Validate one directive per line, in parallel for large files
//!
//! ## Utilities
//!
//! - **completion**: Shell completion scripts (bash, zsh, fish, powershell, elvish)
//!
//! # Examples
//!
//! ```no_run
//! use inclusion_cli::commands::{format, to_json, validate, LimitArgs};
//!
//! # fn main() -> Result<(), inclusion_cli::error::CliError> {
//! validate(Some("tags,people(account)"), None, &LimitArgs::default())?;
//! format(None, Some("directive.txt"), Some("canonical.txt"), false, false, false)?;
//! to_json(Some("tags,people(account)"), None, None, true)?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
