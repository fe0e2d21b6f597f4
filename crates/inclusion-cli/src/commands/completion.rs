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

//! Shell completion generation - Tab completion for various shells

use crate::error::CliError;
use clap::Command;
use clap_complete::{generate, Generator};
use std::io;

/// Write the completion script for `cmd` to stdout.
pub fn generate_completion_for_command<G: Generator>(
    generator: G,
    cmd: &mut Command,
) -> Result<(), CliError> {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
    Ok(())
}

/// Installation instructions for a shell's completion script.
///
/// # Examples
///
/// ```
/// use inclusion_cli::commands::print_installation_instructions;
///
/// assert!(print_installation_instructions("zsh").contains("incl completion zsh"));
/// assert!(print_installation_instructions("tcsh").starts_with("Unsupported shell"));
/// ```
pub fn print_installation_instructions(shell: &str) -> String {
    match shell.to_lowercase().as_str() {
        "bash" => {
            r#"# Bash completion installation:

# For current session only:
eval "$(incl completion bash)"

# For persistent installation, add to your ~/.bashrc:
echo 'eval "$(incl completion bash)"' >> ~/.bashrc
"#
        }
        "zsh" => {
            r#"# Zsh completion installation:

# Save to a directory in $fpath:
incl completion zsh > ~/.zsh/completions/_incl
"#
        }
        "fish" => {
            r#"# Fish completion installation:

incl completion fish > ~/.config/fish/completions/incl.fish
"#
        }
        "powershell" | "pwsh" => {
            r#"# PowerShell completion installation:

# Add this line to the profile found at $PROFILE:
incl completion powershell | Out-String | Invoke-Expression
"#
        }
        "elvish" => {
            r#"# Elvish completion installation:

# Add to ~/.elvish/rc.elv:
eval (incl completion elvish)
"#
        }
        _ => "Unsupported shell. Supported shells: bash, zsh, fish, powershell, elvish",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installation_instructions_known_shells() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let instructions = print_installation_instructions(shell);
            assert!(instructions.contains(&format!("incl completion {}", shell)));
        }
    }

    #[test]
    fn test_installation_instructions_case_insensitive() {
        assert_eq!(
            print_installation_instructions("BASH"),
            print_installation_instructions("bash")
        );
    }

    #[test]
    fn test_installation_instructions_pwsh_alias() {
        assert_eq!(
            print_installation_instructions("pwsh"),
            print_installation_instructions("powershell")
        );
    }
}
