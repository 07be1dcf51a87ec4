//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, elvish and
//! PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::StudyError;

/// Execute the completions command.
///
/// # Errors
///
/// Returns `StudyError::Parse` if the generated script is not valid UTF-8.
pub fn completions(shell: Shell, install: bool) -> Result<String, StudyError> {
    if install {
        return Ok(completion_install_instructions(shell));
    }
    generate_completions(shell)
}

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `StudyError::Parse` if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, StudyError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "studytime", &mut buf);
    String::from_utf8(buf).map_err(|e| StudyError::Parse(format!("UTF-8 error: {e}")))
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc or ~/.bash_profile:
source <(studytime completions bash)
"
        .to_string(),

        Shell::Zsh => r"# Save to your fpath:
studytime completions zsh > ~/.zsh/completions/_studytime
# Then add to ~/.zshrc:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
studytime completions fish > ~/.config/fish/completions/studytime.fish
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
studytime completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Save to elvish completions directory:
studytime completions elvish > ~/.config/elvish/lib/studytime.elv
# Then add to ~/.config/elvish/rc.elv:
use studytime
"
        .to_string(),

        _ => format!(
            "# Run `studytime completions {shell}` and load the output in your shell.\n"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bash_completions() {
        let script = generate_completions(Shell::Bash).unwrap();
        assert!(script.contains("studytime"));
        assert!(script.contains("record"));
    }

    #[test]
    fn test_install_instructions() {
        let text = completions(Shell::Fish, true).unwrap();
        assert!(text.contains("studytime completions fish"));
    }
}
