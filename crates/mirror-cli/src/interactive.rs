//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based prompts.

use std::io::IsTerminal;

use dialoguer::Input;

use crate::error::Result;

/// Whether prompts should be shown: not disabled with `--yes`, and both
/// stdin and stderr are terminals so someone can actually answer.
pub fn prompts_enabled(skip: bool) -> bool {
    !skip && std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Block until the user presses Enter.
pub fn wait_for_enter(prompt: &str) -> Result<()> {
    let _: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .report(false)
        .interact_text()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_flag_disables_prompts() {
        assert!(!prompts_enabled(true));
    }
}
