//! hook command - Print the shell integration for automatic fix suggestions
//!
//! The snippet remembers each command line and, when it exits non-zero,
//! calls `ai --internal-fix-error` with the command and its exit code. The
//! call is a no-op unless `auto_fix_errors` is enabled in the config.

use anyhow::Result;

use crate::cli::args::HookShell;
use crate::ui::output;

const ZSH_HOOK: &str = r#"# aiterm: suggest fixes for failed commands (zsh)
_aiterm_preexec() {
  _aiterm_last_command="$1"
}
_aiterm_precmd() {
  local exit_code=$?
  if [[ $exit_code -ne 0 && -n "$_aiterm_last_command" ]]; then
    command ai --internal-fix-error --command "$_aiterm_last_command" --exit_code "$exit_code"
  fi
  _aiterm_last_command=""
}
autoload -Uz add-zsh-hook
add-zsh-hook preexec _aiterm_preexec
add-zsh-hook precmd _aiterm_precmd"#;

const BASH_HOOK: &str = r#"# aiterm: suggest fixes for failed commands (bash)
_aiterm_prompt_command() {
  local exit_code=$?
  local last_command
  last_command=$(HISTTIMEFORMAT= history 1 | sed -e 's/^ *[0-9]* *//')
  if [[ $exit_code -ne 0 && -n "$last_command" && "$last_command" != "$_aiterm_last_seen" ]]; then
    command ai --internal-fix-error --command "$last_command" --exit_code "$exit_code"
  fi
  _aiterm_last_seen="$last_command"
}
PROMPT_COMMAND="_aiterm_prompt_command${PROMPT_COMMAND:+;$PROMPT_COMMAND}""#;

/// The integration snippet for `shell`.
pub fn hook_script(shell: HookShell) -> &'static str {
    match shell {
        HookShell::Zsh => ZSH_HOOK,
        HookShell::Bash => BASH_HOOK,
    }
}

/// Print the integration snippet for `shell`.
pub fn hook(shell: HookShell) -> Result<()> {
    output::print(hook_script(shell));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_call_internal_fix_error() {
        for shell in [HookShell::Zsh, HookShell::Bash] {
            let script = hook_script(shell);
            assert!(script.contains("ai --internal-fix-error --command"));
            assert!(script.contains("--exit_code \"$exit_code\""));
        }
    }

    #[test]
    fn zsh_uses_add_zsh_hook() {
        assert!(hook_script(HookShell::Zsh).contains("add-zsh-hook precmd"));
    }

    #[test]
    fn bash_chains_prompt_command() {
        assert!(hook_script(HookShell::Bash).contains("${PROMPT_COMMAND:+;$PROMPT_COMMAND}"));
    }
}
