//! Configuration path utilities.
//!
//! Resolves the invocation-history file path and expands shell variables
//! like `~` in user-supplied overrides.

/// Default path for the saved last invocation
const DEFAULT_HISTORY_PATH: &str = "~/.funcrun/last_invocation.yml";

/// Name rendered templates identify the dispatcher binary by.
pub const PROGRAM_NAME: &str = "fr";

/// Resolves the history file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the
/// default history path. Shell expansions like `~` are resolved.
pub fn get_history_path(history_path_arg: &Option<String>) -> String {
    let history_path = match history_path_arg {
        Some(history_path) => history_path,
        None => DEFAULT_HISTORY_PATH,
    };

    shellexpand::tilde(history_path).to_string()
}
