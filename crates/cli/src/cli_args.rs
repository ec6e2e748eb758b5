//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure for the `fr`
//! binary using the `clap` crate. Everything after the function path is
//! forwarded verbatim to the argument binder.

use clap::Parser;

/// Command-line arguments for the funcrun dispatcher.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use funcrun_cli::cli_args::Args;
///
/// let args = Args::parse_from(["fr", "text:repeat", "--text=hi"]);
/// assert_eq!(args.func_path.as_deref(), Some("text:repeat"));
/// ```
#[derive(Parser, Debug)]
#[command(name = "fr", term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// The `container:member[:modes]` path to dispatch, or `-` to read a
    /// doc-form invocation from stdin.
    #[arg(num_args(1))]
    pub func_path: Option<String>,

    /// Rerun the last saved invocation (no function path may be given).
    #[arg(long, short = 'r', action)]
    pub rerun_last: bool,

    /// Skip saving of this invocation as the last one to replay.
    ///
    /// Prevents overwriting the history file, retaining the existing
    /// last invocation.
    #[arg(long, short = 's', action)]
    pub skip_save: bool,

    /// Path to the file that stores the last invocation.
    ///
    /// If not provided, defaults to `~/.funcrun/last_invocation.yml`.
    #[arg(long, short = 'H')]
    pub history_path: Option<String>,

    /// Arguments forwarded to the resolved member.
    ///
    /// Supported token forms: `--name=value`, bare `--name` (boolean
    /// true) and positional values.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub forwarded: Vec<String>,
}
