//! Funcrun CLI Library
//!
//! This crate provides the command-line interface for funcrun, a dynamic
//! command dispatcher. It handles argument parsing, the flag-token
//! argument binder, doc-form input, the builtin containers and the
//! dispatch orchestration behind the `fr` binary.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`binder`]: Binding forwarded `--name="value"` tokens against a
//!   signature schema
//! - [`heredoc`]: Tokenizing doc-form invocations
//! - [`containers`]: Builtin dispatch targets
//! - [`hook`]: tty-aware failure hook
//! - [`dispatch`]: Orchestration from function path to invocation
//!
//! # Examples
//!
//! The CLI binary (`fr`) can be used in several ways:
//!
//! ```bash
//! # Dispatch a member with forwarded arguments
//! fr text:repeat --text="hi" --count=3
//!
//! # Print only the invocation template
//! fr text:repeat:pot
//!
//! # Print the template before executing, multi-line layout
//! fr text:repeat:pt,tf=multiline --text="hi"
//!
//! # Attach the failure hook and the profiler
//! fr text:repeat:hd,hp --text="hi"
//!
//! # Doc-form input
//! fr - << EOF
//! # Entrypoint
//! text:repeat
//! # Arguments
//! --text="hi"
//! EOF
//!
//! # Rerun the last invocation
//! fr --rerun-last
//! ```

pub mod binder;
pub mod cli_args;
pub mod containers;
pub mod dispatch;
pub mod heredoc;
pub mod hook;
