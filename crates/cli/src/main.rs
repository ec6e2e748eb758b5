use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use funcrun_core::config;
use funcrun_core::error::{Error, Result};
use funcrun_core::history::{get_last_invocation, write_last_invocation, LastInvocation};
use funcrun_core::template::canonical_text;
use log::{error, info, warn};
use serde_yaml::Value;

use crate::cli_args::Args;
use crate::dispatch::Outcome;

mod binder;
mod cli_args;
mod containers;
mod dispatch;
mod heredoc;
mod hook;

const HELP_TEXT: &str = "\
Usage: fr <container>:<member>[:<modes>] [forwarded arguments]

The path selects a member of a registered container; everything after it
is forwarded to the member. Modes are comma separated, abbreviable and
may carry values with `=`:

    print-template      (pt)   print the invocation template, then run
    print-only-template (pot)  print the template, do not run
    template-format     (tf)   compact layout by default; `multiline` or
                               `multiline-doc` otherwise
    hook-debugger       (hd)   report failures through the failure hook
    hook-profiler       (hp)   log the member's wall-clock time

A doc-form invocation can be piped through stdin with `-` as the path:

    fr - << EOF
    text:repeat:pt
    --text=\"hello world\" --count=3
    EOF
";

/// Works out the function path and forwarded arguments for this run,
/// pulling from history, stdin or a doc-form first argument as needed.
fn resolve_invocation(args: &Args) -> Result<(String, Vec<String>)> {
    if args.rerun_last {
        if args.func_path.is_some() {
            return Err(Error::Misc(
                "--rerun-last cannot be combined with a function path".to_string(),
            ));
        }
        let history_path = config::get_history_path(&args.history_path);
        let Some(last) = get_last_invocation(&history_path)? else {
            return Err(Error::Misc(
                "rerun was requested, but there is no previous invocation".to_string(),
            ));
        };
        return Ok((last.path, last.forwarded));
    }

    let Some(func_path) = &args.func_path else {
        error!("{HELP_TEXT}");
        return Err(Error::Misc(
            "missing <container>:<member>[:<modes>] path argument".to_string(),
        ));
    };

    if args.forwarded.is_empty() && func_path == "-" {
        let mut document = String::new();
        std::io::stdin()
            .read_to_string(&mut document)
            .map_err(Error::Stdio)?;
        return heredoc::split_document(&document);
    }

    if args.forwarded.is_empty() && func_path.contains('\n') {
        // The whole doc-form invocation arrived as a single argument.
        return heredoc::split_document(func_path);
    }

    Ok((func_path.clone(), args.forwarded.clone()))
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let (func_path, forwarded) = resolve_invocation(&args)?;
    let registry = containers::builtin_registry()?;

    match dispatch::dispatch(&registry, &func_path, &forwarded)? {
        Outcome::TemplateOnly(text) => {
            info!("Parameters:\n\n{text}\n");
        }
        Outcome::Invoked(value) => {
            if value != Value::Null {
                println!("{}", canonical_text(&value));
            }
        }
    }

    if args.skip_save {
        info!("Skipping invocation save was specified. Not (over)writing last invocation.");
    } else {
        let history_path = config::get_history_path(&args.history_path);
        let invocation = LastInvocation {
            path: func_path,
            forwarded,
        };
        if let Err(e) = write_last_invocation(&history_path, &invocation) {
            warn!("Could not save the invocation for rerun: {e}");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        Env::new()
            .filter_or("FUNCRUN_LOG", "info")
            .write_style("FUNCRUN_LOG_STYLE"),
    )
    .format_timestamp(None)
    .format_target(false)
    .init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        // A quit request from the failure hook exits quietly.
        Err(Error::DebuggerQuit) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
