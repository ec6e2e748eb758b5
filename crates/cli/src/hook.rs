//! The tty-aware failure hook.

use std::io::stderr;

use crossterm::tty::IsTty;
use funcrun_core::error::Error;
use funcrun_core::hooks::FailureHook;
use log::{debug, error, warn};

/// Failure hook that takes over only when stderr is an interactive
/// terminal; otherwise it declines with a warning, the way a debugger
/// attachment would.
pub struct TtyFailureHook;

impl FailureHook for TtyFailureHook {
    fn install(&self) -> bool {
        if !stderr().is_tty() {
            warn!("hook-debugger: cannot take over failure reporting without a tty-like device.");
            return false;
        }

        debug!("hook-debugger: failure hook installed.");
        true
    }

    fn report(&self, error: &Error) {
        error!("hook-debugger: call failed: {error}");

        let mut source = std::error::Error::source(error);
        while let Some(cause) = source {
            error!("  caused by: {cause}");
            source = cause.source();
        }
    }
}
