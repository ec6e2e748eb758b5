//! Opaque side-effecting services bracketing a wrapped call.

use std::time::Instant;

use log::info;

use crate::error::Error;

/// Interactive failure reporting, modeled as an external service:
/// `install` decides whether the hook can take over (logging why not when
/// it cannot), `report` renders a failure once the call has raised.
pub trait FailureHook {
    fn install(&self) -> bool;
    fn report(&self, error: &Error);
}

/// Hook used where no interactive reporting is wanted.
pub struct NullFailureHook;

impl FailureHook for NullFailureHook {
    fn install(&self) -> bool {
        false
    }

    fn report(&self, _error: &Error) {}
}

/// Scoped wall-clock profiler. Reporting happens on drop, so the report
/// is emitted whether the wrapped call returned or failed.
pub struct ProfileGuard {
    label: String,
    started: Instant,
}

impl ProfileGuard {
    pub fn start(label: &str) -> Self {
        info!("Profiling `{label}`.");
        Self {
            label: label.to_string(),
            started: Instant::now(),
        }
    }
}

impl Drop for ProfileGuard {
    fn drop(&mut self) {
        info!(
            "Profile report for `{}`: call took {:.3?}.",
            self.label,
            self.started.elapsed()
        );
    }
}
