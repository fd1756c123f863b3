//! Regeneration Controller: owns the live point field and replaces it on reconfiguration.
//!
//! # Invariants
//! - At most one field is current at any time.
//! - A superseded field is handed to the dispose hook before its successor is installed.
//! - Failed reconfiguration leaves the current field untouched and un-disposed.
//! - Installed buffers are never mutated; replacement is the only state change.

mod controller;
mod queue;

pub use controller::{
    ControllerConfig, ControllerError, ControllerState, DisposeHook, LiveField, NoopDispose,
    RegenerationController,
};
pub use queue::ReconfigureQueue;

pub fn crate_info() -> &'static str {
    "galaxy-controller v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("controller"));
    }
}
