//! Developer Tooling: field inspector for debugging and tuning.
//!
//! # Invariants
//! - Tools only read fields.

mod inspector;

pub use inspector::{FieldInspector, FieldSummary, PointInfo};

pub fn crate_info() -> &'static str {
    "galaxy-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
