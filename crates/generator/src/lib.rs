//! Field Generator: maps a parameter set to a spiral point field.
//!
//! # Invariants
//! - Generation is pure apart from the random draws it consumes.
//! - Position and color buffers always hold exactly `3 * count` floats.
//! - Invalid parameters are rejected before any buffer is allocated.

mod error;
mod field;
mod generate;
mod params;
mod random;

pub use error::GenerateError;
pub use field::PointField;
pub use generate::{DRAWS_PER_POINT, branch_angle, generate, generate_with};
pub use params::{ParameterLimits, Parameters};
pub use random::{ConstantSource, RngSource, SequenceSource, UniformSource};

pub fn crate_info() -> &'static str {
    "galaxy-generator v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("generator"));
    }
}
