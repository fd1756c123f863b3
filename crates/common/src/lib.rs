//! Shared value types used across the galaxy crates.

mod types;

pub use types::{ColorParseError, Rgb};

pub fn crate_info() -> &'static str {
    "galaxy-common v0.1.0"
}
