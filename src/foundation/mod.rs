//! Shared value types: identifiers, timestamps, geometry, colors and errors.

pub mod color;
pub mod core;
pub mod error;
