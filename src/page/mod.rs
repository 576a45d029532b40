//! Page content and configuration.

pub mod model;
