//! Top-level controller that owns every piece of page state and runs the per-frame pipeline.

pub mod controller;
