//! Viewport intersection observers and the band-driven selection tracker.

pub mod margin;
pub mod tracker;
pub mod visibility;
