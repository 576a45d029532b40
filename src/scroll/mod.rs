//! Smooth scrolling and the scroll-position signal.

pub mod driver;
pub mod signal;
pub mod smooth;
