//! Easing, tweening, variant sets and range mapping.

pub mod ease;
pub mod range;
pub mod tween;
pub mod variants;
