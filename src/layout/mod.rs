//! Document geometry: where each section and entry block sits for a given viewport.

pub mod page_layout;
