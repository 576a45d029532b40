//! Headless model of a scroll-driven sticky gallery page.
//!
//! The host owns the window and the frame loop. It feeds input and timestamps into a [`Stage`]
//! and draws whatever each [`FrameSnapshot`] describes:
//!
//! - Smooth scrolling turns wheel and touch deltas into an eased scroll offset.
//! - A narrow band at the viewport midline decides which list entry is active.
//! - The active entry picks the visible image panel and the section background.
//! - A decorative circle grows with the scroll signal.
//!
//! Everything runs on the caller's thread; per-frame evaluation never fails.
#![forbid(unsafe_code)]

pub mod animation;
pub mod foundation;
pub mod layout;
pub mod observe;
pub mod page;
pub mod present;
pub mod reactive;
pub mod scroll;
pub mod session;
pub mod stage;

pub use crate::animation::ease::Ease;
pub use crate::animation::range::RangeMap;
pub use crate::animation::tween::{Lerp, Transition, Tween};
pub use crate::foundation::color::Rgba8;
pub use crate::foundation::core::{EntryId, Millis, Point, Rect, Span, Viewport};
pub use crate::foundation::error::{StageError, StageResult};
pub use crate::observe::margin::RootMargin;
pub use crate::observe::visibility::{Crossing, VisibilityObserver};
pub use crate::page::model::{HeroDef, ListEntry, PageDef};
pub use crate::reactive::{Observable, SelectionStore, Subscription};
pub use crate::scroll::smooth::{ScrollEvent, SmoothScroll, SmoothScrollConfig};
pub use crate::session::replay::{ScrollInput, ScrollScript, replay};
pub use crate::stage::controller::{FrameSnapshot, Stage};
