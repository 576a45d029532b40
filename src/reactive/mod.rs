//! Reactive state shared between observers and the presentation layer.
//!
//! Everything here is single-threaded (`Rc<RefCell<..>>`): writes notify subscribers
//! synchronously, in registration order, before returning.

pub mod observable;
pub mod selection;

pub use observable::{Observable, Subscription};
pub use selection::SelectionStore;
