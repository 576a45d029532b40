use crate::{
    foundation::core::{Rect, Viewport},
    observe::margin::{RootMargin, intersects},
};

/// Change in an element's intersection with the observer's root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Crossing {
    Entered,
    Exited,
}

/// Tracks whether one element intersects the (margin-adjusted) viewport.
///
/// Repeating observers report every enter/exit. `once` observers report the first `Entered`
/// and then stop observing; [`VisibilityObserver::in_view`] stays `true` from then on.
#[derive(Clone, Debug)]
pub struct VisibilityObserver {
    margin: RootMargin,
    once: bool,
    intersecting: bool,
    latched: bool,
}

impl VisibilityObserver {
    pub fn repeating(margin: RootMargin) -> Self {
        Self {
            margin,
            once: false,
            intersecting: false,
            latched: false,
        }
    }

    pub fn once(margin: RootMargin) -> Self {
        Self {
            once: true,
            ..Self::repeating(margin)
        }
    }

    /// Feed the element's current viewport-space rectangle.
    pub fn update(&mut self, target: Rect, viewport: Viewport) -> Option<Crossing> {
        if self.latched {
            return None;
        }
        let now = self
            .margin
            .apply(viewport)
            .is_some_and(|root| intersects(root, target));

        match (self.intersecting, now) {
            (false, true) => {
                self.intersecting = true;
                self.latched = self.once;
                Some(Crossing::Entered)
            }
            (true, false) => {
                self.intersecting = false;
                Some(Crossing::Exited)
            }
            _ => None,
        }
    }

    pub fn is_intersecting(&self) -> bool {
        self.intersecting
    }

    /// For `once` observers, whether the element has ever been seen.
    pub fn in_view(&self) -> bool {
        self.intersecting || self.latched
    }

    pub fn is_once(&self) -> bool {
        self.once
    }
}

#[cfg(test)]
#[path = "../../tests/unit/observe/visibility.rs"]
mod tests;
