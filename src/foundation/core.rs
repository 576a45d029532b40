use crate::foundation::error::{StageError, StageResult};

pub use kurbo::{Point, Rect};

/// Stable identifier of a list entry, assigned when the page is authored.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(pub u32);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Host timestamp in milliseconds, as delivered by a frame callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Millis(pub f64);

impl Millis {
    /// Milliseconds elapsed since `earlier`; negative when `earlier` is in the future.
    pub fn since(self, earlier: Millis) -> f64 {
        self.0 - earlier.0
    }

    /// Timestamp shifted forward by `ms`.
    pub fn after(self, ms: f64) -> Millis {
        Millis(self.0 + ms)
    }
}

/// Visible area of the host window in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> StageResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(StageError::validation(format!(
                "viewport must be finite and > 0, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// The viewport as a rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Point at the given fractions of width and height.
    pub fn point_at(self, fx: f64, fy: f64) -> Point {
        Point::new(self.width * fx, self.height * fy)
    }
}

/// A vertical extent in document coordinates (`top <= bottom`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    pub top: f64,
    pub bottom: f64,
}

impl Span {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height.max(0.0),
        }
    }

    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Viewport-space rectangle of this span at scroll offset `scroll`, across `x0..x1`.
    pub fn to_viewport_rect(self, scroll: f64, x0: f64, x1: f64) -> Rect {
        Rect::new(x0, self.top - scroll, x1, self.bottom - scroll)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
