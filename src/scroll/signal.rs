use crate::{
    animation::range::RangeMap,
    foundation::core::{Point, Viewport},
    foundation::error::{StageError, StageResult},
    reactive::observable::{Observable, Subscription},
    scroll::smooth::ScrollEvent,
};

/// Latest raw scroll offset reported by the smooth-scroll engine.
///
/// Holds only the most recent value. The value is the animation's start offset
/// (`animate.from`), so it trails the eased position while an animation is in flight.
#[derive(Clone, Debug)]
pub struct ScrollSignal {
    raw: Observable<f64>,
}

impl Default for ScrollSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self {
            raw: Observable::new(0.0),
        }
    }

    pub fn on_scroll(&self, event: &ScrollEvent) {
        self.raw.replace(event.animate.from);
    }

    pub fn raw(&self) -> f64 {
        self.raw.get()
    }

    pub fn subscribe(&self, callback: impl Fn(&f64) + 'static) -> Subscription {
        self.raw.subscribe(callback)
    }
}

/// Decorative circle driven by the scroll signal.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CircleDef {
    /// Raw scroll offset to diameter, in pixels.
    pub size: RangeMap,
    /// Centre as fractions of the viewport width and height.
    pub center_x: f64,
    pub center_y: f64,
}

impl Default for CircleDef {
    fn default() -> Self {
        Self {
            size: RangeMap::from_valid_stops(vec![1.0, 5000.0], vec![1.0, 10000.0]),
            center_x: 0.55,
            center_y: 0.44,
        }
    }
}

/// Resolved circle for one frame. Width and height are always equal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CircleGeometry {
    pub size: f64,
    pub center: Point,
}

impl CircleDef {
    pub fn validate(&self) -> StageResult<()> {
        for (name, v) in [("center_x", self.center_x), ("center_y", self.center_y)] {
            if !v.is_finite() {
                return Err(StageError::validation(format!(
                    "circle {name} must be finite"
                )));
            }
        }
        Ok(())
    }

    pub fn geometry(&self, raw_offset: f64, viewport: Viewport) -> CircleGeometry {
        CircleGeometry {
            size: self.size.map(raw_offset),
            center: viewport.point_at(self.center_x, self.center_y),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/signal.rs"]
mod tests;
