//! Inertial scrolling: raw wheel/touch deltas become eased scroll-position updates.
//!
//! The engine is advanced by the host once per frame with [`SmoothScroll::raf`]. Each advance
//! of an in-flight animation produces a [`ScrollEvent`] whose `animate.from` is the offset at
//! which the current animation started, not the eased position.

use crate::{
    animation::ease::Ease,
    foundation::core::Millis,
    foundation::error::{StageError, StageResult},
};

/// Smooth-scroll tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    /// Easing used in duration mode.
    pub easing: Ease,
    /// Animation length in seconds for duration mode.
    pub duration_s: f64,
    /// Per-frame damping factor (at 60fps). When set, it takes precedence over duration mode.
    pub lerp: Option<f64>,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            easing: Ease::InCubic,
            duration_s: 1000.0,
            lerp: Some(0.1),
            wheel_multiplier: 0.5,
            touch_multiplier: 1.0,
        }
    }
}

impl SmoothScrollConfig {
    pub fn validate(&self) -> StageResult<()> {
        if let Some(lerp) = self.lerp
            && (!lerp.is_finite() || lerp <= 0.0 || lerp > 1.0)
        {
            return Err(StageError::config("smooth scroll lerp must be in (0, 1]"));
        }
        if !self.duration_s.is_finite() || self.duration_s < 0.0 {
            return Err(StageError::config(
                "smooth scroll duration_s must be finite and >= 0",
            ));
        }
        if self.lerp.is_none() && self.duration_s == 0.0 {
            return Err(StageError::config(
                "smooth scroll needs either lerp or a positive duration_s",
            ));
        }
        for (name, v) in [
            ("wheel_multiplier", self.wheel_multiplier),
            ("touch_multiplier", self.touch_multiplier),
        ] {
            if !v.is_finite() {
                return Err(StageError::config(format!(
                    "smooth scroll {name} must be finite"
                )));
            }
        }
        Ok(())
    }

    fn mode(&self) -> AnimateMode {
        match self.lerp {
            Some(factor) => AnimateMode::Damp { factor },
            None => AnimateMode::Timed {
                duration_s: self.duration_s,
                easing: self.easing,
            },
        }
    }
}

/// Snapshot of the in-flight scroll animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimateState {
    pub from: f64,
    pub to: f64,
    pub value: f64,
}

/// Emitted whenever the scroll position is updated.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollEvent {
    pub scroll: f64,
    pub limit: f64,
    pub velocity: f64,
    pub direction: i8,
    pub progress: f64,
    pub is_scrolling: bool,
    pub animate: AnimateState,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum AnimateMode {
    Damp { factor: f64 },
    Timed { duration_s: f64, easing: Ease },
}

#[derive(Clone, Copy, Debug)]
struct Animate {
    state: AnimateState,
    mode: AnimateMode,
    elapsed_s: f64,
    running: bool,
}

impl Animate {
    fn idle(mode: AnimateMode) -> Self {
        Self {
            state: AnimateState::default(),
            mode,
            elapsed_s: 0.0,
            running: false,
        }
    }

    fn start(&mut self, from: f64, to: f64, mode: AnimateMode) {
        self.state = AnimateState {
            from,
            to,
            value: from,
        };
        self.mode = mode;
        self.elapsed_s = 0.0;
        self.running = true;
    }

    /// Returns the new value and whether the animation completed.
    fn advance(&mut self, dt_s: f64) -> Option<(f64, bool)> {
        if !self.running {
            return None;
        }
        let AnimateState { from, to, value } = self.state;
        let (next, completed) = match self.mode {
            AnimateMode::Damp { factor } => {
                let next = damp(value, to, factor * 60.0, dt_s);
                if next.round() == to.round() {
                    (to, true)
                } else {
                    (next, false)
                }
            }
            AnimateMode::Timed { duration_s, easing } => {
                self.elapsed_s += dt_s;
                let linear = if duration_s <= 0.0 {
                    1.0
                } else {
                    (self.elapsed_s / duration_s).clamp(0.0, 1.0)
                };
                let completed = linear >= 1.0;
                let eased = if completed { 1.0 } else { easing.apply(linear) };
                (from + (to - from) * eased, completed)
            }
        };
        self.state.value = next;
        if completed {
            self.running = false;
        }
        Some((next, completed))
    }
}

/// Frame-rate independent exponential approach of `x` toward `y`.
fn damp(x: f64, y: f64, lambda: f64, dt_s: f64) -> f64 {
    let t = 1.0 - (-lambda * dt_s).exp();
    x + (y - x) * t
}

/// Inertial scroll engine for one scroll container.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    config: SmoothScrollConfig,
    limit: f64,
    animated_scroll: f64,
    target_scroll: f64,
    velocity: f64,
    direction: i8,
    is_scrolling: bool,
    programmatic: bool,
    animate: Animate,
    last_time: Option<Millis>,
}

impl SmoothScroll {
    pub fn new(config: SmoothScrollConfig, limit: f64) -> StageResult<Self> {
        config.validate()?;
        if !limit.is_finite() || limit < 0.0 {
            return Err(StageError::config("scroll limit must be finite and >= 0"));
        }
        Ok(Self {
            config,
            limit,
            animated_scroll: 0.0,
            target_scroll: 0.0,
            velocity: 0.0,
            direction: 0,
            is_scrolling: false,
            programmatic: false,
            animate: Animate::idle(config.mode()),
            last_time: None,
        })
    }

    pub fn config(&self) -> &SmoothScrollConfig {
        &self.config
    }

    /// Current (eased) scroll offset.
    pub fn scroll(&self) -> f64 {
        self.animated_scroll
    }

    pub fn target(&self) -> f64 {
        self.target_scroll
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    /// Mouse wheel input; `delta_y` is in pixels, positive scrolls down.
    pub fn on_wheel(&mut self, delta_y: f64) {
        self.virtual_scroll(delta_y * self.config.wheel_multiplier);
    }

    /// Touch drag input; `delta_y` is in pixels, positive scrolls down.
    pub fn on_touch(&mut self, delta_y: f64) {
        self.virtual_scroll(delta_y * self.config.touch_multiplier);
    }

    fn virtual_scroll(&mut self, delta: f64) {
        if !delta.is_finite() || delta == 0.0 {
            return;
        }
        let target = (self.target_scroll + delta).clamp(0.0, self.limit);
        if target == self.target_scroll {
            return;
        }
        self.target_scroll = target;
        self.programmatic = false;
        self.animate
            .start(self.animated_scroll, target, self.config.mode());
        self.is_scrolling = true;
    }

    /// Programmatic scroll. With `immediate`, jumps and returns the resulting event.
    pub fn scroll_to(&mut self, target: f64, immediate: bool) -> Option<ScrollEvent> {
        if !target.is_finite() {
            return None;
        }
        let target = target.clamp(0.0, self.limit);
        if immediate {
            self.animated_scroll = target;
            self.target_scroll = target;
            self.reset();
            return Some(self.event());
        }
        self.programmatic = true;
        self.animate
            .start(self.animated_scroll, target, self.config.mode());
        self.is_scrolling = true;
        None
    }

    /// Update the maximum offset (content height minus viewport height) and re-clamp.
    pub fn set_limit(&mut self, limit: f64) {
        let limit = if limit.is_finite() { limit.max(0.0) } else { 0.0 };
        self.limit = limit;
        self.target_scroll = self.target_scroll.min(limit);
        if self.animated_scroll > limit {
            self.animated_scroll = limit;
            self.reset();
            return;
        }
        if self.animate.running && self.animate.state.to > limit {
            match self.animate.mode {
                AnimateMode::Damp { .. } => self.animate.state.to = limit,
                AnimateMode::Timed { .. } => {
                    self.animate
                        .start(self.animated_scroll, limit, self.config.mode());
                }
            }
        }
    }

    /// Forget the previous frame time, so the next `raf` starts a fresh clock.
    pub fn forget_time(&mut self) {
        self.last_time = None;
    }

    /// Advance by the time elapsed since the previous call.
    pub fn raf(&mut self, now: Millis) -> Option<ScrollEvent> {
        let dt_ms = match self.last_time {
            Some(prev) => now.since(prev).max(0.0),
            None => 0.0,
        };
        self.last_time = Some(now);

        let (value, completed) = self.animate.advance(dt_ms * 0.001)?;
        self.is_scrolling = true;
        self.velocity = value - self.animated_scroll;
        self.direction = sign(self.velocity);
        self.animated_scroll = value;
        if self.programmatic {
            self.target_scroll = value;
        }
        if completed {
            self.reset();
        }
        Some(self.event())
    }

    fn reset(&mut self) {
        self.is_scrolling = false;
        self.velocity = 0.0;
        self.programmatic = false;
        self.animate.running = false;
    }

    fn event(&self) -> ScrollEvent {
        let progress = if self.limit <= 0.0 {
            1.0
        } else {
            self.animated_scroll / self.limit
        };
        ScrollEvent {
            scroll: self.animated_scroll,
            limit: self.limit,
            velocity: self.velocity,
            direction: self.direction,
            progress,
            is_scrolling: self.is_scrolling,
            animate: self.animate.state,
        }
    }
}

fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;
