use crate::{
    animation::ease::Ease,
    foundation::color::Rgba8,
    foundation::core::Millis,
    foundation::error::{StageError, StageResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// Timing of a single property transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    pub duration_ms: f64,
    #[serde(default)]
    pub delay_ms: f64,
    #[serde(default)]
    pub ease: Ease,
}

impl Transition {
    pub fn new(duration_ms: f64, ease: Ease) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            ease,
        }
    }

    /// A transition that completes immediately.
    pub fn instant() -> Self {
        Self::new(0.0, Ease::Linear)
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn validate(&self) -> StageResult<()> {
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(StageError::animation(
                "transition duration_ms must be finite and >= 0",
            ));
        }
        if !self.delay_ms.is_finite() || self.delay_ms < 0.0 {
            return Err(StageError::animation(
                "transition delay_ms must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Linear progress in `[0, 1]` after `elapsed_ms` since the transition was started.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        let active = elapsed_ms - self.delay_ms;
        if active <= 0.0 {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (active / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Time from start until the value reaches its target.
    pub fn total_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }
}

/// A retargetable transition of one value.
///
/// Retargeting mid-flight continues from the value visible at that moment.
#[derive(Clone, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    started: Millis,
    transition: Transition,
}

impl<T> Tween<T>
where
    T: Lerp + Clone + PartialEq,
{
    /// A tween already resting at `value`.
    pub fn settled(value: T) -> Self {
        Self {
            from: value.clone(),
            to: value,
            started: Millis::default(),
            transition: Transition::instant(),
        }
    }

    /// Start moving toward `to` at `now`. Returns `false` (and changes nothing) when `to` is
    /// already the target.
    pub fn retarget(&mut self, to: T, now: Millis, transition: Transition) -> bool {
        if self.to == to {
            return false;
        }
        self.from = self.sample(now);
        self.to = to;
        self.started = now;
        self.transition = transition;
        true
    }

    /// Snap to `value` with no transition.
    pub fn jump(&mut self, value: T) {
        self.from = value.clone();
        self.to = value;
        self.transition = Transition::instant();
    }

    pub fn sample(&self, now: Millis) -> T {
        let p = self.transition.progress(now.since(self.started));
        if p >= 1.0 {
            return self.to.clone();
        }
        if p <= 0.0 {
            return self.from.clone();
        }
        T::lerp(&self.from, &self.to, self.transition.ease.apply(p))
    }

    pub fn target(&self) -> &T {
        &self.to
    }

    pub fn is_settled(&self, now: Millis) -> bool {
        self.transition.progress(now.since(self.started)) >= 1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
