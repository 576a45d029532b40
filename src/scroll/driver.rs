use crate::{
    foundation::core::Millis,
    scroll::smooth::{ScrollEvent, SmoothScroll},
};

/// Lifecycle state of a [`ScrollDriver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DriverState {
    Stopped,
    Running,
}

/// Owns the smooth-scroll engine and advances it from the host's frame loop.
///
/// `start`/`stop` are idempotent, so remounting a page never stacks frame callbacks. While
/// stopped, input is still accepted but `tick` does nothing.
#[derive(Clone, Debug)]
pub struct ScrollDriver {
    engine: SmoothScroll,
    state: DriverState,
    ticks: u64,
}

impl ScrollDriver {
    pub fn new(engine: SmoothScroll) -> Self {
        Self {
            engine,
            state: DriverState::Stopped,
            ticks: 0,
        }
    }

    pub fn start(&mut self) -> bool {
        if self.state == DriverState::Running {
            return false;
        }
        self.state = DriverState::Running;
        tracing::debug!("scroll driver started");
        true
    }

    pub fn stop(&mut self) -> bool {
        if self.state == DriverState::Stopped {
            return false;
        }
        self.state = DriverState::Stopped;
        self.engine.forget_time();
        tracing::debug!(ticks = self.ticks, "scroll driver stopped");
        true
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Frames advanced while running.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one frame. Returns the engine's scroll event, if any.
    pub fn tick(&mut self, now: Millis) -> Option<ScrollEvent> {
        if self.state != DriverState::Running {
            return None;
        }
        self.ticks += 1;
        self.engine.raf(now)
    }

    pub fn engine(&self) -> &SmoothScroll {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SmoothScroll {
        &mut self.engine
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/driver.rs"]
mod tests;
