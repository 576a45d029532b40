//! Deterministic host loop: replays scripted input against a [`Stage`] at a fixed frame rate.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    foundation::core::{EntryId, Millis, Viewport},
    foundation::error::{StageError, StageResult},
    page::model::PageDef,
    stage::controller::{FrameSnapshot, Stage},
};

/// Upper bound on frames produced by one [`replay`].
pub const MAX_REPLAY_FRAMES: u64 = 1_000_000;

/// One host input.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScrollInput {
    Wheel {
        delta_y: f64,
    },
    Touch {
        delta_y: f64,
    },
    ScrollTo {
        offset: f64,
        #[serde(default)]
        immediate: bool,
    },
    ScrollToEntry {
        id: EntryId,
        #[serde(default)]
        immediate: bool,
    },
    Resize {
        width: f64,
        height: f64,
    },
    Mount,
    Unmount,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptEvent {
    pub at_ms: f64,
    pub input: ScrollInput,
}

/// Timed input for a replay. The page is mounted at time zero.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollScript {
    pub duration_ms: f64,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl ScrollScript {
    pub fn from_reader<R: std::io::Read>(r: R) -> StageResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StageError::serde(format!("parse scroll script JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> StageResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StageError::validation(format!("open scroll script '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> StageResult<()> {
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(StageError::validation(
                "script duration_ms must be finite and >= 0",
            ));
        }
        for (i, ev) in self.events.iter().enumerate() {
            if !ev.at_ms.is_finite() || ev.at_ms < 0.0 {
                return Err(StageError::validation(format!(
                    "script event {i}: at_ms must be finite and >= 0"
                )));
            }
            if let ScrollInput::Resize { width, height } = ev.input {
                Viewport::new(width, height)
                    .map_err(|e| StageError::validation(format!("script event {i}: {e}")))?;
            }
        }
        Ok(())
    }
}

/// Replay `script` at `fps`, returning one snapshot per frame.
///
/// Frame `k` runs at `k * 1000 / fps` ms, up to and including `duration_ms`. Events are applied
/// (stable-sorted by time) just before the first frame at or after their timestamp.
#[tracing::instrument(skip(page, script), fields(events = script.events.len()))]
pub fn replay(
    page: PageDef,
    viewport: Viewport,
    script: &ScrollScript,
    fps: f64,
) -> StageResult<Vec<FrameSnapshot>> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(StageError::validation("fps must be finite and > 0"));
    }
    script.validate()?;

    let frame_ms = 1000.0 / fps;
    let frames = (script.duration_ms / frame_ms).floor() + 1.0;
    if !frames.is_finite() || frames > MAX_REPLAY_FRAMES as f64 {
        return Err(StageError::validation(format!(
            "replay of {} ms at {fps} fps exceeds {MAX_REPLAY_FRAMES} frames",
            script.duration_ms
        )));
    }
    let frames = frames as u64;

    let mut events = script.events.clone();
    events.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));
    let mut pending = events.into_iter().peekable();

    let mut stage = Stage::new(page, viewport)?;
    stage.mount();

    let mut out = Vec::new();
    for k in 0..frames {
        let now = k as f64 * frame_ms;
        while let Some(ev) = pending.next_if(|ev| ev.at_ms <= now) {
            apply(&mut stage, ev.input)?;
        }
        out.push(stage.frame(Millis(now)));
    }

    if let Some(last) = out.last() {
        tracing::info!(
            frames = out.len(),
            scroll = last.scroll,
            active = ?last.active,
            "replay finished"
        );
    }
    Ok(out)
}

fn apply(stage: &mut Stage, input: ScrollInput) -> StageResult<()> {
    tracing::debug!(?input, "script input");
    match input {
        ScrollInput::Wheel { delta_y } => stage.wheel(delta_y),
        ScrollInput::Touch { delta_y } => stage.touch(delta_y),
        ScrollInput::ScrollTo { offset, immediate } => stage.scroll_to(offset, immediate),
        ScrollInput::ScrollToEntry { id, immediate } => stage.scroll_to_entry(id, immediate)?,
        ScrollInput::Resize { width, height } => stage.resize(Viewport::new(width, height)?),
        ScrollInput::Mount => {
            stage.mount();
        }
        ScrollInput::Unmount => {
            stage.unmount();
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/session/replay.rs"]
mod tests;
