//! Scripted input sequences for driving a surface outside a UI host.

use crate::foundation::error::{ScratchError, ScratchResult};
use crate::input::event::InputEvent;
use crate::input::mapping::DisplayGeometry;
use crate::reveal::surface::{ScratchStats, ScratchSurface, StrokeOutcome};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One native event, optionally with the surface geometry at the time it fired.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    /// The native event.
    #[serde(flatten)]
    pub event: InputEvent,
    /// Geometry override; the script geometry applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<DisplayGeometry>,
}

impl From<InputEvent> for ScriptedEvent {
    fn from(event: InputEvent) -> Self {
        Self {
            event,
            geometry: None,
        }
    }
}

/// A recorded or hand-written input session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Default on-screen geometry of the surface.
    pub geometry: DisplayGeometry,
    /// Events in delivery order.
    pub events: Vec<ScriptedEvent>,
}

impl ReplayScript {
    /// Parse a script from JSON text.
    pub fn from_json_str(s: &str) -> ScratchResult<Self> {
        serde_json::from_str(s).map_err(|e| ScratchError::serde(e.to_string()))
    }

    /// Read and parse a script file.
    pub fn from_path(path: &Path) -> ScratchResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read replay script '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

/// Summary of a replay run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReplayReport {
    /// Events delivered.
    pub events: usize,
    /// 0-based index of the event that revealed the surface.
    pub revealed_at_event: Option<usize>,
    /// Surface counters after the run.
    pub stats: ScratchStats,
    /// Coverage after the run.
    pub coverage: f64,
}

/// Deliver every scripted event to `surface`, in order.
pub fn replay<T>(surface: &mut ScratchSurface<T>, script: &ReplayScript) -> ReplayReport {
    let mut revealed_at_event = None;
    for (i, scripted) in script.events.iter().enumerate() {
        let geometry = scripted.geometry.unwrap_or(script.geometry);
        if surface.handle_input(&scripted.event, geometry) == StrokeOutcome::Revealed {
            revealed_at_event = Some(i);
        }
    }
    ReplayReport {
        events: script.events.len(),
        revealed_at_event,
        stats: surface.stats(),
        coverage: surface.coverage(),
    }
}

#[cfg(test)]
#[path = "../tests/unit/replay.rs"]
mod tests;
