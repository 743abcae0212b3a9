//! Session transcripts and deterministic replay.
//!
//! A host that records every step, toggle push and resize it feeds the
//! game can rebuild the exact same state later from the transcript alone.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::Game;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TranscriptEvent {
    Step { dt: f64, input: FrameInput },
    Toggles { toggles: Toggles },
    Resize { surface: SurfaceSize },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Surface the session was created with.
    pub surface: SurfaceSize,
    pub events: Vec<TranscriptEvent>,
}

impl Transcript {
    pub fn new(surface: SurfaceSize) -> Self {
        Transcript {
            surface,
            events: Vec::new(),
        }
    }

    pub fn record_step(&mut self, dt: f64, input: FrameInput) {
        self.events.push(TranscriptEvent::Step { dt, input });
    }

    pub fn record_toggles(&mut self, toggles: Toggles) {
        self.events.push(TranscriptEvent::Toggles { toggles });
    }

    pub fn record_resize(&mut self, surface: SurfaceSize) {
        self.events.push(TranscriptEvent::Resize { surface });
    }

    pub fn step_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TranscriptEvent::Step { .. }))
            .count()
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReplayOutcome {
    pub state: GameState,
    pub toggles: Toggles,
    /// `(step index, hit)` for every hit registered during the replay.
    pub hits: Vec<(usize, Hit)>,
}

/// Re-run a transcript from a fresh game.
pub fn replay(transcript: &Transcript) -> ReplayOutcome {
    let mut game = Game::new(transcript.surface);
    let mut hits = Vec::new();
    let mut step_index = 0;

    for event in &transcript.events {
        match event {
            TranscriptEvent::Step { dt, input } => {
                hits.extend(game.step(*dt, input).into_iter().map(|h| (step_index, h)));
                step_index += 1;
            }
            TranscriptEvent::Toggles { toggles } => game.update_game_state(*toggles),
            TranscriptEvent::Resize { surface } => game.resize(*surface),
        }
    }

    ReplayOutcome {
        state: game.state().clone(),
        toggles: *game.toggles(),
        hits,
    }
}
