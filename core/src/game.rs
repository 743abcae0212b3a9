use log::debug;

use crate::constants::*;
use crate::init::create_initial_state;
use crate::replay::Transcript;
use crate::step::step;
use crate::types::*;

/// Owns the session: both combatants, the active toggles and the surface
/// the floor is measured against. Readers only ever get `&GameState`.
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    toggles: Toggles,
    surface: SurfaceSize,
    transcript: Option<Transcript>,
}

impl Game {
    /// Spawn both combatants and push the default toggles.
    pub fn new(surface: SurfaceSize) -> Self {
        Self::with_toggles(surface, Toggles::default())
    }

    pub fn with_toggles(surface: SurfaceSize, toggles: Toggles) -> Self {
        let mut game = Game {
            state: create_initial_state(surface),
            toggles,
            surface,
            transcript: None,
        };
        game.update_game_state(toggles);
        game
    }

    /// Like [`Game::new`], but every step, toggle push and resize is
    /// appended to a transcript that `replay` can re-run.
    pub fn new_recording(surface: SurfaceSize) -> Self {
        let mut game = Self::new(surface);
        game.transcript = Some(Transcript::new(surface));
        game
    }

    /// Restart as a recording session on the current surface, keeping the
    /// current toggles. The state goes back to spawn so the transcript
    /// replays from a fresh game.
    pub fn start_recording(&mut self) {
        let toggles = self.toggles;
        *self = Self::new_recording(self.surface);
        if toggles != self.toggles {
            self.update_game_state(toggles);
        }
    }

    /// Stop recording and hand back what was captured.
    pub fn stop_recording(&mut self) -> Option<Transcript> {
        self.transcript.take()
    }

    pub fn is_recording(&self) -> bool {
        self.transcript.is_some()
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn toggles(&self) -> &Toggles {
        &self.toggles
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn step(&mut self, dt: f64, input: &FrameInput) -> Vec<Hit> {
        if let Some(t) = self.transcript.as_mut() {
            t.record_step(dt, *input);
        }
        step(&mut self.state, input, &self.toggles, self.surface, dt)
    }

    /// Apply a new toggle set. Switching the fake opponent off parks
    /// player 2; switching gravity off kills all vertical velocity.
    pub fn update_game_state(&mut self, toggles: Toggles) {
        debug!("updating game state with toggles: {:?}", toggles);
        if let Some(t) = self.transcript.as_mut() {
            t.record_toggles(toggles);
        }
        apply_toggles(&mut self.state, &toggles);
        self.toggles = toggles;
    }

    fn apply_current_toggles(&mut self) {
        debug!("re-applying toggles: {:?}", self.toggles);
        apply_toggles(&mut self.state, &self.toggles);
    }

    /// Single checkbox edit from the dev-tools panel.
    pub fn set_toggle(&mut self, key: ToggleKey, value: bool) {
        let mut toggles = self.toggles;
        toggles.set(key, value);
        self.update_game_state(toggles);
    }

    /// New surface size. Re-pushes the current toggles; nothing else moves.
    pub fn resize(&mut self, surface: SurfaceSize) {
        debug!("surface resized to {}x{}", surface.width, surface.height);
        if let Some(t) = self.transcript.as_mut() {
            t.record_resize(surface);
        }
        self.surface = surface;
        self.apply_current_toggles();
    }
}

pub fn apply_toggles(state: &mut GameState, toggles: &Toggles) {
    if !toggles.is_fake_opponent {
        let p2 = &mut state.players[1];
        p2.position = PLAYER_TWO_REST;
        p2.velocity = Vec2::ZERO;
    }

    if !toggles.is_gravity {
        for p in state.players.iter_mut() {
            p.velocity.y = 0.0;
        }
    }
}
