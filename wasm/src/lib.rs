use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use duel_core::{
    fit_viewport, hash_transcript, run_frame, ConfigError, Game, GameState, KeyState, Rect,
    Surface, SurfaceSize, ToggleKey, Toggles, VariableTimestep,
};
use serde::Serialize;
use thiserror::Error;

/// Install panic hook and console logger so WASM panics and `log` output
/// show up in the browser console.
#[wasm_bindgen(start)]
pub fn init_hooks() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("could not get 2D context")]
    ContextUnavailable,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("serialization failed: {0}")]
    Serde(#[from] serde_wasm_bindgen::Error),
    #[error("canvas call failed: {0}")]
    Js(String),
}

impl From<WebError> for JsValue {
    fn from(e: WebError) -> JsValue {
        js_sys::Error::new(&e.to_string()).into()
    }
}

fn js_error(v: JsValue) -> WebError {
    WebError::Js(v.as_string().unwrap_or_else(|| format!("{:?}", v)))
}

/// Canvas-backed drawing surface.
struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    fn new(canvas: HtmlCanvasElement) -> Result<Self, WebError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or(WebError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::ContextUnavailable)?;
        Ok(CanvasSurface { canvas, ctx })
    }

    /// Backing-store size as the canvas reports it.
    fn size(&self) -> SurfaceSize {
        SurfaceSize {
            width: self.canvas.width() as f64,
            height: self.canvas.height() as f64,
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        let SurfaceSize { width, height } = self.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, r: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(r.x, r.y, r.width, r.height);
    }

    fn stroke_rect(&mut self, r: Rect, color: &str, line_width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.stroke_rect(r.x, r.y, r.width, r.height);
    }
}

/// JSON-serializable view of the game for JS (state + active toggles).
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSnapshot<'a> {
    state: &'a GameState,
    toggles: &'a Toggles,
    surface: SurfaceSize,
}

/// Browser handle. The host page owns the animation-frame loop, key
/// listeners and dev-tools panel, and forwards them here.
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    clock: VariableTimestep,
    keys: KeyState,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl WasmGame {
    /// Bind to a canvas. Fails if no 2D context can be acquired.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<WasmGame, JsValue> {
        let surface = CanvasSurface::new(canvas)?;
        let game = Game::new(surface.size());
        Ok(WasmGame {
            game,
            clock: VariableTimestep::new(),
            keys: KeyState::new(),
            surface,
        })
    }

    /// `KeyboardEvent.key` of a keydown.
    pub fn key_down(&mut self, key: &str) {
        self.keys.press(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.release(key);
    }

    /// Forget held keys, e.g. on window blur.
    pub fn release_all_keys(&mut self) {
        self.keys.clear();
    }

    /// One animation frame. `timestamp` is the rAF timestamp in ms.
    /// Returns the number of hits registered.
    pub fn frame(&mut self, timestamp: f64) -> u32 {
        let input = self.keys.snapshot();
        let hits = run_frame(
            &mut self.game,
            &mut self.clock,
            &input,
            timestamp,
            &mut self.surface,
        );
        hits.len() as u32
    }

    /// Refit the canvas to 16:9 inside the available space and re-push
    /// the current toggles.
    pub fn resize(
        &mut self,
        available_width: f64,
        available_height: f64,
        pixel_ratio: f64,
    ) -> Result<(), JsValue> {
        let viewport = fit_viewport(available_width, available_height, pixel_ratio);
        let backing = viewport.surface();
        let canvas = &self.surface.canvas;
        canvas.set_width(backing.width as u32);
        canvas.set_height(backing.height as u32);
        // Resizing the canvas reset the transform, so this scales once
        self.surface
            .ctx
            .scale(viewport.pixel_ratio, viewport.pixel_ratio)
            .map_err(js_error)?;
        self.game.resize(self.surface.size());
        Ok(())
    }

    /// Dev-tools checkbox edit by panel name (`isGravity`, …).
    pub fn set_toggle(&mut self, name: &str, value: bool) -> Result<(), JsValue> {
        let key: ToggleKey = name.parse().map_err(WebError::from)?;
        self.game.set_toggle(key, value);
        Ok(())
    }

    /// Push a whole toggle object. Missing fields take their defaults.
    pub fn set_toggles(&mut self, toggles: JsValue) -> Result<(), JsValue> {
        let toggles: Toggles =
            serde_wasm_bindgen::from_value(toggles).map_err(WebError::from)?;
        self.game.update_game_state(toggles);
        Ok(())
    }

    pub fn toggles(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.game.toggles()).map_err(WebError::from)?)
    }

    /// Read-only copy of the game for UI overlays and debugging.
    pub fn export_state(&self) -> Result<JsValue, JsValue> {
        let snapshot = JsSnapshot {
            state: self.game.state(),
            toggles: self.game.toggles(),
            surface: self.game.surface(),
        };
        Ok(serde_wasm_bindgen::to_value(&snapshot).map_err(WebError::from)?)
    }

    /// Restart from spawn and record every frame, toggle push and resize
    /// until `stop_recording`. Recording is off by default.
    pub fn start_recording(&mut self) {
        self.game.start_recording();
    }

    /// Stop recording and return the transcript as JSON, or an empty
    /// string if nothing was being recorded.
    pub fn stop_recording(&mut self) -> Result<String, JsValue> {
        match self.game.stop_recording() {
            Some(t) => Ok(t.to_json().map_err(WebError::from)?),
            None => Ok(String::new()),
        }
    }

    pub fn is_recording(&self) -> bool {
        self.game.is_recording()
    }

    /// Transcript recorded so far as JSON, replayable with
    /// `duel_core::replay`. Empty when not recording.
    pub fn export_transcript(&self) -> Result<String, JsValue> {
        match self.game.transcript() {
            Some(t) => Ok(t.to_json().map_err(WebError::from)?),
            None => Ok(String::new()),
        }
    }

    /// Hex SHA-256 of the session transcript.
    pub fn transcript_hash(&self) -> String {
        self.game
            .transcript()
            .map(|t| hex::encode(hash_transcript(t)))
            .unwrap_or_default()
    }
}
