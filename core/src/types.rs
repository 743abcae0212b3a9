use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::combatant::Combatant;
use crate::error::ConfigError;

// ── Primitives ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Index into `GameState::players`.
pub type PlayerId = usize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    #[default]
    Neutral,
}

// ── Input ───────────────────────────────────────────────────

/// Button bitmask constants.
pub mod button {
    pub const LEFT: u8 = 1;
    pub const RIGHT: u8 = 2;
    pub const UP: u8 = 4;
    pub const DOWN: u8 = 8;
    pub const ATTACK: u8 = 16;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub buttons: u8,
}

impl PlayerInput {
    pub fn held(&self, mask: u8) -> bool {
        self.buttons & mask != 0
    }
}

pub const NULL_INPUT: PlayerInput = PlayerInput { buttons: 0 };

/// One input snapshot per frame: `[player1, player2]`.
pub type FrameInput = [PlayerInput; 2];

// ── Toggles ─────────────────────────────────────────────────

/// Dev-tools switches pushed into the game from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Toggles {
    /// Player 2 follows the arrow-key scheme instead of resting.
    pub is_fake_opponent: bool,
    pub is_gravity: bool,
    /// Render-only hitbox outline.
    pub is_hitboxes: bool,
    /// Exposed to the panel but not consulted by the collision check.
    pub is_collisions: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Toggles {
            is_fake_opponent: true,
            is_gravity: true,
            is_hitboxes: false,
            is_collisions: true,
        }
    }
}

impl Toggles {
    pub fn get(&self, key: ToggleKey) -> bool {
        match key {
            ToggleKey::FakeOpponent => self.is_fake_opponent,
            ToggleKey::Gravity => self.is_gravity,
            ToggleKey::Hitboxes => self.is_hitboxes,
            ToggleKey::Collisions => self.is_collisions,
        }
    }

    pub fn set(&mut self, key: ToggleKey, value: bool) {
        match key {
            ToggleKey::FakeOpponent => self.is_fake_opponent = value,
            ToggleKey::Gravity => self.is_gravity = value,
            ToggleKey::Hitboxes => self.is_hitboxes = value,
            ToggleKey::Collisions => self.is_collisions = value,
        }
    }

    /// Parse a toggle object; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleKey {
    FakeOpponent,
    Gravity,
    Hitboxes,
    Collisions,
}

impl ToggleKey {
    pub const ALL: [ToggleKey; 4] = [
        ToggleKey::FakeOpponent,
        ToggleKey::Gravity,
        ToggleKey::Hitboxes,
        ToggleKey::Collisions,
    ];

    /// Name used by the dev-tools panel.
    pub fn name(self) -> &'static str {
        match self {
            ToggleKey::FakeOpponent => "isFakeOpponent",
            ToggleKey::Gravity => "isGravity",
            ToggleKey::Hitboxes => "isHitboxes",
            ToggleKey::Collisions => "isCollisions",
        }
    }
}

impl FromStr for ToggleKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToggleKey::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ConfigError::UnknownToggle(s.to_string()))
    }
}

// ── Surface ─────────────────────────────────────────────────

/// Backing-store size of the drawing surface. `height` defines the floor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

// ── Game State ──────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// `[player1, player2]`. Both live for the whole session.
    pub players: [Combatant; 2],
}

/// Attack hitbox of `attacker` overlapped the body box of `victim`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    pub attacker: PlayerId,
    pub victim: PlayerId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_default_matches_panel() {
        let t = Toggles::default();
        assert!(t.is_fake_opponent);
        assert!(t.is_gravity);
        assert!(!t.is_hitboxes);
        assert!(t.is_collisions);
    }

    #[test]
    fn toggles_json_uses_panel_names() {
        let t = Toggles::from_json(r#"{"isGravity": false, "isHitboxes": true}"#).unwrap();
        assert!(!t.is_gravity);
        assert!(t.is_hitboxes);
        // Missing fields fall back to defaults
        assert!(t.is_fake_opponent);
        assert!(t.is_collisions);
    }

    #[test]
    fn toggles_json_rejects_garbage() {
        assert!(matches!(
            Toggles::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn toggle_key_parses_names() {
        for key in ToggleKey::ALL {
            assert_eq!(key.name().parse::<ToggleKey>().unwrap(), key);
        }
        assert!(matches!(
            "isTurbo".parse::<ToggleKey>(),
            Err(ConfigError::UnknownToggle(name)) if name == "isTurbo"
        ));
    }

    #[test]
    fn toggle_set_and_get() {
        let mut t = Toggles::default();
        t.set(ToggleKey::Gravity, false);
        assert!(!t.get(ToggleKey::Gravity));
        assert!(t.get(ToggleKey::FakeOpponent));
    }

    #[test]
    fn input_held_checks_mask() {
        let input = PlayerInput {
            buttons: button::LEFT | button::ATTACK,
        };
        assert!(input.held(button::LEFT));
        assert!(input.held(button::ATTACK));
        assert!(!input.held(button::RIGHT));
        assert!(!NULL_INPUT.held(button::ATTACK));
    }
}
