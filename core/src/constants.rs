use crate::types::Vec2;

// Rates are per second; dt is always in seconds.

// Physics
pub const PLAYER_SPEED: f64 = 200.0;
pub const GRAVITY: f64 = 9.8 * 50.0;

// Combatant body
pub const PLAYER_SIZE: f64 = 20.0;

// Attack timings
pub const ATTACK_DURATION: f64 = 0.2;
pub const ATTACK_COOLDOWN: f64 = 0.25;

// Spawns. Player y is a quarter of the surface height at creation.
pub const PLAYER_ONE_SPAWN_X: f64 = 200.0;
pub const PLAYER_TWO_SPAWN_X: f64 = 600.0;
pub const PLAYER_ONE_COLOR: &str = "red";
pub const PLAYER_TWO_COLOR: &str = "blue";

/// Where player 2 is parked while the fake opponent is switched off.
pub const PLAYER_TWO_REST: Vec2 = Vec2::new(600.0, 300.0);

// Render
pub const ACCENT_COLOR: &str = "yellow";
pub const HITBOX_LINE_WIDTH: f64 = 2.0;
/// Neutral attack ring grows this far past the body on every side.
pub const NEUTRAL_ATTACK_MARGIN: f64 = 2.0;

// Viewport
pub const ASPECT_RATIO: f64 = 16.0 / 9.0;
