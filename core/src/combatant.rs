use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    /// Top-left corner of the body box.
    pub position: Vec2,
    /// Units per second.
    pub velocity: Vec2,
    pub size: f64,
    pub color: String,
    pub moving_direction: Direction,
    pub is_attacking: bool,
    pub attack_cooldown: f64,
    /// Remaining time of the current attack; reseeded when it ends.
    pub attack_duration: f64,
    pub attack_direction: Direction,
}

impl Combatant {
    pub fn new(x: f64, y: f64, color: &str) -> Self {
        Combatant {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            size: PLAYER_SIZE,
            color: color.to_string(),
            moving_direction: Direction::Neutral,
            is_attacking: false,
            attack_cooldown: 0.0,
            attack_duration: ATTACK_DURATION,
            attack_direction: Direction::Neutral,
        }
    }

    // ── Motion ──────────────────────────────────────────────

    /// First held of left, right, up, down wins.
    pub fn update_moving_direction(&mut self, input: &PlayerInput) {
        self.moving_direction = if input.held(button::LEFT) {
            Direction::Left
        } else if input.held(button::RIGHT) {
            Direction::Right
        } else if input.held(button::UP) {
            Direction::Up
        } else if input.held(button::DOWN) {
            Direction::Down
        } else {
            Direction::Neutral
        };
    }

    /// Overwrite velocity axes from held keys. Checked left, right, up, down,
    /// so with opposite keys held the later one sticks.
    pub fn set_input_velocity(&mut self, input: &PlayerInput, speed: f64) {
        if input.held(button::LEFT) {
            self.velocity.x = -speed;
        }
        if input.held(button::RIGHT) {
            self.velocity.x = speed;
        }
        if input.held(button::UP) {
            self.velocity.y = -speed;
        }
        if input.held(button::DOWN) {
            self.velocity.y = speed;
        }
    }

    pub fn apply_gravity(&mut self, accel: f64, dt: f64) {
        self.velocity.y += accel * dt;
    }

    pub fn integrate(&mut self, dt: f64) {
        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt;
    }

    /// Keep the body above the bottom edge. Walls and ceiling are open.
    pub fn clamp_to_floor(&mut self, surface_height: f64) {
        let floor = surface_height - self.size;
        if self.position.y > floor {
            self.position.y = floor;
        }
    }

    // ── Attack ──────────────────────────────────────────────

    /// Start an attack facing `direction`. Ignored while attacking or
    /// cooling down; returns whether a new attack began.
    pub fn attack(&mut self, direction: Direction) -> bool {
        if self.attack_cooldown > 0.0 || self.is_attacking {
            return false;
        }
        self.is_attacking = true;
        self.attack_cooldown = ATTACK_COOLDOWN;
        self.attack_direction = direction;
        true
    }

    /// Advance the attack and cooldown timers. Both run from the same
    /// trigger, so cooldown keeps ticking during the attack.
    pub fn tick_attack(&mut self, dt: f64) {
        if self.is_attacking {
            self.attack_duration -= dt;
            if self.attack_duration <= 0.0 {
                self.is_attacking = false;
                self.attack_duration = ATTACK_DURATION;
            }
        }
        if self.attack_cooldown > 0.0 {
            self.attack_cooldown -= dt;
        }
    }

    pub fn update(&mut self, dt: f64) {
        self.integrate(dt);
        self.tick_attack(dt);
    }

    // ── Boxes ───────────────────────────────────────────────

    pub fn body_box(&self) -> Rect {
        Rect::square(self.position, self.size)
    }

    /// Hit-test region of the active attack. Always the strip right of the
    /// body, whatever `attack_direction` says.
    pub fn attack_hitbox(&self) -> Option<Rect> {
        if !self.is_attacking {
            return None;
        }
        Some(Rect::new(
            self.position.x + self.size,
            self.position.y,
            self.size / 2.0,
            self.size,
        ))
    }

    /// Visual accent for the active attack, on the side it was aimed.
    pub fn attack_indicator(&self) -> Option<Rect> {
        if !self.is_attacking {
            return None;
        }
        let Vec2 { x, y } = self.position;
        let s = self.size;
        let rect = match self.attack_direction {
            Direction::Right => Rect::new(x + s, y, s / 2.0, s),
            Direction::Left => Rect::new(x - s / 2.0, y, s / 2.0, s),
            Direction::Up => Rect::new(x, y - s / 2.0, s, s / 2.0),
            Direction::Down => Rect::new(x, y + s, s, s / 2.0),
            Direction::Neutral => Rect::new(
                x - NEUTRAL_ATTACK_MARGIN,
                y - NEUTRAL_ATTACK_MARGIN,
                s + 2.0 * NEUTRAL_ATTACK_MARGIN,
                s + 2.0 * NEUTRAL_ATTACK_MARGIN,
            ),
        };
        Some(rect)
    }
}
