use log::info;

use crate::combatant::Combatant;
use crate::constants::*;
use crate::types::*;

/// Advance the simulation by `dt` seconds.
///
/// Sub-step order:
///  1. Player 1 input (velocity reset, direction, velocity, attack)
///  2. Player 2 input, only while the fake opponent is on
///  3. Gravity
///  4. Integrate + attack timers, then floor clamp
///  5. Attack hitbox vs body collisions
///
/// Returns the hits registered this step. Both hitboxes face right, so
/// only the combatant on the left can connect and there is at most one.
pub fn step(
    state: &mut GameState,
    input: &FrameInput,
    toggles: &Toggles,
    surface: SurfaceSize,
    dt: f64,
) -> Vec<Hit> {
    let [p1, p2] = &mut state.players;

    // 1. Player 1 controls
    apply_player_input(p1, &input[0]);

    // 2. Player 2 controls. Off means frozen at whatever it last had.
    if toggles.is_fake_opponent {
        apply_player_input(p2, &input[1]);
    }

    // 3. Gravity
    if toggles.is_gravity {
        for p in state.players.iter_mut() {
            p.apply_gravity(GRAVITY, dt);
        }
    }

    // 4. Move + clamp
    for p in state.players.iter_mut() {
        p.update(dt);
        p.clamp_to_floor(surface.height);
    }

    // 5. Collisions. `is_collisions` is not consulted here.
    let hits = check_collisions(state);
    for hit in &hits {
        info!("Player {} hit Player {}!", hit.attacker + 1, hit.victim + 1);
    }
    hits
}

/// Reset velocity and rebuild it from this frame's buttons.
pub fn apply_player_input(p: &mut Combatant, input: &PlayerInput) {
    p.velocity = Vec2::ZERO;
    p.update_moving_direction(input);
    p.set_input_velocity(input, PLAYER_SPEED);
    if input.held(button::ATTACK) {
        p.attack(p.moving_direction);
    }
}

/// Every attacker whose hitbox overlaps the other combatant's body.
pub fn check_collisions(state: &GameState) -> Vec<Hit> {
    let mut hits = Vec::new();
    for (attacker, p) in state.players.iter().enumerate() {
        let Some(hitbox) = p.attack_hitbox() else {
            continue;
        };
        let victim = 1 - attacker;
        if state.players[victim].body_box().overlaps(&hitbox) {
            hits.push(Hit { attacker, victim });
        }
    }
    hits
}
