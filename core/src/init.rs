use crate::combatant::Combatant;
use crate::constants::*;
use crate::types::*;

/// Both combatants at their spawn points, a quarter of the way down the surface.
pub fn create_initial_state(surface: SurfaceSize) -> GameState {
    let spawn_y = surface.height / 4.0;
    GameState {
        players: [
            Combatant::new(PLAYER_ONE_SPAWN_X, spawn_y, PLAYER_ONE_COLOR),
            Combatant::new(PLAYER_TWO_SPAWN_X, spawn_y, PLAYER_TWO_COLOR),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_correct() {
        let state = create_initial_state(SurfaceSize {
            width: 1280.0,
            height: 720.0,
        });

        assert_eq!(state.players[0].position, Vec2::new(200.0, 180.0));
        assert_eq!(state.players[0].color, "red");
        assert_eq!(state.players[1].position, Vec2::new(600.0, 180.0));
        assert_eq!(state.players[1].color, "blue");

        for p in &state.players {
            assert_eq!(p.velocity, Vec2::ZERO);
            assert_eq!(p.size, PLAYER_SIZE);
            assert!(!p.is_attacking);
            assert_eq!(p.attack_cooldown, 0.0);
            assert_eq!(p.attack_duration, ATTACK_DURATION);
            assert_eq!(p.moving_direction, Direction::Neutral);
        }
    }
}
