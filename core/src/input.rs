use std::collections::HashSet;

use crate::types::*;

/// Key identifiers (as reported by `KeyboardEvent.key`) for one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlScheme {
    pub left: &'static str,
    pub right: &'static str,
    pub up: &'static str,
    pub down: &'static str,
    pub attack: &'static str,
}

pub const WASD: ControlScheme = ControlScheme {
    left: "a",
    right: "d",
    up: "w",
    down: "s",
    attack: " ",
};

pub const ARROWS: ControlScheme = ControlScheme {
    left: "ArrowLeft",
    right: "ArrowRight",
    up: "ArrowUp",
    down: "ArrowDown",
    attack: "Enter",
};

/// `[player1, player2]` schemes.
pub const SCHEMES: [ControlScheme; 2] = [WASD, ARROWS];

impl ControlScheme {
    pub fn buttons(&self, keys: &KeyState) -> u8 {
        let mut buttons = 0;
        for (key, mask) in [
            (self.left, button::LEFT),
            (self.right, button::RIGHT),
            (self.up, button::UP),
            (self.down, button::DOWN),
            (self.attack, button::ATTACK),
        ] {
            if keys.is_held(key) {
                buttons |= mask;
            }
        }
        buttons
    }
}

/// Held keys, updated by the host between frames. Identifiers are
/// case-sensitive, so "A" (shift held) is not "a".
#[derive(Clone, Debug, Default)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_string());
    }

    pub fn release(&mut self, key: &str) {
        self.held.remove(key);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Drop everything, e.g. when the page loses focus and key-ups are missed.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Freeze the current keys into the per-frame input handed to `step`.
    pub fn snapshot(&self) -> FrameInput {
        SCHEMES.map(|scheme| PlayerInput {
            buttons: scheme.buttons(self),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_maps_both_schemes() {
        let mut keys = KeyState::new();
        keys.press("a");
        keys.press(" ");
        keys.press("ArrowDown");
        let input = keys.snapshot();
        assert_eq!(input[0].buttons, button::LEFT | button::ATTACK);
        assert_eq!(input[1].buttons, button::DOWN);
    }

    #[test]
    fn release_clears_key() {
        let mut keys = KeyState::new();
        keys.press("Enter");
        keys.release("Enter");
        assert_eq!(keys.snapshot(), [NULL_INPUT; 2]);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let mut keys = KeyState::new();
        keys.press("D");
        assert_eq!(keys.snapshot()[0], NULL_INPUT);
    }

    #[test]
    fn unrelated_keys_ignored() {
        let mut keys = KeyState::new();
        keys.press("q");
        keys.press("Shift");
        assert_eq!(keys.snapshot(), [NULL_INPUT; 2]);
    }

    #[test]
    fn clear_releases_all() {
        let mut keys = KeyState::new();
        keys.press("w");
        keys.press("ArrowUp");
        keys.clear();
        assert!(!keys.is_held("w"));
        assert_eq!(keys.snapshot(), [NULL_INPUT; 2]);
    }
}
