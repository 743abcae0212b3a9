use crate::constants::*;
use crate::types::*;

/// Drawing target. Coordinates are in simulation units.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f64);
}

/// Draw one frame: bodies, active attack accents, then the optional
/// hitbox overlay.
pub fn render<S: Surface + ?Sized>(surface: &mut S, state: &GameState, toggles: &Toggles) {
    surface.clear();

    for p in &state.players {
        surface.fill_rect(p.body_box(), &p.color);
        if let Some(accent) = p.attack_indicator() {
            surface.fill_rect(accent, ACCENT_COLOR);
        }
    }

    if toggles.is_hitboxes {
        for (i, p) in state.players.iter().enumerate() {
            // A parked player 2 gets no outline
            if i == 0 || toggles.is_fake_opponent {
                surface.stroke_rect(p.body_box(), ACCENT_COLOR, HITBOX_LINE_WIDTH);
            }
        }
    }
}
