//! Frame driver: turns host timestamps into simulation steps.
//!
//! The host (an animation-frame callback) reports absolute timestamps in
//! milliseconds. A [`Timestep`] decides how many steps of which `dt` that
//! tick is worth; [`run_frame`] executes the plan and renders once.

use log::{trace, warn};

use crate::game::Game;
use crate::render::{render, Surface};
use crate::types::{FrameInput, Hit};

/// Steps to run for one host tick, all with the same `dt` (seconds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickPlan {
    pub steps: u32,
    pub dt: f64,
}

pub trait Timestep {
    fn plan(&mut self, timestamp_ms: f64) -> TickPlan;
}

/// One step per tick with whatever time elapsed since the previous tick.
#[derive(Clone, Debug, Default)]
pub struct VariableTimestep {
    last_timestamp_ms: f64,
}

impl VariableTimestep {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Timestep for VariableTimestep {
    fn plan(&mut self, timestamp_ms: f64) -> TickPlan {
        let dt = ((timestamp_ms - self.last_timestamp_ms) / 1000.0).max(0.0);
        self.last_timestamp_ms = timestamp_ms;
        TickPlan { steps: 1, dt }
    }
}

/// Step size used when `FixedTimestep::new` is given one that is not
/// positive and finite.
pub const DEFAULT_FIXED_DT: f64 = 1.0 / 60.0;

/// Fixed `dt` with an accumulator. Long frames are clamped, and backlog
/// beyond `max_steps` per tick is dropped.
#[derive(Clone, Debug)]
pub struct FixedTimestep {
    fixed_dt: f64,
    max_steps: u32,
    max_frame_delta: f64,
    accumulator: f64,
    last_timestamp_ms: Option<f64>,
}

impl FixedTimestep {
    pub fn new(fixed_dt: f64, max_steps: u32, max_frame_delta: f64) -> Self {
        let fixed_dt = if fixed_dt.is_finite() && fixed_dt > 0.0 {
            fixed_dt
        } else {
            warn!("invalid fixed dt {fixed_dt}, using {DEFAULT_FIXED_DT}");
            DEFAULT_FIXED_DT
        };
        // A negative cap would rewind the accumulator
        let max_frame_delta = if max_frame_delta >= 0.0 {
            max_frame_delta
        } else {
            fixed_dt
        };
        FixedTimestep {
            fixed_dt,
            max_steps: max_steps.max(1),
            max_frame_delta,
            accumulator: 0.0,
            last_timestamp_ms: None,
        }
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }
}

impl Timestep for FixedTimestep {
    fn plan(&mut self, timestamp_ms: f64) -> TickPlan {
        let elapsed = match self.last_timestamp_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_timestamp_ms = Some(timestamp_ms);
        self.accumulator += elapsed.min(self.max_frame_delta);

        let mut steps = 0;
        while self.accumulator >= self.fixed_dt && steps < self.max_steps {
            self.accumulator -= self.fixed_dt;
            steps += 1;
        }
        if self.accumulator >= self.fixed_dt {
            trace!("dropping {:.4}s of simulation backlog", self.accumulator);
            self.accumulator %= self.fixed_dt;
        }

        TickPlan {
            steps,
            dt: self.fixed_dt,
        }
    }
}

/// One host tick: step the game as planned, then draw it.
pub fn run_frame<T: Timestep + ?Sized, S: Surface + ?Sized>(
    game: &mut Game,
    timestep: &mut T,
    input: &FrameInput,
    timestamp_ms: f64,
    surface: &mut S,
) -> Vec<Hit> {
    let plan = timestep.plan(timestamp_ms);
    trace!("frame at {timestamp_ms}ms: {} step(s) of {}s", plan.steps, plan.dt);

    let mut hits = Vec::new();
    for _ in 0..plan.steps {
        hits.extend(game.step(plan.dt, input));
    }
    render(surface, game.state(), game.toggles());
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::RecordingSurface;
    use crate::types::{SurfaceSize, NULL_INPUT};

    #[test]
    fn variable_first_tick_measures_from_zero() {
        let mut ts = VariableTimestep::new();
        assert_eq!(ts.plan(0.0), TickPlan { steps: 1, dt: 0.0 });
        assert_eq!(ts.plan(16.0), TickPlan { steps: 1, dt: 0.016 });
        assert_eq!(ts.plan(50.0), TickPlan { steps: 1, dt: 0.034 });
    }

    #[test]
    fn variable_backwards_timestamp_is_zero_dt() {
        let mut ts = VariableTimestep::new();
        ts.plan(100.0);
        assert_eq!(ts.plan(90.0).dt, 0.0);
        // Measures from the latest timestamp afterwards
        assert_eq!(ts.plan(100.0).dt, 0.01);
    }

    #[test]
    fn fixed_runs_whole_steps() {
        let mut ts = FixedTimestep::new(0.01, 5, 0.25);
        assert_eq!(ts.plan(0.0).steps, 0);
        assert_eq!(ts.plan(35.0).steps, 3);
        assert!((ts.accumulator() - 0.005).abs() < 1e-9);
        assert_eq!(ts.plan(47.0).steps, 1);
    }

    #[test]
    fn fixed_drops_backlog_past_cap() {
        let mut ts = FixedTimestep::new(0.01, 4, 0.25);
        ts.plan(0.0);
        let plan = ts.plan(1000.0);
        assert_eq!(plan.steps, 4);
        assert!(ts.accumulator() < 0.01);
    }

    #[test]
    fn fixed_rejects_degenerate_step_size() {
        for bad in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let mut ts = FixedTimestep::new(bad, 10, 0.25);
            ts.plan(0.0);
            let plan = ts.plan(110.0);
            assert_eq!(plan.dt, DEFAULT_FIXED_DT);
            assert_eq!(plan.steps, 6);
            assert!(ts.accumulator().is_finite());
            assert!(ts.accumulator() >= 0.0 && ts.accumulator() < DEFAULT_FIXED_DT);
        }
    }

    #[test]
    fn fixed_negative_frame_cap_still_advances() {
        let mut ts = FixedTimestep::new(0.01, 10, -1.0);
        ts.plan(0.0);
        assert_eq!(ts.plan(100.0).steps, 1);
        assert!(ts.accumulator() >= 0.0);
    }

    #[test]
    fn run_frame_steps_then_renders() {
        let mut game = Game::new(SurfaceSize {
            width: 1280.0,
            height: 720.0,
        });
        let mut ts = VariableTimestep::new();
        let mut surface = RecordingSurface::default();

        run_frame(&mut game, &mut ts, &[NULL_INPUT; 2], 0.0, &mut surface);
        let y0 = game.state().players[0].position.y;
        run_frame(&mut game, &mut ts, &[NULL_INPUT; 2], 100.0, &mut surface);

        // Gravity is on by default: one 0.1s step
        let expected = y0 + crate::constants::GRAVITY * 0.1 * 0.1;
        assert!((game.state().players[0].position.y - expected).abs() < 1e-9);
        assert_eq!(surface.clears, 2);
    }

    #[test]
    fn run_frame_with_fixed_policy() {
        let mut game = Game::new(SurfaceSize {
            width: 1280.0,
            height: 720.0,
        });
        let mut ts = FixedTimestep::new(0.05, 10, 0.25);
        let mut surface = RecordingSurface::default();
        let input = [
            crate::types::PlayerInput {
                buttons: crate::types::button::RIGHT,
            },
            NULL_INPUT,
        ];

        run_frame(&mut game, &mut ts, &input, 0.0, &mut surface);
        let x0 = game.state().players[0].position.x;
        run_frame(&mut game, &mut ts, &input, 100.0, &mut surface);
        assert!((game.state().players[0].position.x - (x0 + 20.0)).abs() < 1e-9);
        assert_eq!(surface.clears, 2);
    }
}
