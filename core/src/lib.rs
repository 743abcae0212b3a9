pub mod combatant;
pub mod constants;
pub mod driver;
pub mod error;
pub mod game;
pub mod geometry;
pub mod hash;
pub mod init;
pub mod input;
pub mod render;
pub mod replay;
pub mod step;
pub mod types;
pub mod viewport;

pub use combatant::Combatant;
pub use constants::*;
pub use driver::{run_frame, FixedTimestep, DEFAULT_FIXED_DT, TickPlan, Timestep, VariableTimestep};
pub use error::ConfigError;
pub use game::Game;
pub use hash::hash_transcript;
pub use init::create_initial_state;
pub use input::{ControlScheme, KeyState, ARROWS, WASD};
pub use render::{render, Surface};
pub use replay::{replay, ReplayOutcome, Transcript, TranscriptEvent};
pub use step::{check_collisions, step};
pub use types::*;
pub use viewport::{fit_viewport, Viewport};
