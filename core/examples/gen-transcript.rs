//! Generates a scripted session transcript as JSON.
//!
//! Usage:
//!   cargo run -p duel-core --example gen-transcript -- [idle|duel|toggles] > transcript.json

use duel_core::*;

const SURFACE: SurfaceSize = SurfaceSize {
    width: 1280.0,
    height: 720.0,
};
const FRAMES: u32 = 600;
const DT: f64 = 1.0 / 60.0;

fn input(p1: u8, p2: u8) -> FrameInput {
    [PlayerInput { buttons: p1 }, PlayerInput { buttons: p2 }]
}

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "idle".to_string());

    let mut transcript = Transcript::new(SURFACE);
    match mode.as_str() {
        "idle" => {
            // Both players drop to the floor and stand there
            for _ in 0..FRAMES {
                transcript.record_step(DT, [NULL_INPUT; 2]);
            }
        }
        "duel" => {
            // P1 walks right into P2 and swings, P2 walks left and swings back
            for frame in 0..FRAMES {
                let p1 = if frame < 90 { button::RIGHT } else { button::ATTACK };
                let p2 = if frame < 90 { button::LEFT } else { button::ATTACK };
                transcript.record_step(DT, input(p1, p2));
            }
        }
        "toggles" => {
            // Walk, then park P2 and switch gravity off halfway through
            for frame in 0..FRAMES {
                if frame == FRAMES / 2 {
                    transcript.record_toggles(Toggles {
                        is_fake_opponent: false,
                        is_gravity: false,
                        ..Toggles::default()
                    });
                }
                transcript.record_step(DT, input(button::RIGHT, button::LEFT));
            }
        }
        _ => {
            eprintln!("Unknown mode: {}. Use 'idle', 'duel', or 'toggles'", mode);
            std::process::exit(1);
        }
    }

    // Verify by running the sim
    let outcome = replay(&transcript);

    eprintln!("=== Sim result ({} mode) ===", mode);
    eprintln!("Steps: {}", transcript.step_count());
    eprintln!("Hits: {}", outcome.hits.len());
    for (i, p) in outcome.state.players.iter().enumerate() {
        eprintln!(
            "P{}: pos=({:.2}, {:.2}) vel=({:.2}, {:.2})",
            i + 1,
            p.position.x,
            p.position.y,
            p.velocity.x,
            p.velocity.y
        );
    }
    eprintln!("Transcript hash: {}", hex::encode(hash_transcript(&transcript)));

    match transcript.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize transcript: {}", e);
            std::process::exit(1);
        }
    }
}
