use sha2::{Digest, Sha256};

use crate::replay::{Transcript, TranscriptEvent};
use crate::types::{SurfaceSize, Toggles};

const TAG_STEP: u8 = 0;
const TAG_TOGGLES: u8 = 1;
const TAG_RESIZE: u8 = 2;

/// SHA-256 digest of a session transcript: starting surface, then every
/// event in order.
pub fn hash_transcript(transcript: &Transcript) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hash_surface(&mut hasher, transcript.surface);
    for event in &transcript.events {
        match event {
            TranscriptEvent::Step { dt, input } => {
                hasher.update([TAG_STEP]);
                hasher.update(dt.to_le_bytes());
                for player in input {
                    hasher.update([player.buttons]);
                }
            }
            TranscriptEvent::Toggles { toggles } => {
                hasher.update([TAG_TOGGLES, toggle_bits(toggles)]);
            }
            TranscriptEvent::Resize { surface } => {
                hasher.update([TAG_RESIZE]);
                hash_surface(&mut hasher, *surface);
            }
        }
    }
    hasher.finalize().into()
}

fn hash_surface(hasher: &mut Sha256, surface: SurfaceSize) {
    hasher.update(surface.width.to_le_bytes());
    hasher.update(surface.height.to_le_bytes());
}

fn toggle_bits(t: &Toggles) -> u8 {
    (t.is_fake_opponent as u8)
        | (t.is_gravity as u8) << 1
        | (t.is_hitboxes as u8) << 2
        | (t.is_collisions as u8) << 3
}
