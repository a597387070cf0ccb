use crate::entity::EntityError;
use serde::{Deserialize, Serialize};

/// How a frame sequence behaves once state time passes the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayMode {
    /// Clamp on the last frame and report finished.
    Once,
    /// Wrap around to the first frame.
    Loop,
    /// Bounce back and forth without repeating the end frames.
    PingPong,
}

impl Default for PlayMode {
    fn default() -> Self {
        PlayMode::Loop
    }
}

/// Playback policy for an entity's frame sequence: a fixed per-frame
/// duration plus a play mode. The entity owns the frames and the
/// accumulated state time; the animation just resolves which index is
/// active, so it carries no mutable state of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    frame_duration: f32,
    mode: PlayMode,
}

impl Animation {
    pub fn new(frame_duration: f32, mode: PlayMode) -> Result<Self, EntityError> {
        if frame_duration <= 0.0 {
            return Err(EntityError::NonPositiveFrameDuration(frame_duration));
        }
        Ok(Animation {
            frame_duration,
            mode,
        })
    }

    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    /// Resolves the active frame index for the given state time.
    pub fn frame_index(&self, state_time: f32, frame_count: usize) -> usize {
        if frame_count <= 1 {
            return 0;
        }
        let step = (state_time / self.frame_duration) as usize;
        match self.mode {
            PlayMode::Once => step.min(frame_count - 1),
            PlayMode::Loop => step % frame_count,
            PlayMode::PingPong => {
                // A full bounce visits 2n-2 steps: 0..n-1 then n-2..1.
                let period = 2 * frame_count - 2;
                let k = step % period;
                if k < frame_count {
                    k
                } else {
                    period - k
                }
            }
        }
    }

    /// True only for `Once` playback that has run past its last frame.
    pub fn is_finished(&self, state_time: f32, frame_count: usize) -> bool {
        self.mode == PlayMode::Once && state_time >= self.frame_duration * frame_count as f32
    }
}
