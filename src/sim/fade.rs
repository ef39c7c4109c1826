//! Game over fade-out, counted in frames

use crate::consts::{FADE_STEP_MS, FADE_STEPS, FRAME_MS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeState {
    /// Still fading; alpha of the outgoing scene
    Fading(f32),
    /// The fade finished on this frame
    Finished,
    /// Already finished earlier
    Done,
}

/// A fixed number of equal alpha decrements spaced `FADE_STEP_MS` apart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadeOut {
    steps_left: u32,
    elapsed_ms: u32,
}

impl Default for FadeOut {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeOut {
    pub fn new() -> Self {
        Self {
            steps_left: FADE_STEPS,
            elapsed_ms: 0,
        }
    }

    /// Alpha of the outgoing scene, 1.0 down to 0.0
    pub fn alpha(&self) -> f32 {
        self.steps_left as f32 / FADE_STEPS as f32
    }

    pub fn is_done(&self) -> bool {
        self.steps_left == 0
    }

    pub fn on_frame(&mut self) -> FadeState {
        if self.is_done() {
            return FadeState::Done;
        }

        self.elapsed_ms += FRAME_MS;
        if self.elapsed_ms >= FADE_STEP_MS {
            self.elapsed_ms -= FADE_STEP_MS;
            self.steps_left -= 1;
            if self.is_done() {
                return FadeState::Finished;
            }
        }
        FadeState::Fading(self.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_finishes_once() {
        let mut fade = FadeOut::new();
        assert_eq!(fade.alpha(), 1.0);

        let frames_total = FADE_STEPS * FADE_STEP_MS / FRAME_MS;
        let mut finished = 0;
        let mut last_alpha = 1.0;
        for frame in 1..=frames_total {
            match fade.on_frame() {
                FadeState::Fading(alpha) => {
                    assert!(alpha <= last_alpha);
                    last_alpha = alpha;
                }
                FadeState::Finished => {
                    finished += 1;
                    assert_eq!(frame, frames_total);
                }
                FadeState::Done => panic!("fade ended early"),
            }
        }
        assert_eq!(finished, 1);
        assert_eq!(fade.on_frame(), FadeState::Done);
        assert_eq!(fade.alpha(), 0.0);
    }

    #[test]
    fn test_fade_decrements_evenly() {
        let mut fade = FadeOut::new();
        let frames_per_step = FADE_STEP_MS / FRAME_MS;
        for _ in 0..frames_per_step {
            fade.on_frame();
        }
        assert_eq!(fade.alpha(), (FADE_STEPS - 1) as f32 / FADE_STEPS as f32);
    }
}
