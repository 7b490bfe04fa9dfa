//! Headless surface: logs frames instead of drawing them

use super::{FrameView, RenderSurface};
use crate::sim::GamePhase;

/// Counts presented frames and logs each one at trace level
#[derive(Debug, Default)]
pub struct TraceSurface {
    pub frames: u64,
    pub last_score: u64,
    pub last_phase: Option<GamePhase>,
}

impl TraceSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for TraceSurface {
    fn present(&mut self, frame: &FrameView<'_>) {
        self.frames += 1;
        self.last_score = frame.score;
        self.last_phase = Some(frame.phase);
        log::trace!(
            "frame {}: bird y={:.2} vel={:.2} wing={} obstacles={} score={} {:?}",
            self.frames,
            frame.actor.pos.y,
            frame.actor.vel,
            frame.anim_frame,
            frame.obstacles.len(),
            frame.score,
            frame.phase
        );
    }
}
