//! Rendering hand-off
//!
//! The simulation never draws. Each frame the driver builds a [`FrameView`]
//! from the state and gives it to a [`RenderSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod trace;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use trace::TraceSurface;

use crate::sim::{Actor, GamePhase, GameState, ObstacleField};
use crate::tuning::Tuning;

/// Everything a surface needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub actor: &'a Actor,
    /// Wing animation frame (0..3)
    pub anim_frame: usize,
    pub obstacles: &'a ObstacleField,
    pub score: u64,
    pub phase: GamePhase,
    pub tuning: &'a Tuning,
}

impl<'a> FrameView<'a> {
    pub fn from_state(state: &'a GameState) -> Self {
        Self {
            actor: &state.actor,
            anim_frame: state.anim_frame(),
            obstacles: &state.field,
            score: state.score,
            phase: state.phase,
            tuning: &state.tuning,
        }
    }
}

/// Something that can show a frame
pub trait RenderSurface {
    fn present(&mut self, frame: &FrameView<'_>);
}
