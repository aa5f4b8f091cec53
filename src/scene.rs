//! Per-frame render snapshot
//!
//! Read-only view of the simulation for whatever draws it: the window's
//! screen rect and one sprite per ball. No physics feedback flows back
//! through this path.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::SimState;

/// Window interior clear color
pub const CLEAR_COLOR: [u8; 3] = [30, 30, 30];

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BallSprite {
    /// Center in the window's local frame
    pub position: Vec2,
    pub radius: f32,
    pub color: [u8; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Window top-left in screen space
    pub window_position: Vec2,
    pub window_size: Vec2,
    pub clear_color: [u8; 3],
    pub balls: Vec<BallSprite>,
}

impl Scene {
    pub fn capture(state: &SimState) -> Self {
        Self {
            window_position: state.window.position,
            window_size: state.window.size,
            clear_color: CLEAR_COLOR,
            balls: state
                .balls
                .iter()
                .map(|b| BallSprite {
                    position: b.position,
                    radius: b.radius,
                    color: b.color,
                })
                .collect(),
        }
    }
}
