//! Per-frame driver
//!
//! Translates input edges into freeze/drag commands and advances the bodies
//! in the load-bearing order: input, brake, re-anchor (only if the window
//! moved since the end of its last update, i.e. it was repositioned
//! externally), window update, then every ball in registry order.
//!
//! Window movement produced by the window's own physics happens inside
//! `WindowBody::update`, after the re-anchor check; each ball then re-derives
//! its local position from its screen anchor against the window's new
//! position, which is what keeps balls visually pinned to screen space while
//! the window is in flight. An external reposition (the user dragging the
//! title bar) instead refreshes the anchors, so the balls ride along.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::motion::Movable;
use super::registry::BallRegistry;
use super::window::{DesktopBounds, WindowBody};
use crate::config::Config;
use crate::consts::DRAG_IMPULSE_FACTOR;

/// Ball fill colors, assigned round-robin-by-rng at spawn
const PALETTE: [[u8; 3]; 5] = [
    [200, 200, 0],
    [0, 180, 200],
    [220, 90, 60],
    [120, 200, 80],
    [190, 110, 220],
];

/// Input edges and levels for a single frame, produced by the platform glue.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Shift pressed this frame: freeze the window and every ball
    pub freeze_pressed: bool,
    /// Shift released this frame: unfreeze, unless a drag is active
    pub freeze_released: bool,
    /// Left mouse pressed at this screen position: begin a drag
    pub drag_started: Option<Vec2>,
    /// Left mouse released at this screen position: end the drag and fling
    /// the window
    pub drag_ended: Option<Vec2>,
    /// Space held: continuously zero the window's velocity
    pub brake: bool,
}

/// Complete simulation state. Owns the window and the registry, which pins
/// the window's lifetime over every ball.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub window: WindowBody,
    pub balls: BallRegistry,
    pub bounds: DesktopBounds,
    dragging: bool,
    drag_origin: Vec2,
    /// Elapsed simulated time, seconds
    pub time: f32,
}

impl SimState {
    /// Build the toy: the window centered in the desktop bounds (frozen, as
    /// at startup), `ball_count` balls scattered over its interior with a
    /// seeded RNG. Balls start unfrozen.
    pub fn new(config: &Config, desktop_size: Vec2, seed: u64) -> Self {
        let bounds = DesktopBounds::new(desktop_size);
        let size = Vec2::new(config.width as f32, config.height as f32);
        let position = bounds.min + (bounds.size() - size) * 0.5;
        let window = WindowBody::new(position, size, config.window_bounciness);

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut balls = BallRegistry::new();
        for _ in 0..config.ball_count {
            let position = scatter_position(&mut rng, &balls, config.ball_radius, size);
            let color = PALETTE[rng.random_range(0..PALETTE.len())];
            balls.spawn(config.ball_radius, position, config.ball_bounciness, color);
        }
        balls.set_frozen_all(false, &window);

        Self {
            window,
            balls,
            bounds,
            dragging: false,
            drag_origin: Vec2::ZERO,
            time: 0.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Pick a spawn position inside the window interior, rejecting overlaps with
/// already-placed balls for a bounded number of attempts.
fn scatter_position(
    rng: &mut Pcg32,
    placed: &BallRegistry,
    radius: f32,
    window_size: Vec2,
) -> Vec2 {
    let range = |extent: f32| {
        if extent > 2.0 * radius {
            (radius, extent - radius)
        } else {
            (extent / 2.0, extent / 2.0)
        }
    };
    let (x_lo, x_hi) = range(window_size.x);
    let (y_lo, y_hi) = range(window_size.y);

    let mut candidate = Vec2::new(x_lo, y_lo);
    for _ in 0..64 {
        candidate = Vec2::new(
            rng.random_range(x_lo..=x_hi),
            rng.random_range(y_lo..=y_hi),
        );
        let clear = placed.iter().all(|b| {
            !super::collision::is_colliding(candidate, radius, b.position, b.radius)
        });
        if clear {
            return candidate;
        }
    }
    // Crowded window: the last candidate is accepted overlapping; the pair
    // scan separates them on the first frame
    candidate
}

/// Advance the whole toy by one frame.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    if input.freeze_pressed && !state.dragging {
        state.window.set_frozen(true);
        state.balls.set_frozen_all(true, &state.window);
    }
    if input.freeze_released && !state.dragging {
        state.window.set_frozen(false);
        state.balls.set_frozen_all(false, &state.window);
    }
    if let Some(press) = input.drag_started {
        state.dragging = true;
        state.drag_origin = press;
        state.window.set_frozen(true);
    }
    if let Some(release) = input.drag_ended {
        state.dragging = false;
        state.window.set_frozen(false);
        state.balls.set_frozen_all(false, &state.window);
        state
            .window
            .set_velocity((release - state.drag_origin) * DRAG_IMPULSE_FACTOR);
    }

    if input.brake {
        state.window.set_velocity(Vec2::ZERO);
    }

    // Only an external reposition trips this; the window's own physics
    // records last_position at the end of its update.
    if state.window.has_moved() {
        state.balls.reanchor_all(&state.window);
    }

    state.window.update(dt, &state.bounds);
    state.balls.update_all(dt, &state.window);

    state.time += dt;
}
