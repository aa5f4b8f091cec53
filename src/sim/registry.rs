//! Ball registry
//!
//! Owns every ball in an index-stable container. Insertion order defines the
//! collision-scan order and each ball's identity; the original used a
//! process-wide self-registering list, replaced here by explicit ownership
//! with `spawn` returning the new ball's id.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::{is_colliding, separate};
use super::motion::Movable;
use super::window::WindowBody;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BallRegistry {
    balls: Vec<Ball>,
    next_id: u32,
}

impl BallRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ball and return its id. Ids are sequential and never reused.
    pub fn spawn(
        &mut self,
        radius: f32,
        position: Vec2,
        bounciness: f32,
        color: [u8; 3],
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.balls.push(Ball::new(id, radius, position, bounciness, color));
        id
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Ball> {
        self.balls.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Ball> {
        self.balls.get_mut(index)
    }

    /// Freeze or unfreeze every ball.
    pub fn set_frozen_all(&mut self, frozen: bool, window: &WindowBody) {
        for ball in &mut self.balls {
            ball.set_frozen(frozen, window);
        }
    }

    /// Re-take every ball's screen anchor. The frame driver calls this before
    /// any updates whenever the window moved since the last frame.
    pub fn reanchor_all(&mut self, window: &WindowBody) {
        for ball in &mut self.balls {
            ball.reset_screen_anchor(window);
        }
    }

    /// Advance every ball by one frame, in registry order.
    ///
    /// Each ball re-anchors and integrates, then runs a forward pair scan
    /// (`j > i`) over the other active balls, so every unordered pair is
    /// resolved at most once per frame, then takes gravity, the interior
    /// bounce and the anchor record. A swapped velocity is visible to later
    /// pairs within the same scan. Frozen balls take no part in the scan
    /// from either side.
    pub fn update_all(&mut self, dt: f32, window: &WindowBody) {
        for i in 0..self.balls.len() {
            if !self.balls[i].integrate(dt, window) {
                continue;
            }

            for j in (i + 1)..self.balls.len() {
                if self.balls[j].is_frozen() {
                    continue;
                }
                let (a_pos, a_radius) = (self.balls[i].position, self.balls[i].radius);
                let (b_pos, b_radius) = (self.balls[j].position, self.balls[j].radius);
                if is_colliding(a_pos, a_radius, b_pos, b_radius) {
                    self.balls[i].position = separate(a_pos, a_radius, b_pos, b_radius);
                    let va = self.balls[i].velocity();
                    let vb = self.balls[j].velocity();
                    self.balls[i].set_velocity(vb);
                    self.balls[j].set_velocity(va);
                }
            }

            self.balls[i].settle(dt, window);
        }
    }
}
