//! Ball body
//!
//! A ball lives in the window's local coordinate frame (that is what the
//! rendering surface wants) but its visual continuity is anchored to an
//! absolute screen position. Every unfrozen update first re-derives the local
//! position from that anchor against the window's current screen position, so
//! a moving window slides underneath the ball instead of carrying it along.
//!
//! The window back-reference is a borrowed parameter on each operation; the
//! window must outlive all balls, which `SimState` guarantees by owning both.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::motion::Movable;
use super::window::WindowBody;
use crate::consts::{GRAVITY, PUSH_FACTOR};

/// A circular body bouncing inside the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub radius: f32,
    /// Center, in the window's local frame
    pub position: Vec2,
    velocity: Vec2,
    frozen: bool,
    /// Absolute screen position recorded at the end of the previous update
    last_screen_position: Vec2,
    bounciness: f32,
    /// Render-only fill color
    pub color: [u8; 3],
}

impl Ball {
    /// Balls start frozen, like the window; callers unfreeze them once the
    /// window exists and the anchor can be taken.
    pub fn new(id: u32, radius: f32, position: Vec2, bounciness: f32, color: [u8; 3]) -> Self {
        Self {
            id,
            radius,
            position,
            velocity: Vec2::ZERO,
            frozen: true,
            last_screen_position: position,
            bounciness,
            color,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Freeze or unfreeze. Unfreezing re-takes the screen anchor so the first
    /// unfrozen update does not jump to a stale position. Unlike the window,
    /// a frozen ball keeps its velocity and resumes with it.
    pub fn set_frozen(&mut self, frozen: bool, window: &WindowBody) {
        self.frozen = frozen;
        if !frozen {
            self.last_screen_position = self.screen_position(window);
        }
    }

    /// Absolute screen position of the center.
    pub fn screen_position(&self, window: &WindowBody) -> Vec2 {
        window.position + self.position
    }

    fn set_screen_position(&mut self, window: &WindowBody, screen: Vec2) {
        self.position = screen - window.position;
    }

    /// External hook: the frame driver calls this for every ball whenever the
    /// window moved, before any updates run.
    pub fn reset_screen_anchor(&mut self, window: &WindowBody) {
        self.last_screen_position = self.screen_position(window);
    }

    /// First half of the per-frame update: re-anchor to screen space, then
    /// integrate velocity. Returns false for a frozen ball, which is fully
    /// inert. The registry runs the pair scan between this and [`settle`].
    ///
    /// [`settle`]: Ball::settle
    pub(super) fn integrate(&mut self, dt: f32, window: &WindowBody) -> bool {
        if self.frozen {
            return false;
        }

        // Re-anchor before integration so a moving window imparts no
        // spurious relative velocity.
        self.set_screen_position(window, self.last_screen_position);
        self.position += self.velocity * dt;
        true
    }

    /// Second half of the per-frame update: gravity, interior boundary
    /// response, the boundary push impulse, and the anchor record. Must only
    /// run after [`integrate`] returned true this frame.
    ///
    /// [`integrate`]: Ball::integrate
    pub(super) fn settle(&mut self, dt: f32, window: &WindowBody) {
        self.velocity.y += GRAVITY * dt;

        // How far the window's interior shoved the ball back in
        let mut displacement_by_window = Vec2::ZERO;
        if self.position.x < self.radius {
            displacement_by_window.x += self.radius - self.position.x;
            self.position.x = self.radius;
            self.velocity.x = self.velocity.x.abs() * self.bounciness;
        } else if self.position.x > window.size.x - self.radius {
            displacement_by_window.x += (window.size.x - self.radius) - self.position.x;
            self.position.x = window.size.x - self.radius;
            self.velocity.x = -self.velocity.x.abs() * self.bounciness;
        }
        if self.position.y < self.radius {
            displacement_by_window.y += self.radius - self.position.y;
            self.position.y = self.radius;
            self.velocity.y = self.velocity.y.abs() * self.bounciness;
        } else if self.position.y > window.size.y - self.radius {
            displacement_by_window.y += (window.size.y - self.radius) - self.position.y;
            self.position.y = window.size.y - self.radius;
            self.velocity.y = -self.velocity.y.abs() * self.bounciness;
        }

        self.velocity += displacement_by_window * PUSH_FACTOR;

        self.last_screen_position = self.screen_position(window);
    }

    /// Advance a lone ball by one frame (no sibling collisions). The registry
    /// interleaves the pair scan between the two halves instead.
    pub fn update(&mut self, dt: f32, window: &WindowBody) {
        if self.integrate(dt, window) {
            self.settle(dt, window);
        }
    }
}

impl Movable for Ball {
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}
