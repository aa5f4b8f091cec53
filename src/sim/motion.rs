//! Shared motion capability
//!
//! Every simulated body owns exactly one velocity vector. The original design
//! mixed this into a deep inheritance stack; here it is a plain trait over a
//! composed field.

use glam::Vec2;

/// Velocity accessors shared by every simulated body.
///
/// Exactly three operations: read, overwrite, accumulate. `add_velocity` is
/// what drag-release impulses use.
pub trait Movable {
    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);

    fn add_velocity(&mut self, velocity: Vec2) {
        let v = self.velocity();
        self.set_velocity(v + velocity);
    }
}
