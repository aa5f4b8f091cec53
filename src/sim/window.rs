//! The window as a physics body
//!
//! The application window is itself simulated: it integrates velocity, falls
//! under gravity and bounces off the desktop's visible bounds. Its position
//! and size mirror what the windowing surface reports; the headless core
//! keeps its own copy.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::motion::Movable;
use crate::consts::{GRAVITY, MENU_BAR_INSET};

/// The desktop's visible area, the region the window bounces inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesktopBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl DesktopBounds {
    /// Bounds for a desktop of the given size, with the platform's persistent
    /// menu bar (if any) subtracted from the top.
    pub fn new(desktop_size: Vec2) -> Self {
        Self {
            min: Vec2::new(0.0, MENU_BAR_INSET),
            max: desktop_size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// A movable rectangular region representing the application window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowBody {
    /// Top-left corner in screen space
    pub position: Vec2,
    pub size: Vec2,
    velocity: Vec2,
    frozen: bool,
    /// Screen position recorded at the end of the previous update, used only
    /// to answer "did the window move this frame"
    last_position: Vec2,
    bounciness: f32,
}

impl WindowBody {
    /// A window starts frozen; it is released by the first unfreeze or
    /// drag-release command.
    pub fn new(position: Vec2, size: Vec2, bounciness: f32) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            frozen: true,
            last_position: position,
            bounciness,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    /// True iff the position changed since the end of the previous update.
    pub fn has_moved(&self) -> bool {
        self.position != self.last_position
    }

    /// Advance the window by one frame.
    ///
    /// Position integrates with the previous frame's gravity-advanced
    /// velocity; gravity is added after. A frozen window has its velocity
    /// re-zeroed every frame rather than once. `last_position` is recorded
    /// unconditionally at the end.
    pub fn update(&mut self, dt: f32, bounds: &DesktopBounds) {
        if !self.frozen {
            self.position += self.velocity * dt;

            self.velocity.y += GRAVITY * dt;

            if self.position.x < bounds.min.x {
                self.position.x = bounds.min.x;
                self.velocity.x = self.velocity.x.abs() * self.bounciness;
            } else if self.position.x > bounds.max.x - self.size.x {
                self.position.x = bounds.max.x - self.size.x;
                self.velocity.x = -self.velocity.x.abs() * self.bounciness;
            }
            if self.position.y <= bounds.min.y {
                // No clamp: the window may sit exactly at the top inset
                self.velocity.y = self.velocity.y.abs() * self.bounciness;
            } else if self.position.y > bounds.max.y - self.size.y {
                self.position.y = bounds.max.y - self.size.y;
                self.velocity.y = -self.velocity.y.abs() * self.bounciness;
            }
        } else {
            self.velocity = Vec2::ZERO;
        }

        self.last_position = self.position;
    }
}

impl Movable for WindowBody {
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> DesktopBounds {
        DesktopBounds {
            min: Vec2::ZERO,
            max: Vec2::new(1920.0, 1080.0),
        }
    }

    fn free_window(position: Vec2) -> WindowBody {
        let mut w = WindowBody::new(position, Vec2::new(800.0, 600.0), 0.85);
        w.set_frozen(false);
        w
    }

    #[test]
    fn gravity_adds_exactly_per_update() {
        let mut w = free_window(Vec2::new(100.0, 100.0));
        let dt = 1.0 / 60.0;
        w.update(dt, &bounds());
        assert_eq!(w.velocity().y, 800.0 * dt);
        w.update(dt, &bounds());
        assert_eq!(w.velocity().y, 2.0 * 800.0 * dt);
    }

    #[test]
    fn position_integrates_before_gravity() {
        // First update must not move the window: velocity is still zero when
        // the position integrates.
        let mut w = free_window(Vec2::new(100.0, 100.0));
        w.update(1.0 / 60.0, &bounds());
        assert_eq!(w.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn frozen_window_holds_position_and_rezeroes_velocity() {
        let mut w = WindowBody::new(Vec2::new(100.0, 100.0), Vec2::new(800.0, 600.0), 0.85);
        w.set_velocity(Vec2::new(50.0, -30.0));
        for _ in 0..10 {
            w.update(1.0 / 60.0, &bounds());
            assert_eq!(w.position, Vec2::new(100.0, 100.0));
            assert_eq!(w.velocity(), Vec2::ZERO);
        }
    }

    #[test]
    fn frozen_velocity_rezeroed_every_frame_not_sticky() {
        let mut w = WindowBody::new(Vec2::new(100.0, 100.0), Vec2::new(800.0, 600.0), 0.85);
        w.update(1.0 / 60.0, &bounds());
        // An external impulse between frozen frames is wiped again next frame
        w.add_velocity(Vec2::new(10.0, 0.0));
        w.update(1.0 / 60.0, &bounds());
        assert_eq!(w.velocity(), Vec2::ZERO);
    }

    #[test]
    fn left_edge_clamps_and_reflects() {
        let mut w = free_window(Vec2::new(1.0, 500.0));
        w.set_velocity(Vec2::new(-300.0, 0.0));
        w.update(1.0 / 60.0, &bounds());
        assert_eq!(w.position.x, 0.0);
        assert_eq!(w.velocity().x, 300.0 * 0.85);
    }

    #[test]
    fn right_edge_clamps_and_reflects() {
        let b = bounds();
        let mut w = free_window(Vec2::new(b.max.x - 800.0 - 1.0, 500.0));
        w.set_velocity(Vec2::new(300.0, 0.0));
        w.update(1.0 / 60.0, &b);
        assert_eq!(w.position.x, b.max.x - 800.0);
        assert_eq!(w.velocity().x, -300.0 * 0.85);
    }

    #[test]
    fn top_edge_reflects_without_clamping() {
        let mut w = free_window(Vec2::new(100.0, 0.0));
        w.set_velocity(Vec2::new(0.0, -300.0));
        let dt = 1.0 / 60.0;
        w.update(dt, &bounds());
        // Position crossed above the bound and is left there
        assert!(w.position.y < 0.0);
        // Gravity lands before the boundary check, then the reflection
        assert_eq!(w.velocity().y, (-300.0_f32 + 800.0 * dt).abs() * 0.85);
    }

    #[test]
    fn top_edge_touching_counts() {
        // Sitting exactly at the inset still reflects (<= comparison)
        let mut w = free_window(Vec2::new(100.0, 0.0));
        w.set_velocity(Vec2::new(0.0, 0.0));
        let dt = 1.0 / 60.0;
        w.update(dt, &bounds());
        // The frame's gravity is reflected too; the window hangs at the top
        assert_eq!(w.velocity().y, 800.0 * dt * 0.85);
    }

    #[test]
    fn bottom_edge_clamps_and_reflects() {
        let b = bounds();
        let mut w = free_window(Vec2::new(100.0, b.max.y - 600.0 - 1.0));
        w.set_velocity(Vec2::new(0.0, 300.0));
        let dt = 1.0 / 60.0;
        w.update(dt, &b);
        assert_eq!(w.position.y, b.max.y - 600.0);
        assert_eq!(w.velocity().y, -(300.0 + 800.0 * dt).abs() * 0.85);
    }

    #[test]
    fn has_moved_reflects_external_repositioning() {
        let mut w = free_window(Vec2::new(100.0, 100.0));
        w.update(1.0 / 60.0, &bounds());
        assert!(!w.has_moved());
        // A drag moves the window between updates
        w.position += Vec2::new(5.0, 0.0);
        assert!(w.has_moved());
        w.update(1.0 / 60.0, &bounds());
        assert!(!w.has_moved());
    }

    #[test]
    fn last_position_recorded_even_when_frozen() {
        let mut w = WindowBody::new(Vec2::new(100.0, 100.0), Vec2::new(800.0, 600.0), 0.85);
        w.position = Vec2::new(150.0, 100.0);
        assert!(w.has_moved());
        w.update(1.0 / 60.0, &bounds());
        assert!(!w.has_moved());
    }
}
