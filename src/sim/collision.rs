//! Ball-ball collision detection and resolution
//!
//! Circle-circle overlap via squared distance, resolved by repositioning one
//! ball on the center line at the sum of the radii and swapping the two full
//! velocity vectors. The swap is an idealized equal-mass elastic exchange,
//! not the general elastic-collision formula.

use glam::Vec2;

/// Strict circle-circle overlap test. Touching circles do not count.
#[inline]
pub fn is_colliding(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let sum = a_radius + b_radius;
    a_pos.distance_squared(b_pos) < sum * sum
}

/// Position for `a` that puts the two centers at exactly `a_radius +
/// b_radius` apart, along the line from `a` toward `b`. Separation, not
/// impulse-based interpenetration correction.
#[inline]
pub fn separate(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> Vec2 {
    let to_other = b_pos - a_pos;
    let angle = to_other.y.atan2(to_other.x);
    b_pos - Vec2::new(angle.cos(), angle.sin()) * (a_radius + b_radius)
}
