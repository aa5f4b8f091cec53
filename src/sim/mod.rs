//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and headless:
//! - No rendering or platform dependencies
//! - Seeded RNG only (ball scatter at startup)
//! - Stable iteration order (registry insertion order)
//!
//! The per-frame ordering is load-bearing: input edges, brake, re-anchor
//! (only if the window moved last frame), window update, then every ball in
//! registry order. See [`tick::tick`].

pub mod ball;
pub mod collision;
pub mod motion;
pub mod registry;
pub mod tick;
pub mod window;

pub use ball::Ball;
pub use collision::{is_colliding, separate};
pub use motion::Movable;
pub use registry::BallRegistry;
pub use tick::{SimState, TickInput, tick};
pub use window::{DesktopBounds, WindowBody};
