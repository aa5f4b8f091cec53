//! Windowball - a desktop physics toy
//!
//! The application window itself is a physics body: it falls under gravity and
//! bounces off the edges of the desktop. Inside it, circular balls fall,
//! bounce off the window's interior, and collide with each other. While the
//! window is in flight the balls stay visually pinned to screen space, so the
//! window appears to slide underneath them.
//!
//! Core modules:
//! - `sim`: Deterministic headless simulation (bodies, collisions, frame tick)
//! - `config`: `key=value` configuration file loader
//! - `scene`: Read-only per-frame snapshot for renderers

pub mod config;
pub mod scene;
pub mod sim;

pub use config::{Config, ConfigError};
pub use scene::Scene;

/// Physics and platform constants
pub mod consts {
    /// Gravitational acceleration, units/s² (+y is down)
    pub const GRAVITY: f32 = 800.0;

    /// Extra impulse per unit of boundary displacement. When the window's
    /// interior shoves a ball back in, the ball is kicked harder than a plain
    /// reflection would.
    pub const PUSH_FACTOR: f32 = 3.0;

    /// Window velocity per unit of drag displacement on mouse release
    pub const DRAG_IMPULSE_FACTOR: f32 = 3.0;

    /// Top inset of the desktop's visible bounds where a persistent menu bar
    /// occupies the screen edge
    #[cfg(target_os = "macos")]
    pub const MENU_BAR_INSET: f32 = 88.0;
    #[cfg(not(target_os = "macos"))]
    pub const MENU_BAR_INSET: f32 = 0.0;

    /// Simulation rate of the headless demo loop
    pub const DEMO_DT: f32 = 1.0 / 60.0;
}
