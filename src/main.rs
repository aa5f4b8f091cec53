//! Windowball entry point
//!
//! The physics core is headless; wiring it to a real OS window (moving the
//! window from its own velocity, reading drag events off the title bar) is
//! platform glue that lives outside this crate's scope. The native binary
//! runs the simulation against a virtual desktop for a few seconds and logs
//! what a renderer would draw.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use windowball::consts::DEMO_DT;
use windowball::scene::Scene;
use windowball::sim::{Movable, SimState, TickInput, tick};
use windowball::Config;

/// Virtual desktop for the headless demo
const DESKTOP: Vec2 = Vec2::new(1920.0, 1080.0);

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = env::args().nth(1).unwrap_or_else(|| "config.cfg".into());
    let config = Config::load(&config_path)?;
    log::info!(
        "windowball: {}x{} window, {} ball(s), bounciness {} / {}",
        config.width,
        config.height,
        config.ball_count,
        config.ball_bounciness,
        config.window_bounciness
    );

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = SimState::new(&config, DESKTOP, seed);

    // Scripted demo: release the window, fling it, and let everything settle
    tick(
        &mut state,
        &TickInput {
            freeze_released: true,
            ..Default::default()
        },
        DEMO_DT,
    );
    state.window.set_velocity(Vec2::new(450.0, -250.0));

    let frames = (10.0 / DEMO_DT) as u32;
    for frame in 0..frames {
        tick(&mut state, &TickInput::default(), DEMO_DT);

        if frame % 60 == 0 {
            let scene = Scene::capture(&state);
            log::info!(
                "t={:5.2}s window at ({:6.1}, {:6.1}) vel ({:7.1}, {:7.1})",
                state.time,
                scene.window_position.x,
                scene.window_position.y,
                state.window.velocity().x,
                state.window.velocity().y,
            );
            for sprite in &scene.balls {
                log::debug!(
                    "  ball r={} at local ({:6.1}, {:6.1})",
                    sprite.radius,
                    sprite.position.x,
                    sprite.position.y
                );
            }
        }
    }

    let final_scene = Scene::capture(&state);
    println!("{}", serde_json::to_string_pretty(&final_scene)?);

    Ok(())
}
