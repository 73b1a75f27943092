//! SK Invaders entry point
//!
//! Runs the scene headless: a scripted tilt stands in for the accelerometer
//! and a fixed timestep stands in for the display link.

use sk_invaders::scene::{SceneEvent, SceneState, update};
use sk_invaders::{MotionSource, ScriptedMotion, Settings};

/// Frames to simulate (10 seconds at 60 Hz)
const DEMO_FRAMES: usize = 600;

fn main() {
    env_logger::init();
    log::info!("SK Invaders (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(&path).unwrap_or_else(|e| {
            log::warn!("Using default settings ({path}): {e}");
            Settings::default()
        }),
        None => Settings::default(),
    };
    let dt = settings.fixed_dt;

    let mut motion = ScriptedMotion::rocking(DEMO_FRAMES, 240, 0.6);
    let mut scene = SceneState::new(settings);
    scene.did_move_to_view(&mut motion);

    let mut game_overs = 0usize;
    for frame in 0..DEMO_FRAMES {
        motion.advance();
        let time = frame as f64 * dt as f64;
        for event in update(&mut scene, &motion, time) {
            match event {
                SceneEvent::GameOver { .. } => game_overs += 1,
            }
        }
        scene.step_physics(dt);
    }

    if let Some(ship) = scene.ship() {
        log::info!("Ship finished at ({:.1}, {:.1})", ship.pos.x, ship.pos.y);
    }
    log::info!(
        "{} of {} invaders hidden, {} game-over hits, formation heading {:?}",
        scene.hidden_invader_count(),
        scene.invaders.len(),
        game_overs,
        scene.direction
    );
    if motion.latest().is_none() {
        log::warn!("No motion samples were delivered");
    }
}
