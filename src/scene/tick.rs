//! Per-frame scene update
//!
//! Called once per rendered frame by the frame driver, before physics
//! integration.

use glam::Vec2;

use super::collision::ship_hits_invader;
use super::direction::FormationDirection;
use super::state::{SceneEvent, SceneState};
use crate::consts::*;
use crate::motion::MotionSource;

/// Frame entry point. `current_time` is absolute, in seconds.
pub fn update(scene: &mut SceneState, motion: &dyn MotionSource, current_time: f64) -> Vec<SceneEvent> {
    let events = process_user_motion(scene, motion);

    if scene.settings.formation_movement {
        move_invaders(scene, current_time);
    }

    events
}

/// Step the formation once per `TIME_PER_MOVE`
///
/// Between steps only the direction is re-evaluated.
pub fn move_invaders(scene: &mut SceneState, current_time: f64) {
    if current_time - scene.time_of_last_move < TIME_PER_MOVE {
        scene.determine_invader_direction();
        return;
    }

    let step = match scene.direction {
        FormationDirection::Right => Vec2::new(INVADER_STEP, 0.0),
        FormationDirection::Left => Vec2::new(-INVADER_STEP, 0.0),
        FormationDirection::DownThenLeft | FormationDirection::DownThenRight => {
            Vec2::new(0.0, -INVADER_STEP)
        }
        FormationDirection::None => Vec2::ZERO,
    };

    for node in scene.graph.nodes_named_mut(INVADER_TAG) {
        node.pos += step;
        scene.time_of_last_move = current_time;
    }
}

/// Tilt-driven ship force plus ship/invader overlap
///
/// No-op without a ship or before the first sample. Below the deadzone
/// neither the force nor the overlap test runs.
pub fn process_user_motion(scene: &mut SceneState, motion: &dyn MotionSource) -> Vec<SceneEvent> {
    let mut events = Vec::new();

    let Some(ship_id) = scene.graph.child_named(SHIP_NAME) else {
        return events;
    };
    let Some(accel) = motion.latest() else {
        return events;
    };

    if accel.x.abs() > TILT_DEADZONE {
        let Some(ship) = scene.graph.get_mut(ship_id) else {
            return events;
        };
        if let Some(body) = ship.body.as_mut() {
            body.apply_force(Vec2::new(TILT_FORCE_GAIN * accel.x, TILT_FORCE_GAIN * accel.y));
        }
        let ship_pos = ship.pos;

        // Hidden invaders are still tested; hiding again is harmless
        for &id in &scene.invaders {
            let Some(invader) = scene.graph.get_mut(id) else {
                continue;
            };
            if ship_hits_invader(ship_pos, invader.pos) {
                log::warn!("GAME OVER: ship hit invader {:?}", id);
                invader.hidden = true;
                events.push(SceneEvent::GameOver { invader: id });
            }
        }
    }

    log::debug!("Acceleration: {}", accel.x);

    events
}
