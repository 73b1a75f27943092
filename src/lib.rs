//! SK Invaders - a tilt-controlled invaders scene
//!
//! Core modules:
//! - `scene`: Gameplay state and per-frame update (spawning, formation, ship motion)
//! - `motion`: Accelerometer abstraction (latest-sample-wins)
//! - `settings`: Data-driven scene configuration

pub mod motion;
pub mod scene;
pub mod settings;

pub use motion::{LatestSample, MotionSource, ScriptedMotion};
pub use settings::{Settings, SettingsError, SpawnLayout};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Invader sprite size (logical units)
    pub const INVADER_SIZE: Vec2 = Vec2::new(24.0, 16.0);
    /// Tag shared by every invader node
    pub const INVADER_TAG: &str = "invader";
    /// Invaders scattered over the viewport at scene start
    pub const RANDOM_INVADER_COUNT: usize = 20;

    /// Grid layout (alternate spawn path)
    pub const INVADER_GRID_SPACING: Vec2 = Vec2::new(12.0, 12.0);
    pub const INVADER_ROW_COUNT: usize = 6;
    pub const INVADER_COL_COUNT: usize = 6;

    /// Ship defaults
    pub const SHIP_SIZE: Vec2 = Vec2::new(30.0, 16.0);
    pub const SHIP_NAME: &str = "ship";
    pub const SHIP_MASS: f32 = 0.02;

    /// Seconds between formation steps
    pub const TIME_PER_MOVE: f64 = 1.0;
    /// Distance covered by one formation step
    pub const INVADER_STEP: f32 = 10.0;
    /// Formation turns around when an invader gets this close to a side
    pub const EDGE_MARGIN: f32 = 1.0;

    /// Horizontal tilt below this is ignored
    pub const TILT_DEADZONE: f32 = 0.2;
    /// Acceleration to force multiplier
    pub const TILT_FORCE_GAIN: f32 = 5.0;
    /// Half-extent of the square used for ship/invader overlap
    pub const COLLISION_HALF_EXTENT: f32 = 30.0;
}

/// Axis-aligned rectangle (origin at bottom-left, y up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Rectangle of `size` centred on `center`
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.max.x
    }

    /// Strict containment (points on the edge are outside)
    #[inline]
    pub fn contains_strict(&self, point: Vec2) -> bool {
        point.x > self.min.x && point.y > self.min.y && point.x < self.max.x && point.y < self.max.y
    }
}
