//! Accelerometer input
//!
//! The scene only ever reads the most recent sample. Whoever samples the
//! hardware (or replays a script) pushes into a [`MotionSource`]; older
//! samples are simply overwritten.

use glam::Vec3;

/// Source of device acceleration samples (in g)
pub trait MotionSource {
    /// Begin sampling. Before this, `latest` reports nothing.
    fn start_updates(&mut self);
    /// Most recent sample, if one has arrived
    fn latest(&self) -> Option<Vec3>;
}

/// Holds the newest pushed sample
#[derive(Debug, Clone, Default)]
pub struct LatestSample {
    active: bool,
    sample: Option<Vec3>,
}

impl LatestSample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample (most recent wins). Ignored until updates start.
    pub fn push(&mut self, sample: Vec3) {
        if self.active {
            self.sample = Some(sample);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl MotionSource for LatestSample {
    fn start_updates(&mut self) {
        self.active = true;
    }

    fn latest(&self) -> Option<Vec3> {
        if self.active { self.sample } else { None }
    }
}

/// Replays a fixed list of samples, one per `advance`
///
/// Holds the final sample once the script runs out.
#[derive(Debug, Clone)]
pub struct ScriptedMotion {
    samples: Vec<Vec3>,
    cursor: Option<usize>,
    active: bool,
}

impl ScriptedMotion {
    pub fn new(samples: Vec<Vec3>) -> Self {
        Self {
            samples,
            cursor: None,
            active: false,
        }
    }

    /// Gentle left/right rocking, `frames` samples long
    pub fn rocking(frames: usize, period: usize, amplitude: f32) -> Self {
        let period = period.max(1);
        let samples = (0..frames)
            .map(|i| {
                let phase = (i % period) as f32 / period as f32 * std::f32::consts::TAU;
                Vec3::new(phase.sin() * amplitude, 0.0, -1.0)
            })
            .collect();
        Self::new(samples)
    }

    /// Move to the next sample (no-op until updates start)
    pub fn advance(&mut self) {
        if !self.active || self.samples.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(self.samples.len() - 1),
        });
    }
}

impl MotionSource for ScriptedMotion {
    fn start_updates(&mut self) {
        self.active = true;
    }

    fn latest(&self) -> Option<Vec3> {
        if !self.active {
            return None;
        }
        self.cursor.and_then(|i| self.samples.get(i).copied())
    }
}
