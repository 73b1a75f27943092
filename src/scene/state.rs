//! Scene state
//!
//! Everything the frame callbacks read or mutate lives on [`SceneState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::direction::{FormationDirection, next_direction};
use super::node::{Node, NodeId, SceneGraph};
use crate::Rect;
use crate::consts::*;
use crate::motion::MotionSource;
use crate::settings::Settings;

/// Something gameplay reports back to the frame driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// The ship touched an invader (which is now hidden)
    GameOver { invader: NodeId },
}

/// The invaders scene
#[derive(Debug, Clone)]
pub struct SceneState {
    pub settings: Settings,
    pub graph: SceneGraph,
    /// Every invader spawned at scene start (hidden ones included)
    pub invaders: Vec<NodeId>,
    /// Guards one-time content creation
    pub content_created: bool,
    pub direction: FormationDirection,
    /// Timestamp of the last formation step
    pub time_of_last_move: f64,
    pub(crate) rng: Pcg32,
}

impl SceneState {
    pub fn new(settings: Settings) -> Self {
        let rng = Pcg32::seed_from_u64(settings.seed);
        Self {
            settings,
            graph: SceneGraph::new(),
            invaders: Vec::new(),
            content_created: false,
            direction: FormationDirection::Right,
            time_of_last_move: 0.0,
            rng,
        }
    }

    /// Viewport size (logical units)
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.settings.viewport_width, self.settings.viewport_height)
    }

    /// Scene frame, used as the edge loop for physics bodies
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect {
            min: Vec2::ZERO,
            max: self.size(),
        }
    }

    /// Activation hook: build content once and start motion updates
    pub fn did_move_to_view(&mut self, motion: &mut dyn MotionSource) {
        if self.content_created {
            return;
        }
        self.create_content();
        self.content_created = true;
        motion.start_updates();
    }

    /// The ship node, looked up by name
    pub fn ship(&self) -> Option<&Node> {
        self.graph
            .child_named(SHIP_NAME)
            .and_then(|id| self.graph.get(id))
    }

    pub fn ship_mut(&mut self) -> Option<&mut Node> {
        let id = self.graph.child_named(SHIP_NAME)?;
        self.graph.get_mut(id)
    }

    /// Invader nodes in spawn order
    pub fn invader_nodes(&self) -> impl Iterator<Item = &Node> {
        self.invaders.iter().filter_map(|&id| self.graph.get(id))
    }

    pub fn hidden_invader_count(&self) -> usize {
        self.invader_nodes().filter(|n| n.hidden).count()
    }

    /// Re-evaluate the formation direction from the tagged invaders
    pub fn determine_invader_direction(&mut self) {
        let frames = self.graph.nodes_named(INVADER_TAG).map(Node::frame);
        let proposed = next_direction(self.direction, frames, self.settings.viewport_width);

        if proposed != self.direction {
            log::trace!("Formation direction {:?} -> {:?}", self.direction, proposed);
            self.direction = proposed;
        }
    }

    /// Advance the physics integrator by `dt`
    pub fn step_physics(&mut self, dt: f32) {
        let bounds = self.bounds();
        self.graph.step_physics(dt, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::LatestSample;
    use crate::scene::spawn::{InvaderType, make_invader};

    #[test]
    fn test_activation_is_idempotent() {
        let mut scene = SceneState::new(Settings::default());
        let mut motion = LatestSample::new();

        scene.did_move_to_view(&mut motion);
        scene.did_move_to_view(&mut motion);

        assert!(scene.content_created);
        assert!(motion.is_active());
        assert_eq!(scene.invaders.len(), RANDOM_INVADER_COUNT);
        assert_eq!(scene.graph.nodes_named(INVADER_TAG).count(), RANDOM_INVADER_COUNT);
        assert_eq!(scene.graph.nodes_named(SHIP_NAME).count(), 1);
        assert_eq!(scene.graph.len(), RANDOM_INVADER_COUNT + 1);
    }

    #[test]
    fn test_no_ship_before_activation() {
        let scene = SceneState::new(Settings::default());
        assert!(scene.ship().is_none());
        assert_eq!(scene.invader_nodes().count(), 0);
    }

    #[test]
    fn test_direction_flips_at_edge_then_resumes() {
        let mut scene = SceneState::new(Settings::default());
        let mut invader = make_invader(InvaderType::A);
        invader.pos = Vec2::new(scene.settings.viewport_width - 12.0, 200.0);
        let id = scene.graph.add_child(invader);
        scene.invaders.push(id);

        scene.determine_invader_direction();
        assert_eq!(scene.direction, FormationDirection::DownThenLeft);

        scene.determine_invader_direction();
        assert_eq!(scene.direction, FormationDirection::Left);

        // Still near the right edge, so heading left stays put
        scene.determine_invader_direction();
        assert_eq!(scene.direction, FormationDirection::Left);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = SceneState::new(Settings::default());
        let mut b = SceneState::new(Settings::default());
        a.create_content();
        b.create_content();

        let pa: Vec<Vec2> = a.invader_nodes().map(|n| n.pos).collect();
        let pb: Vec<Vec2> = b.invader_nodes().map(|n| n.pos).collect();
        assert_eq!(pa, pb);
    }
}
