//! Invader and ship creation

use glam::Vec2;
use rand::Rng;

use super::node::{Color, Node};
use super::physics::PhysicsBody;
use super::state::SceneState;
use crate::consts::*;
use crate::settings::SpawnLayout;

/// Invader variants (differ only in colour)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvaderType {
    A,
    B,
    C,
}

impl InvaderType {
    /// Grid rows cycle A, B, C from the bottom up
    pub fn for_row(row: usize) -> Self {
        match row % 3 {
            0 => InvaderType::A,
            1 => InvaderType::B,
            _ => InvaderType::C,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            InvaderType::A => Color::Red,
            InvaderType::B => Color::Green,
            InvaderType::C => Color::Blue,
        }
    }
}

/// A tagged invader sprite of the given type
pub fn make_invader(kind: InvaderType) -> Node {
    Node::sprite(kind.color(), INVADER_SIZE).with_name(INVADER_TAG)
}

/// The ship sprite with its body: dynamic, no gravity, fixed mass
pub fn make_ship() -> Node {
    let mut body = PhysicsBody::new(SHIP_MASS);
    body.dynamic = true;
    body.affected_by_gravity = false;

    let mut ship = Node::sprite(Color::Green, SHIP_SIZE).with_name(SHIP_NAME);
    ship.body = Some(body);
    ship
}

/// Uniform in `[0, extent)`; degenerate extents pin to 0
fn random_coord(rng: &mut impl Rng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

impl SceneState {
    /// Populate the scene: invaders per the configured layout, then the ship
    pub fn create_content(&mut self) {
        match self.settings.spawn_layout {
            SpawnLayout::Random => self.spawn_random_invaders(RANDOM_INVADER_COUNT),
            SpawnLayout::Grid => self.setup_invaders(),
        }
        self.setup_ship();

        log::info!(
            "Scene created: {} invaders ({}), viewport {}x{}",
            self.invaders.len(),
            self.settings.spawn_layout.as_str(),
            self.settings.viewport_width,
            self.settings.viewport_height
        );
    }

    /// Scatter `count` texture-tinted invaders uniformly over the viewport
    pub fn spawn_random_invaders(&mut self, count: usize) {
        let size = self.size();
        for _ in 0..count {
            let mut invader = Node::sprite(Color::White, INVADER_SIZE).with_name(INVADER_TAG);
            invader.pos = Vec2::new(
                random_coord(&mut self.rng, size.x),
                random_coord(&mut self.rng, size.y),
            );
            let id = self.graph.add_child(invader);
            self.invaders.push(id);
        }
    }

    /// Rows of coloured invaders starting a third of the way across, half way up
    pub fn setup_invaders(&mut self) {
        let base_origin = Vec2::new(self.size().x / 3.0, self.size().y / 2.0);

        for row in 0..INVADER_ROW_COUNT {
            let kind = InvaderType::for_row(row);
            let y = row as f32 * (INVADER_SIZE.y * 2.0) + base_origin.y;
            let mut pos = Vec2::new(base_origin.x, y);

            for _ in 1..INVADER_COL_COUNT {
                let mut invader = make_invader(kind);
                invader.pos = pos;
                let id = self.graph.add_child(invader);
                self.invaders.push(id);

                pos.x += INVADER_SIZE.x + INVADER_GRID_SPACING.x;
            }
        }
    }

    /// Place the ship at the bottom centre
    pub fn setup_ship(&mut self) {
        let mut ship = make_ship();
        ship.pos = Vec2::new(self.size().x / 2.0, SHIP_SIZE.y / 2.0);
        self.graph.add_child(ship);
    }
}
