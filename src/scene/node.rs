//! Scene graph: the nodes the scene owns
//!
//! Nodes are never removed, so a [`NodeId`] stays valid for the life of the
//! scene. Iteration order is insertion order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::physics::PhysicsBody;
use crate::Rect;

/// Stable handle to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Fill colour of a sprite node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    /// Texture-backed sprite (no tint)
    White,
}

/// A sprite in the scene (anchored at its centre)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Lookup name; several nodes may share one (used as a tag)
    pub name: Option<String>,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub hidden: bool,
    pub body: Option<PhysicsBody>,
}

impl Node {
    /// Unnamed visible sprite at the origin (id assigned by the graph)
    pub fn sprite(color: Color, size: Vec2) -> Self {
        Self {
            id: NodeId(0),
            name: None,
            pos: Vec2::ZERO,
            size,
            color,
            hidden: false,
            body: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    /// Bounding box in scene coordinates
    #[inline]
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.pos, self.size)
    }

    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

/// Owns every node in the scene
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    next_id: u32,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a node to the scene root, returning its id
    pub fn add_child(&mut self, mut node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        node.id = id;
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        // Ids are dense indices since nodes are never removed
        self.nodes.get(id.0 as usize).filter(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize).filter(|n| n.id == id)
    }

    /// First node with the given name
    pub fn child_named(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.is_named(name)).map(|n| n.id)
    }

    /// All nodes carrying the given name, in insertion order
    pub fn nodes_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.is_named(name))
    }

    pub fn nodes_named_mut<'a>(
        &'a mut self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a mut Node> + 'a {
        self.nodes.iter_mut().filter(move |n| n.is_named(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Integrate every body, then keep it inside the `bounds` edge loop
    pub fn step_physics(&mut self, dt: f32, bounds: Rect) {
        for node in &mut self.nodes {
            if let Some(body) = node.body.as_mut() {
                let pos = body.integrate(node.pos, dt);
                node.pos = body.confine(pos, node.size, bounds);
            }
        }
    }
}
