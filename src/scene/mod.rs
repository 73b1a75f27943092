//! Invaders scene
//!
//! All gameplay logic lives here. The host owns rendering and the frame
//! clock; it calls [`SceneState::did_move_to_view`] once, then [`update`] and
//! [`SceneState::step_physics`] every frame.
//! - Single-threaded, frame-synchronous
//! - Seeded RNG only
//! - Stable iteration order (insertion order)

pub mod collision;
pub mod direction;
pub mod node;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{invader_hit_box, ship_hits_invader};
pub use direction::{FormationDirection, next_direction};
pub use node::{Color, Node, NodeId, SceneGraph};
pub use physics::PhysicsBody;
pub use spawn::{InvaderType, make_invader, make_ship};
pub use state::{SceneEvent, SceneState};
pub use tick::{move_invaders, process_user_motion, update};
