//! Ship/invader overlap
//!
//! Neither sprite's real size is used: the ship's centre is tested against a
//! fixed square around the invader's centre.

use glam::Vec2;

use crate::Rect;
use crate::consts::COLLISION_HALF_EXTENT;

/// Square hit box used for every invader
#[inline]
pub fn invader_hit_box(invader_pos: Vec2) -> Rect {
    Rect::from_center_size(invader_pos, Vec2::splat(COLLISION_HALF_EXTENT * 2.0))
}

/// True when the ship's centre lies strictly inside the invader's hit box
#[inline]
pub fn ship_hits_invader(ship_pos: Vec2, invader_pos: Vec2) -> bool {
    invader_hit_box(invader_pos).contains_strict(ship_pos)
}
