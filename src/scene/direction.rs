//! Formation direction state machine
//!
//! right -> downThenLeft -> left -> downThenRight -> right ...
//! The "down" states last for exactly one evaluation.

use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::consts::EDGE_MARGIN;

/// Heading shared by the whole invader formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormationDirection {
    #[default]
    Right,
    Left,
    DownThenRight,
    DownThenLeft,
    None,
}

/// Propose the next direction from the current one and the invader frames
///
/// Scans frames in order and stops at the first one that triggers a
/// transition. With no frames the direction is unchanged.
pub fn next_direction<I>(current: FormationDirection, frames: I, viewport_width: f32) -> FormationDirection
where
    I: IntoIterator<Item = Rect>,
{
    let mut proposed = current;

    for frame in frames {
        match current {
            FormationDirection::Right => {
                if frame.max_x() >= viewport_width - EDGE_MARGIN {
                    proposed = FormationDirection::DownThenLeft;
                    break;
                }
            }
            FormationDirection::Left => {
                if frame.min_x() <= EDGE_MARGIN {
                    proposed = FormationDirection::DownThenRight;
                    break;
                }
            }
            FormationDirection::DownThenLeft => {
                proposed = FormationDirection::Left;
                break;
            }
            FormationDirection::DownThenRight => {
                proposed = FormationDirection::Right;
                break;
            }
            FormationDirection::None => break,
        }
    }

    proposed
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const WIDTH: f32 = 320.0;
    const SIZE: Vec2 = Vec2::new(24.0, 16.0);

    fn frame_at(x: f32) -> Rect {
        Rect::from_center_size(Vec2::new(x, 100.0), SIZE)
    }

    #[test]
    fn test_right_turns_at_right_edge() {
        // max_x = 307 + 12 = 319 = width - 1
        let frames = [frame_at(50.0), frame_at(307.0)];
        assert_eq!(
            next_direction(FormationDirection::Right, frames, WIDTH),
            FormationDirection::DownThenLeft
        );

        let frames = [frame_at(50.0), frame_at(306.0)];
        assert_eq!(
            next_direction(FormationDirection::Right, frames, WIDTH),
            FormationDirection::Right
        );
    }

    #[test]
    fn test_left_turns_at_left_edge() {
        // min_x = 13 - 12 = 1
        let frames = [frame_at(200.0), frame_at(13.0)];
        assert_eq!(
            next_direction(FormationDirection::Left, frames, WIDTH),
            FormationDirection::DownThenRight
        );
        assert_eq!(
            next_direction(FormationDirection::Left, [frame_at(14.0)], WIDTH),
            FormationDirection::Left
        );
    }

    #[test]
    fn test_down_states_last_one_evaluation() {
        // Position is irrelevant for the down states
        assert_eq!(
            next_direction(FormationDirection::DownThenLeft, [frame_at(310.0)], WIDTH),
            FormationDirection::Left
        );
        assert_eq!(
            next_direction(FormationDirection::DownThenRight, [frame_at(5.0)], WIDTH),
            FormationDirection::Right
        );
    }

    #[test]
    fn test_no_invaders_keeps_direction() {
        assert_eq!(
            next_direction(FormationDirection::DownThenLeft, Vec::<Rect>::new(), WIDTH),
            FormationDirection::DownThenLeft
        );
        assert_eq!(
            next_direction(FormationDirection::None, [frame_at(319.0)], WIDTH),
            FormationDirection::None
        );
    }

    proptest! {
        #[test]
        fn prop_right_turns_iff_any_frame_at_edge(xs in prop::collection::vec(0.0f32..320.0, 1..20)) {
            let frames: Vec<Rect> = xs.iter().map(|&x| frame_at(x)).collect();
            let at_edge = frames.iter().any(|f| f.max_x() >= WIDTH - EDGE_MARGIN);
            let next = next_direction(FormationDirection::Right, frames, WIDTH);
            if at_edge {
                prop_assert_eq!(next, FormationDirection::DownThenLeft);
            } else {
                prop_assert_eq!(next, FormationDirection::Right);
            }
        }
    }
}
