//! Axis-aligned bounding box overlap for cars
//!
//! Strict inequalities on all four half-planes: cars that merely touch
//! edges are not colliding.

use crate::consts::{CAR_HEIGHT, CAR_WIDTH};

/// True if two equally sized cars truly intersect.
#[inline]
pub fn cars_overlap(ax: f32, ay: f32, bx: f32, by: f32) -> bool {
    ax < bx + CAR_WIDTH && ax + CAR_WIDTH > bx && ay < by + CAR_HEIGHT && ay + CAR_HEIGHT > by
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_positions_collide() {
        assert!(cars_overlap(150.0, 480.0, 150.0, 480.0));
    }

    #[test]
    fn test_edge_touching_is_not_a_collision() {
        // Exactly one width apart horizontally
        assert!(!cars_overlap(150.0, 480.0, 150.0 + CAR_WIDTH, 480.0));
        assert!(!cars_overlap(150.0, 480.0, 150.0 - CAR_WIDTH, 480.0));
        // Exactly one height apart vertically
        assert!(!cars_overlap(150.0, 480.0, 150.0, 480.0 + CAR_HEIGHT));
        assert!(!cars_overlap(150.0, 480.0, 150.0, 480.0 - CAR_HEIGHT));
    }

    #[test]
    fn test_partial_overlap_collides() {
        assert!(cars_overlap(150.0, 480.0, 150.0 + CAR_WIDTH - 1.0, 480.0));
        assert!(cars_overlap(150.0, 480.0, 150.0, 480.0 - CAR_HEIGHT + 1.0));
    }

    #[test]
    fn test_adjacent_lanes_never_collide() {
        use crate::consts::LANES;
        // Lane spacing exceeds the car width, so same-height cars on
        // neighboring lanes always miss each other
        assert!(!cars_overlap(LANES[1], 480.0, LANES[2], 480.0));
        assert!(!cars_overlap(LANES[0], 480.0, LANES[1], 480.0));
    }
}
