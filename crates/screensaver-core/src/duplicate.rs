use glam::Vec3;

use crate::state::{euler_degrees, Placement};

/// Placements for `count` copies of a template, copy `i` offset by `i` times
/// the position and rotation offsets. Copy 0 sits at the origin unrotated.
pub fn duplicate_layout(
    count: usize,
    rotate_offset_degrees: Vec3,
    position_offset: Vec3,
) -> Vec<Placement> {
    (0..count)
        .map(|i| {
            let i = i as f32;
            Placement {
                position: position_offset * i,
                rotation: euler_degrees(rotate_offset_degrees * i),
            }
        })
        .collect()
}
