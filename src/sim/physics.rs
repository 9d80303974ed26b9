//! Position integration and toroidal screen wrap

use super::entity::Entity;
use crate::consts::{SCREEN_H, SCREEN_W};

/// Wrap a coordinate into [0, dim) with floored modulo. The `%` operator
/// truncates toward zero and leaves negative remainders, which would park
/// entities just off the left/top edges instead of wrapping them around.
#[inline]
pub fn wrap(value: f32, dim: f32) -> f32 {
    let wrapped = value.rem_euclid(dim);
    // rem_euclid of a tiny negative value can round up to exactly `dim`
    if wrapped >= dim { 0.0 } else { wrapped }
}

/// Advance every entity by one frame of linear motion, then wrap onto the
/// playfield torus
pub fn integrate(entities: &mut [Entity], dt: f32) {
    for e in entities.iter_mut() {
        e.pos += e.vel * dt;
        e.pos.x = wrap(e.pos.x, SCREEN_W);
        e.pos.y = wrap(e.pos.y, SCREEN_H);
    }
}
