//! Wireframe tessellation of entities into line-list vertices

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::sim::{Entity, EntityKind};

/// Append one line segment (two vertices) in game pixels
fn push_line(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
}

/// Closed outline from local-space points, rotated by `rot` and translated
/// to `pos`
fn push_outline(out: &mut Vec<Vertex>, pos: Vec2, rot: f32, points: &[Vec2], color: [f32; 4]) {
    let (sin, cos) = rot.sin_cos();
    let world = |p: Vec2| pos + Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
    for i in 0..points.len() {
        let a = world(points[i]);
        let b = world(points[(i + 1) % points.len()]);
        push_line(out, a, b, color);
    }
}

/// Regular polygon outline used for asteroids; fewer sides for smaller rocks
fn push_polygon(out: &mut Vec<Vertex>, entity: &Entity, sides: usize, color: [f32; 4]) {
    let r = entity.radius();
    let points: Vec<Vec2> = (0..sides)
        .map(|i| {
            let angle = i as f32 / sides as f32 * TAU;
            Vec2::new(angle.cos(), angle.sin()) * r
        })
        .collect();
    push_outline(out, entity.pos, entity.rot, &points, color);
}

/// Append the wireframe for one entity
pub fn entity_lines(entity: &Entity, out: &mut Vec<Vertex>) {
    let r = entity.radius();
    match entity.kind {
        EntityKind::Player => {
            // Classic dart: nose along the heading, notched tail
            let hull = [
                Vec2::new(r, 0.0),
                Vec2::new(-0.7 * r, 0.6 * r),
                Vec2::new(-0.4 * r, 0.0),
                Vec2::new(-0.7 * r, -0.6 * r),
            ];
            push_outline(out, entity.pos, entity.rot, &hull, colors::SHIP);
        }
        EntityKind::Projectile => {
            // Short streak along the flight direction
            let dir = entity.heading();
            push_line(
                out,
                entity.pos - dir * r,
                entity.pos + dir * r,
                colors::PROJECTILE,
            );
        }
        EntityKind::AsteroidBig => push_polygon(out, entity, 12, colors::ASTEROID),
        EntityKind::AsteroidMedium => push_polygon(out, entity, 9, colors::ASTEROID),
        EntityKind::AsteroidSmall => push_polygon(out, entity, 6, colors::ASTEROID),
    }
}
