//! Hexagonal geometry support.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)
//!
//! Everything here is a pure function over values. The tables are compile-time
//! constants computed in `f32`, so their bit patterns are fixed regardless of
//! platform.

pub mod conversion;
pub mod coordinate;
pub mod direction;
pub mod layout;

pub use conversion::{to_axial, to_world, Cube, FractionalCube};
pub use coordinate::Coordinate;
pub use direction::{Direction, DirectionIndexError, Directions, ParseDirectionsError};
pub use layout::{InvalidRadius, Layout};

use crate::geometry::Vector2;
use itertools::Itertools;

pub const ROOT_3: f32 = 1.732_050_8;

pub const INNER_TO_OUTER_RADIUS: f32 = 2.0 / ROOT_3;
pub const OUTER_TO_INNER_RADIUS: f32 = ROOT_3 / 2.0;

/// Apothem of the unit hexagon described by [`VERTICES`].
pub const INNER_RADIUS: f32 = 0.5;
/// Circumradius of the unit hexagon described by [`VERTICES`].
pub const OUTER_RADIUS: f32 = INNER_RADIUS * INNER_TO_OUTER_RADIUS;

pub const VERTEX_COUNT: usize = 6;

/// Corner offsets of the unit hexagon, clockwise from the top.
pub const VERTICES: [Vector2; VERTEX_COUNT] = [
    Vector2::new(0.0, OUTER_RADIUS),
    Vector2::new(INNER_RADIUS, OUTER_RADIUS * 0.5),
    Vector2::new(INNER_RADIUS, -OUTER_RADIUS * 0.5),
    Vector2::new(0.0, -OUTER_RADIUS),
    Vector2::new(-INNER_RADIUS, -OUTER_RADIUS * 0.5),
    Vector2::new(-INNER_RADIUS, OUTER_RADIUS * 0.5),
];

/// Value in [`TRIANGLES`] marking the end of the index data.
pub const TRIANGLE_SENTINEL: i32 = -1;

/// Index buffer rendering a filled hexagon as a triangle fan around vertex 0.
///
/// The final entry is [`TRIANGLE_SENTINEL`], not a vertex index.
pub const TRIANGLES: [i32; 13] = [
    0, 1, 2, //
    0, 2, 3, //
    0, 3, 4, //
    0, 4, 5, //
    TRIANGLE_SENTINEL,
];

/// Axial offset to the neighboring cell, indexed by [`Direction::index`].
pub const TRANSLATIONS: [Coordinate; Direction::COUNT] = [
    Coordinate::new(0, 1),
    Coordinate::new(1, 0),
    Coordinate::new(1, -1),
    Coordinate::new(0, -1),
    Coordinate::new(-1, 0),
    Coordinate::new(-1, 1),
];

/// Triangles of [`TRIANGLES`], up to but excluding the sentinel.
pub fn triangle_fan() -> impl Iterator<Item = [usize; 3]> {
    TRIANGLES
        .iter()
        .take_while(|&&idx| idx != TRIANGLE_SENTINEL)
        .map(|&idx| idx as usize)
        .tuples()
        .map(|(a, b, c)| [a, b, c])
}

/// Calculate the corners of the hexagon centered on `center` with scale `radius` into `target`.
///
/// `radius` is not validated: zero collapses every corner onto `center`, and a
/// negative value reflects the hexagon through it.
#[inline]
pub fn vertices_into(target: &mut [Vector2; VERTEX_COUNT], center: Vector2, radius: f32) {
    for (corner, offset) in target.iter_mut().zip(VERTICES.iter()) {
        *corner = center + *offset * radius;
    }
}

/// Calculate the corners of the hexagon centered on `center` with scale `radius`.
///
/// Identical to [`vertices_into`] with a fresh buffer.
#[inline]
pub fn vertices(center: Vector2, radius: f32) -> [Vector2; VERTEX_COUNT] {
    let mut corners = [Vector2::ZERO; VERTEX_COUNT];
    vertices_into(&mut corners, center, radius);
    corners
}
