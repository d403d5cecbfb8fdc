//! Conversion between axial cell coordinates and world positions.
//!
//! `radius` is the circumradius shared by every cell of a grid. A zero radius
//! is a precondition violation that is not checked: division produces infinite
//! or NaN intermediates, the float-to-int casts saturate (NaN becomes `0`), and
//! the result is meaningless but no panic occurs. Use [`Layout`](super::Layout)
//! to have the radius validated once up front.

use super::{coordinate::Coordinate, OUTER_TO_INNER_RADIUS};
use crate::geometry::Vector2;
use serde::{Deserialize, Serialize};

/// World position of the center of the cell at `coordinate`.
#[inline]
pub fn to_world(coordinate: Coordinate, radius: f32) -> Vector2 {
    let q = coordinate.q as f32;
    let r = coordinate.r as f32;
    let x = (q + r * 0.5) * radius * 2.0 * OUTER_TO_INNER_RADIUS;
    let y = r * radius * 1.5;
    Vector2::new(x, y)
}

/// Coordinate of the cell containing, or nearest to, `position`.
#[inline]
pub fn to_axial(position: Vector2, radius: f32) -> Coordinate {
    FractionalCube::from_world(position, radius).round().into()
}

/// Cube coordinates before rounding to a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FractionalCube {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl FractionalCube {
    pub fn from_world(position: Vector2, radius: f32) -> Self {
        let mut x = position.x / (radius * OUTER_TO_INNER_RADIUS * 2.0);
        let mut y = -x;

        let offset = position.y / (radius * 3.0);
        x -= offset;
        y -= offset;

        FractionalCube { x, y, z: -x - y }
    }

    /// Round to integer cube coordinates.
    ///
    /// Each component is rounded half-to-even. If that breaks the cube
    /// constraint, the component with the largest rounding error is recomputed
    /// from the other two, with one deliberate exception: when `y` has the
    /// largest error, or ties with `z`, nothing is recomputed and the result may
    /// not sum to zero. Cell picking built on this rounding depends on that
    /// behavior at cell boundaries, so it must not be replaced with a symmetric
    /// max-of-three.
    pub fn round(self) -> Cube {
        let mut cube = Cube {
            x: round_to_int(self.x),
            y: round_to_int(self.y),
            z: round_to_int(self.z),
        };

        if !cube.is_valid() {
            let dx = (self.x - cube.x as f32).abs();
            let dy = (self.y - cube.y as f32).abs();
            let dz = (self.z - cube.z as f32).abs();

            if dx > dy && dx > dz {
                cube.x = cube.y.wrapping_neg().wrapping_sub(cube.z);
            } else if dz > dy {
                cube.z = cube.x.wrapping_neg().wrapping_sub(cube.y);
            }
        }

        cube
    }
}

impl From<Coordinate> for FractionalCube {
    fn from(coordinate: Coordinate) -> Self {
        FractionalCube {
            x: coordinate.q as f32,
            y: coordinate.s() as f32,
            z: coordinate.r as f32,
        }
    }
}

/// Integer cube coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cube {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cube {
    /// `true` when the components satisfy `x + y + z == 0`.
    pub fn is_valid(self) -> bool {
        self.x.wrapping_add(self.y).wrapping_add(self.z) == 0
    }
}

impl From<Coordinate> for Cube {
    fn from(coordinate: Coordinate) -> Self {
        Cube {
            x: coordinate.q,
            y: coordinate.s(),
            z: coordinate.r,
        }
    }
}

// Ties go to the even neighbor, as the engine the tables were authored against does.
#[inline]
fn round_to_int(value: f32) -> i32 {
    value.round_ties_even() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::hex::{Direction, ROOT_3, VERTICES};
    use assert_approx_eq::assert_approx_eq;
    use itertools::iproduct;

    const RADII: [f32; 5] = [0.25, 0.5, 1.0, 3.7, 100.0];

    #[test]
    fn test_to_world_unit_radius() {
        let east = to_world(Coordinate::new(1, 0), 1.0);
        assert_approx_eq!(east.x, ROOT_3, 1e-6);
        assert_approx_eq!(east.y, 0.0);

        let northeast = to_world(Coordinate::new(0, 1), 1.0);
        assert_approx_eq!(northeast.x, ROOT_3 / 2.0, 1e-6);
        assert_approx_eq!(northeast.y, 1.5);

        assert_eq!(to_world(Coordinate::ORIGIN, 1.0), Vector2::ZERO);
    }

    #[test]
    fn test_to_axial_unit_radius() {
        assert_eq!(to_axial(Vector2::new(1.1547, 0.0), 1.0), Coordinate::new(1, 0));
        assert_eq!(to_axial(Vector2::new(ROOT_3, 0.0), 1.0), Coordinate::new(1, 0));
        assert_eq!(to_axial(Vector2::new(0.1, -0.2), 1.0), Coordinate::ORIGIN);
    }

    #[test]
    fn test_round_trip() {
        for (q, r, &radius) in iproduct!(-20..=20, -20..=20, RADII.iter()) {
            let coordinate = Coordinate::new(q, r);
            let world = to_world(coordinate, radius);
            assert_eq!(
                to_axial(world, radius),
                coordinate,
                "round trip failed at radius {} via {}",
                radius,
                world
            );
        }
    }

    #[test]
    fn test_points_inside_cell_resolve_to_cell() {
        for (q, r, &radius) in iproduct!(-5..=5, -5..=5, RADII.iter()) {
            let coordinate = Coordinate::new(q, r);
            let center = to_world(coordinate, radius);
            // well inside the cell's apothem in every corner direction
            for offset in VERTICES.iter() {
                let position = center + *offset * (radius * 0.8);
                assert_eq!(to_axial(position, radius), coordinate);
            }
        }
    }

    #[test]
    fn test_shared_edge_splits_between_neighbors() {
        let radius = 2.0;
        let center = Coordinate::new(3, -1);
        let from = to_world(center, radius);
        for direction in Direction::iter() {
            let neighbor = center + direction;
            let step = to_world(neighbor, radius) - from;
            assert_eq!(to_axial(from + step * 0.4, radius), center);
            assert_eq!(to_axial(from + step * 0.6, radius), neighbor);
        }
    }

    #[test]
    fn test_round_exact_cube_unchanged() {
        let cube = FractionalCube::from(Coordinate::new(4, -9)).round();
        assert!(cube.is_valid());
        assert_eq!(cube, Cube::from(Coordinate::new(4, -9)));
    }

    #[test]
    fn test_round_corrects_x_when_x_error_largest() {
        // rounds to (0, 0, -1); errors (0.46875, 0.125, 0.40625)
        let cube = FractionalCube {
            x: 0.46875,
            y: 0.125,
            z: -0.59375,
        }
        .round();
        assert_eq!(cube, Cube { x: 1, y: 0, z: -1 });
        assert!(cube.is_valid());
    }

    #[test]
    fn test_round_corrects_z_when_z_error_exceeds_y() {
        // rounds to (0, 0, -1); errors (0.3125, 0.25, 0.4375)
        let cube = FractionalCube {
            x: 0.3125,
            y: 0.25,
            z: -0.5625,
        }
        .round();
        assert_eq!(cube, Cube { x: 0, y: 0, z: 0 });
        assert!(cube.is_valid());
    }

    #[test]
    fn test_round_leaves_y_largest_uncorrected() {
        // rounds to (0, 0, -1); errors (0.125, 0.46875, 0.40625)
        let cube = FractionalCube {
            x: 0.125,
            y: 0.46875,
            z: -0.59375,
        }
        .round();
        assert_eq!(cube, Cube { x: 0, y: 0, z: -1 });
        assert!(!cube.is_valid());
        assert_eq!(Coordinate::from(cube), Coordinate::new(0, -1));
    }

    #[test]
    fn test_round_leaves_y_z_tie_uncorrected() {
        // rounds to (0, 0, -1); errors (0.25, 0.375, 0.375)
        let cube = FractionalCube {
            x: 0.25,
            y: 0.375,
            z: -0.625,
        }
        .round();
        assert_eq!(cube, Cube { x: 0, y: 0, z: -1 });
        assert!(!cube.is_valid());
    }

    #[test]
    fn test_round_half_to_even() {
        let cube = FractionalCube {
            x: 2.5,
            y: -2.5,
            z: 0.0,
        }
        .round();
        assert_eq!(cube, Cube { x: 2, y: -2, z: 0 });

        let cube = FractionalCube {
            x: 1.5,
            y: -1.5,
            z: 0.0,
        }
        .round();
        assert_eq!(cube, Cube { x: 2, y: -2, z: 0 });
    }

    #[test]
    fn test_zero_radius_does_not_panic() {
        assert_eq!(to_world(Coordinate::new(5, -3), 0.0), Vector2::ZERO);
        assert_eq!(to_axial(Vector2::ZERO, 0.0), Coordinate::ORIGIN);
        let _ = to_axial(Vector2::new(1.0, 1.0), 0.0);
        let _ = to_axial(Vector2::new(-1.0, 0.0), 0.0);
    }
}
