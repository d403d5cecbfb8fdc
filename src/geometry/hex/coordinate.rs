use super::{
    conversion::{self, Cube},
    direction::Direction,
};
use crate::geometry::Vector2;
use serde::{Deserialize, Serialize};
use std::ops;

/// Axial hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Constraint: `q + r + s == 0`, so `s` is never stored.
///
/// Every `i32` pair is a valid cell. Arithmetic wraps at the edges of the
/// `i32` range instead of panicking.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("({q}, {r})")]
pub struct Coordinate {
    pub q: i32,
    pub r: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate::new(0, 0);

    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Coordinate { q, r }
    }

    /// The implicit third cube coordinate.
    #[inline]
    pub const fn s(self) -> i32 {
        self.q.wrapping_neg().wrapping_sub(self.r)
    }

    pub fn neighbor(self, direction: Direction) -> Coordinate {
        self + direction
    }

    /// All six adjacent cells, in [`Direction::iter`] order.
    pub fn neighbors(self) -> impl 'static + Iterator<Item = Coordinate> {
        Direction::iter().map(move |direction| self + direction)
    }

    /// Number of steps between two cells.
    ///
    /// Computed in `i64` so that cells at opposite ends of the `i32` range
    /// still get an exact answer.
    pub fn distance(self, other: Coordinate) -> u64 {
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        let ds = -dq - dr;
        dq.unsigned_abs()
            .max(dr.unsigned_abs())
            .max(ds.unsigned_abs())
    }

    /// Follow a path of steps from this cell, returning where it ends.
    pub fn walk(self, directions: impl IntoIterator<Item = Direction>) -> Coordinate {
        directions
            .into_iter()
            .fold(self, |position, direction| position + direction)
    }

    /// World position of this cell's center in a grid of circumradius `radius`.
    #[inline]
    pub fn to_world(self, radius: f32) -> Vector2 {
        conversion::to_world(self, radius)
    }

    /// The cell containing `position` in a grid of circumradius `radius`.
    #[inline]
    pub fn from_world(position: Vector2, radius: f32) -> Coordinate {
        conversion::to_axial(position, radius)
    }
}

impl ops::Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.q.wrapping_add(rhs.q), self.r.wrapping_add(rhs.r))
    }
}

impl ops::AddAssign for Coordinate {
    fn add_assign(&mut self, rhs: Coordinate) {
        *self = *self + rhs;
    }
}

impl ops::Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.q.wrapping_sub(rhs.q), self.r.wrapping_sub(rhs.r))
    }
}

impl ops::SubAssign for Coordinate {
    fn sub_assign(&mut self, rhs: Coordinate) {
        *self = *self - rhs;
    }
}

impl ops::Neg for Coordinate {
    type Output = Coordinate;

    fn neg(self) -> Coordinate {
        Coordinate::new(self.q.wrapping_neg(), self.r.wrapping_neg())
    }
}

impl ops::AddAssign<Direction> for Coordinate {
    fn add_assign(&mut self, rhs: Direction) {
        *self += rhs.translation();
    }
}

impl ops::Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

/// Axial `q` is cube `x`; axial `r` is cube `z`. Cube `y` is dropped unchecked.
impl From<Cube> for Coordinate {
    fn from(cube: Cube) -> Self {
        Coordinate::new(cube.x, cube.z)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((q, r): (i32, i32)) -> Self {
        Coordinate::new(q, r)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.q, c.r)
    }
}
