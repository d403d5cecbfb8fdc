use super::{coordinate::Coordinate, TRANSLATIONS};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Direction in a hexagonal coordinate system
///
/// Variants are declared in translation-table order, clockwise from `Northeast`.
/// The discriminant of each variant is its index into [`TRANSLATIONS`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Direction {
    #[display("ne")]
    Northeast = 0,
    #[display("e")]
    East = 1,
    #[display("se")]
    Southeast = 2,
    #[display("sw")]
    Southwest = 3,
    #[display("w")]
    West = 4,
    #[display("nw")]
    Northwest = 5,
}

impl Direction {
    /// Number of directions; the length of every per-direction table.
    pub const COUNT: usize = 6;

    /// Iterate through all `Direction`s, clockwise from `Northeast`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::Northeast), |direction| {
            use Direction::*;

            match direction {
                Northeast => Some(East),
                East => Some(Southeast),
                Southeast => Some(Southwest),
                Southwest => Some(West),
                West => Some(Northwest),
                Northwest => None,
            }
        })
    }

    /// Position of this direction in the per-direction tables.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Axial offset from a cell to its neighbor in this direction.
    #[inline]
    pub fn translation(self) -> Coordinate {
        TRANSLATIONS[self.index()]
    }

    pub fn opposite(self) -> Direction {
        use Direction::*;

        match self {
            Northeast => Southwest,
            East => West,
            Southeast => Northwest,
            Southwest => Northeast,
            West => East,
            Northwest => Southeast,
        }
    }

    /// Split the longest direction token off the head of `s`.
    ///
    /// Returns `(maybe_direction, unused_portion)`; on failure `s` comes back whole.
    /// Two-letter tokens win over one-letter ones, so `nwe` is `nw` then `e`.
    pub fn try_parse(s: &str) -> (Option<Direction>, &str) {
        [2, 1]
            .iter()
            .find_map(|&len| {
                let direction = s.get(..len)?.parse::<Direction>().ok()?;
                Some((Some(direction), &s[len..]))
            })
            .unwrap_or((None, s))
    }
}

impl TryFrom<usize> for Direction {
    type Error = DirectionIndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Direction::iter()
            .nth(index)
            .ok_or(DirectionIndexError(index))
    }
}

/// Helper for parsing a line of directions.
///
/// Directions are concatenated without separators, e.g. `nwwswee`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directions(pub Vec<Direction>);

impl FromStr for Directions {
    type Err = ParseDirectionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut directions = Vec::with_capacity(s.len() / 2);
        let mut rest = s;

        while !rest.is_empty() {
            let (direction, remaining) = Direction::try_parse(rest);
            let offset = s.len() - rest.len();
            directions.push(direction.ok_or(ParseDirectionsError(offset))?);
            rest = remaining;
        }

        Ok(Directions(directions))
    }
}

impl IntoIterator for Directions {
    type Item = Direction;
    type IntoIter = std::vec::IntoIter<Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Directions {
    type Item = Direction;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Direction>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// No hex direction starts at this byte offset of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no hex direction at byte {0}")]
pub struct ParseDirectionsError(pub usize);

/// No direction exists at this table index
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction index {0}; must be less than {}", Direction::COUNT)]
pub struct DirectionIndexError(pub usize);
