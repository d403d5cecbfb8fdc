use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Three booleans addressable by name or by index.
///
/// Indexing follows component order: `0 => x`, `1 => y`, `2 => z`. Any other
/// index passed through [`Index`] or [`IndexMut`] panics; use [`Bool3::get`] and
/// [`Bool3::set`] to handle a bad index as an error instead.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("[{x}, {y}, {z}]")]
pub struct Bool3 {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl Bool3 {
    pub const fn new(x: bool, y: bool, z: bool) -> Self {
        Bool3 { x, y, z }
    }

    /// All three components set to `b`.
    pub const fn splat(b: bool) -> Self {
        Bool3::new(b, b, b)
    }

    pub fn get(&self, index: usize) -> Result<bool, IndexOutOfRange> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(IndexOutOfRange(index)),
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut bool, IndexOutOfRange> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            2 => Ok(&mut self.z),
            _ => Err(IndexOutOfRange(index)),
        }
    }

    pub fn set(&mut self, index: usize, value: bool) -> Result<(), IndexOutOfRange> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    pub fn any(&self) -> bool {
        self.x || self.y || self.z
    }

    pub fn all(&self) -> bool {
        self.x && self.y && self.z
    }
}

impl From<bool> for Bool3 {
    fn from(b: bool) -> Self {
        Bool3::splat(b)
    }
}

impl From<[bool; 3]> for Bool3 {
    fn from([x, y, z]: [bool; 3]) -> Self {
        Bool3::new(x, y, z)
    }
}

impl From<Bool3> for [bool; 3] {
    fn from(b: Bool3) -> Self {
        [b.x, b.y, b.z]
    }
}

impl Index<usize> for Bool3 {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", IndexOutOfRange(index)),
        }
    }
}

impl IndexMut<usize> for Bool3 {
    fn index_mut(&mut self, index: usize) -> &mut bool {
        match self.get_mut(index) {
            Ok(component) => component,
            Err(err) => panic!("{}", err),
        }
    }
}

/// A [`Bool3`] was indexed outside `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid Bool3 index {0}")]
pub struct IndexOutOfRange(pub usize);
