pub mod config;
pub mod geometry;

pub use geometry::{
    hex::{Coordinate, Direction, Layout},
    Bool3, Vector2,
};
