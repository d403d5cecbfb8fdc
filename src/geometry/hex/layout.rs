use super::{
    conversion, coordinate::Coordinate, vertices, vertices_into, OUTER_TO_INNER_RADIUS,
    VERTEX_COUNT,
};
use crate::geometry::Vector2;
use serde::{Deserialize, Serialize};

/// A hex grid with a fixed cell circumradius.
///
/// The free functions in [`hex`](super) take the radius on every call and
/// trust the caller to keep it consistent and nonzero. A `Layout` validates the
/// radius once, so none of its methods can hit the zero-radius precondition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Layout {
    radius: f32,
}

impl Layout {
    /// Create a layout whose cells have circumradius `radius`.
    ///
    /// `radius` must be finite and strictly positive.
    pub fn new(radius: f32) -> Result<Self, InvalidRadius> {
        if radius.is_finite() && radius > 0.0 {
            Ok(Layout { radius })
        } else {
            Err(InvalidRadius(radius))
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Distance from a cell's center to the midpoint of its edges.
    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.radius * OUTER_TO_INNER_RADIUS
    }

    #[inline]
    pub fn to_world(&self, coordinate: Coordinate) -> Vector2 {
        conversion::to_world(coordinate, self.radius)
    }

    #[inline]
    pub fn to_axial(&self, position: Vector2) -> Coordinate {
        conversion::to_axial(position, self.radius)
    }

    /// Hexagon corners around `center`, scaled by this layout's radius.
    #[inline]
    pub fn vertices(&self, center: Vector2) -> [Vector2; VERTEX_COUNT] {
        vertices(center, self.radius)
    }

    /// Hexagon corners of the cell at `coordinate`.
    pub fn hexagon(&self, coordinate: Coordinate) -> [Vector2; VERTEX_COUNT] {
        self.vertices(self.to_world(coordinate))
    }

    #[inline]
    pub fn vertices_into(&self, target: &mut [Vector2; VERTEX_COUNT], center: Vector2) {
        vertices_into(target, center, self.radius)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout { radius: 1.0 }
    }
}

impl TryFrom<f32> for Layout {
    type Error = InvalidRadius;

    fn try_from(radius: f32) -> Result<Self, Self::Error> {
        Layout::new(radius)
    }
}

impl From<Layout> for f32 {
    fn from(layout: Layout) -> f32 {
        layout.radius
    }
}

/// A layout radius was zero, negative, or not finite.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("hexagon radius must be finite and positive; got {0}")]
pub struct InvalidRadius(pub f32);

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_rejects_bad_radius() {
        for &radius in &[0.0, -0.0, -1.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(Layout::new(radius).is_err(), "accepted {}", radius);
        }
        assert_eq!(Layout::new(2.5).map(|layout| layout.radius()), Ok(2.5));
    }

    #[test]
    fn test_matches_free_functions() {
        let layout = Layout::new(3.0).unwrap();
        let coordinate = Coordinate::new(-2, 5);
        let world = layout.to_world(coordinate);
        assert_eq!(world, conversion::to_world(coordinate, 3.0));
        assert_eq!(layout.to_axial(world), coordinate);
        assert_eq!(layout.vertices(world), vertices(world, 3.0));

        let mut buffer = [Vector2::ZERO; VERTEX_COUNT];
        layout.vertices_into(&mut buffer, world);
        assert_eq!(buffer, layout.vertices(world));
    }

    #[test]
    fn test_hexagon_is_centered_on_cell() {
        let layout = Layout::new(1.5).unwrap();
        for &(q, r) in &[(0, 0), (3, -7), (-12, 4), (i32::MAX, 0)] {
            let coordinate = Coordinate::new(q, r);
            let center = conversion::to_world(coordinate, 1.5);
            assert_eq!(layout.hexagon(coordinate), vertices(center, 1.5));
        }
    }

    #[test]
    fn test_inner_radius_is_half_neighbor_spacing() {
        let layout = Layout::default();
        let spacing = layout.to_world(Coordinate::new(1, 0)).length();
        assert_approx_eq!(layout.inner_radius() * 2.0, spacing, 1e-6);
    }

    #[test]
    fn test_serde_validates() {
        let layout: Layout = toml::from_str::<Wrapper>("layout = 2.0").unwrap().layout;
        assert_eq!(layout.radius(), 2.0);
        assert!(toml::from_str::<Wrapper>("layout = -2.0").is_err());
        assert_eq!(
            toml::to_string(&Wrapper { layout }).unwrap().trim(),
            "layout = 2.0"
        );
    }

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        layout: Layout,
    }
}
