// World <-> pixel mapping for the overlay.
//
// The overlay displays a sub-rectangle of a parent atlas texture;
// `pixels_per_unit` ties pixel distance to world distance, and the world
// origin sits at the center of the displayed rectangle. The same geometry
// answers both "which pixel is under this world point" and "where should a
// host clamp pointer input", so the two can never drift apart.

use crate::error::Error;
use crate::types::{Rect, Vec2};

/// Where the overlay's pixels live and how they relate to world space.
/// Set once per overlay: the displayed region never changes, only its
/// pixel contents do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayGeometry {
    /// Displayed sub-rectangle within the parent atlas, in pixels.
    pub rect: Rect,
    /// Buffer pixels per world unit.
    pub pixels_per_unit: f32,
    /// Normalized pivot within the rectangle, each component in [0, 1].
    /// Kept for hosts that position the overlay; the mapping origin is
    /// always the rectangle center.
    pub pivot: Vec2,
}

impl OverlayGeometry {
    /// Validated constructor. `centered` covers the common case.
    pub fn new(rect: Rect, pixels_per_unit: f32, pivot: Vec2) -> Result<Self, Error> {
        let geo = Self {
            rect,
            pixels_per_unit,
            pivot,
        };
        geo.validate()?;
        Ok(geo)
    }

    /// Geometry with the pivot at the rectangle center.
    pub fn centered(rect: Rect, pixels_per_unit: f32) -> Result<Self, Error> {
        Self::new(rect, pixels_per_unit, Vec2::new(0.5, 0.5))
    }

    /// Check the invariants: non-empty rectangle, positive pixel density,
    /// pivot inside the unit square.
    pub fn validate(&self) -> Result<(), Error> {
        if self.rect.is_empty() {
            return Err(Error::InvalidGeometry("overlay rectangle is empty"));
        }
        // Written as a negated comparison so NaN fails too.
        if !(self.pixels_per_unit > 0.0) {
            return Err(Error::InvalidGeometry("pixels per unit must be positive"));
        }
        if !(0.0..=1.0).contains(&self.pivot.x) || !(0.0..=1.0).contains(&self.pivot.y) {
            return Err(Error::InvalidGeometry("pivot must lie in [0, 1]"));
        }
        Ok(())
    }

    /// Overlay size in world units.
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(
            self.rect.w as f32 / self.pixels_per_unit,
            self.rect.h as f32 / self.pixels_per_unit,
        )
    }

    /// Min and max world corners of the displayed overlay, derived from the
    /// same fields that drive the pixel mapping.
    pub fn world_bounds(&self) -> (Vec2, Vec2) {
        let size = self.world_size();
        (
            Vec2::new(-0.5 * size.x, -0.5 * size.y),
            Vec2::new(0.5 * size.x, 0.5 * size.y),
        )
    }

    /// Clamp a world point into the displayed bounds. Hosts use this to
    /// keep a visible eraser cursor on the overlay.
    pub fn clamp_world(&self, p: Vec2) -> Vec2 {
        let (min, max) = self.world_bounds();
        Vec2::new(p.x.clamp(min.x, max.x), p.y.clamp(min.y, max.y))
    }
}

/// Map a world-space point to a real-valued pixel position in the buffer.
///
/// The result is deliberately neither floored nor clamped: a point near the
/// overlay edge can legitimately land just outside [0, W), and the eraser
/// clamps its own bounding box.
pub fn world_to_buffer(world: Vec2, geo: &OverlayGeometry) -> Vec2 {
    // The overlay is axis-aligned and does not move, so local == world.
    let size = geo.world_size();

    // Normalized position with the origin at the rectangle center.
    let u = world.x / size.x + 0.5;
    let v = world.y / size.y + 0.5;

    // Into the atlas sub-rectangle.
    Vec2::new(
        geo.rect.x as f32 + u * geo.rect.w as f32,
        geo.rect.y as f32 + v * geo.rect.h as f32,
    )
}

/// Inverse of `world_to_buffer`. In-rectangle points round-trip within
/// floating-point error.
pub fn buffer_to_world(pixel: Vec2, geo: &OverlayGeometry) -> Vec2 {
    let size = geo.world_size();
    let u = (pixel.x - geo.rect.x as f32) / geo.rect.w as f32;
    let v = (pixel.y - geo.rect.y as f32) / geo.rect.h as f32;
    Vec2::new((u - 0.5) * size.x, (v - 0.5) * size.y)
}

/// Convert an eraser radius from world units to whole pixels.
/// Floored to 2: an active gesture always erases something, even as the
/// requested radius approaches zero.
pub fn world_radius_to_pixel_radius(world_radius: f32, pixels_per_unit: f32) -> i32 {
    ((world_radius * pixels_per_unit).round() as i32).max(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    fn full_atlas() -> OverlayGeometry {
        OverlayGeometry::centered(Rect::new(0, 0, 100, 100), 100.0).unwrap()
    }

    #[test]
    fn world_origin_maps_to_rect_center() {
        let geo = full_atlas();
        assert_close(world_to_buffer(Vec2::new(0.0, 0.0), &geo), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn right_edge_maps_to_rect_width() {
        // 100 px at 100 px/unit is 1 world unit wide, so +0.5 is the edge.
        let geo = full_atlas();
        assert_close(world_to_buffer(Vec2::new(0.5, 0.0), &geo), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn sub_rectangle_offsets_apply() {
        let geo = OverlayGeometry::centered(Rect::new(64, 32, 128, 64), 64.0).unwrap();
        // Center of the displayed region.
        assert_close(world_to_buffer(Vec2::new(0.0, 0.0), &geo), Vec2::new(128.0, 64.0));
    }

    #[test]
    fn out_of_rect_points_pass_through_unclamped() {
        let geo = full_atlas();
        let px = world_to_buffer(Vec2::new(1.0, 0.0), &geo);
        assert!(px.x > 100.0);
    }

    #[test]
    fn world_buffer_round_trip() {
        let geo = OverlayGeometry::centered(Rect::new(10, 20, 300, 200), 37.5).unwrap();
        for &p in &[
            Vec2::new(0.0, 0.0),
            Vec2::new(1.25, -0.75),
            Vec2::new(-3.9, 2.6),
        ] {
            assert_close(buffer_to_world(world_to_buffer(p, &geo), &geo), p);
        }
    }

    #[test]
    fn pixel_radius_never_below_two() {
        assert_eq!(world_radius_to_pixel_radius(0.0, 100.0), 2);
        assert_eq!(world_radius_to_pixel_radius(0.001, 100.0), 2);
        assert_eq!(world_radius_to_pixel_radius(-1.0, 100.0), 2);
        assert_eq!(world_radius_to_pixel_radius(0.5, 100.0), 50);
    }

    #[test]
    fn validation_catches_bad_geometry() {
        assert!(matches!(
            OverlayGeometry::centered(Rect::new(0, 0, 0, 100), 100.0),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(matches!(
            OverlayGeometry::centered(Rect::new(0, 0, 100, 100), 0.0),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(matches!(
            OverlayGeometry::centered(Rect::new(0, 0, 100, 100), -2.0),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(matches!(
            OverlayGeometry::new(Rect::new(0, 0, 8, 8), 1.0, Vec2::new(1.5, 0.5)),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn clamp_world_uses_mapping_bounds() {
        let geo = full_atlas();
        // 1 world unit square centered on the origin.
        let clamped = geo.clamp_world(Vec2::new(3.0, -3.0));
        assert_close(clamped, Vec2::new(0.5, -0.5));
        // Mapping the clamped point lands on the rectangle edge.
        assert_close(world_to_buffer(clamped, &geo), Vec2::new(100.0, 0.0));
    }
}
