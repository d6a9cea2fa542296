// Per-overlay orchestrator.
//
// An input collaborator hands it one world-space request per frame while a
// gesture is active; the session maps the point, scratches the circle and
// refreshes the packed copy so the presentation layer observes the edit
// before the next frame it renders. The session itself keeps no gesture
// state and no per-request failure paths: anything that could go wrong is
// rejected once, at construction.

use crate::buffer::PixelBuffer;
use crate::eraser;
use crate::error::Error;
use crate::geometry::{self, OverlayGeometry};
use crate::types::{Rgba, Vec2};

/// One overlay, one session. Exclusively owns the pixel buffer and the
/// geometry for its lifetime.
pub struct EraseSession {
    buffer: PixelBuffer,
    geometry: OverlayGeometry,
}

impl EraseSession {
    /// Build a session over a deep copy of the overlay source pixels
    /// (row-major, width x height). Malformed geometry or a source that
    /// does not match its dimensions is fatal here; a session that
    /// constructs will not fail per request.
    pub fn new(
        width: u32,
        height: u32,
        source: &[Rgba],
        geometry: OverlayGeometry,
    ) -> Result<Self, Error> {
        geometry.validate()?;
        let buffer = PixelBuffer::new(width, height, source)?;
        log::debug!(
            "erase session ready: {width}x{height} buffer, overlay rect {:?}, {} px/unit",
            geometry.rect,
            geometry.pixels_per_unit
        );
        Ok(Self { buffer, geometry })
    }

    /// Same, starting from decoded overlay art.
    pub fn from_image(img: &image::RgbaImage, geometry: OverlayGeometry) -> Result<Self, Error> {
        geometry.validate()?;
        let buffer = PixelBuffer::from_image(img)?;
        Ok(Self { buffer, geometry })
    }

    /// One erase tick: map the world point into the buffer, convert the
    /// radius to pixels and clear the circle. Out-of-range positions and
    /// radii are clamped along the way, never rejected; a pointer dragged
    /// slightly past the overlay edge is ordinary input.
    pub fn handle_erase_request(&mut self, world_point: Vec2, world_radius: f32) {
        let pixel = geometry::world_to_buffer(world_point, &self.geometry);
        let radius =
            geometry::world_radius_to_pixel_radius(world_radius, self.geometry.pixels_per_unit);
        log::trace!(
            "erase request: world ({:.3}, {:.3}) -> pixel ({:.1}, {:.1}), r={radius}px",
            world_point.x,
            world_point.y,
            pixel.x,
            pixel.y
        );

        eraser::erase(&mut self.buffer, pixel, radius);

        // Sync point: the display layer sees this edit on its next pull.
        self.buffer.materialize();
    }

    /// Current full contents in packed 0xAARRGGBB form for the display
    /// collaborator. Cheap when nothing changed since the last call.
    pub fn materialize(&mut self) -> &[u32] {
        self.buffer.materialize()
    }

    /// Read access for hosts checking reveal state or persisting edits.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn geometry(&self) -> &OverlayGeometry {
        &self.geometry
    }

    /// Fraction of the displayed rectangle scratched fully transparent,
    /// in [0, 1]. Linear in the rectangle area; meant for occasional
    /// polling (say, on gesture end), not for every frame.
    pub fn revealed_fraction(&self) -> f32 {
        let r = self.geometry.rect;
        let pixels = self.buffer.read_region(r.x, r.y, r.w, r.h);
        if pixels.is_empty() {
            return 0.0;
        }
        let cleared = pixels.iter().filter(|p| p.a == 0).count();
        cleared as f32 / pixels.len() as f32
    }
}
