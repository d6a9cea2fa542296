// The overlay's writable pixel grid.
//
// Built once from the overlay art as a deep copy, so the shared art asset
// is never mutated. The eraser then edits it in sub-rectangle sized bites,
// and `materialize` repacks only what changed since the last call into the
// u32 form a presentation layer can push straight to a texture or window.

use crate::error::Error;
use crate::types::{Rect, Rgba};

#[derive(Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    cells: Vec<Rgba>,
    // Presentation copy, 0xAARRGGBB per pixel, refreshed lazily.
    packed: Vec<u32>,
    // Union of every region written since the last materialize.
    dirty: Option<Rect>,
}

impl PixelBuffer {
    /// Allocate a width x height grid holding a deep copy of `pixels`
    /// (row-major). Dimensions are fixed for the buffer's lifetime.
    pub fn new(width: u32, height: u32, pixels: &[Rgba]) -> Result<Self, Error> {
        let expected = width as usize * height as usize;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(Error::InvalidSource {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        let cells = pixels.to_vec();
        let packed = cells.iter().map(|c| c.pack()).collect();
        log::debug!("pixel buffer created: {width}x{height}");

        Ok(Self {
            width,
            height,
            cells,
            packed,
            dirty: None,
        })
    }

    /// Build from decoded overlay art. Only the pixels are copied out; the
    /// image itself stays untouched.
    pub fn from_image(img: &image::RgbaImage) -> Result<Self, Error> {
        let (w, h) = img.dimensions();
        let mut cells = Vec::with_capacity(w as usize * h as usize);
        for px in img.pixels() {
            cells.push(Rgba::new(px[0], px[1], px[2], px[3]));
        }
        Self::new(w, h, &cells)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The pixel at (x, y), or None outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        (x < self.width && y < self.height)
            .then(|| self.cells[(y * self.width + x) as usize])
    }

    /// Row-major copy of the requested rectangle, clamped to the buffer.
    /// A request entirely outside comes back empty; callers that pre-clamp
    /// get exactly the shape they asked for.
    pub fn read_region(&self, x: u32, y: u32, w: u32, h: u32) -> Vec<Rgba> {
        let x = x.min(self.width);
        let y = y.min(self.height);
        let w = w.min(self.width - x);
        let h = h.min(self.height - y);

        let mut out = Vec::with_capacity(w as usize * h as usize);
        for row in y..y + h {
            let start = (row * self.width + x) as usize;
            out.extend_from_slice(&self.cells[start..start + w as usize]);
        }
        out
    }

    /// Overwrite the rectangle in place. `pixels` must hold exactly w*h
    /// entries; rows and columns falling outside the buffer are dropped,
    /// mirroring the clamp in `read_region`, so a read-modify-write round
    /// trip over the same rectangle always agrees.
    pub fn write_region(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        pixels: &[Rgba],
    ) -> Result<(), Error> {
        let expected = w as usize * h as usize;
        if pixels.len() != expected {
            return Err(Error::SizeMismatch {
                w,
                h,
                expected,
                actual: pixels.len(),
            });
        }

        let cw = w.min(self.width.saturating_sub(x));
        let ch = h.min(self.height.saturating_sub(y));
        if cw == 0 || ch == 0 {
            return Ok(());
        }

        for row in 0..ch {
            let src = (row * w) as usize;
            let dst = ((y + row) * self.width + x) as usize;
            self.cells[dst..dst + cw as usize]
                .copy_from_slice(&pixels[src..src + cw as usize]);
        }

        let written = Rect::new(x, y, cw, ch);
        self.dirty = Some(match self.dirty {
            Some(d) => d.union(written),
            None => written,
        });
        Ok(())
    }

    /// True when edits are waiting to be repacked.
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_some()
    }

    /// Repack whatever changed since the last call and hand out the full
    /// packed contents. The repack cost scales with the dirty area, not
    /// with the buffer, and a clean buffer pays nothing.
    pub fn materialize(&mut self) -> &[u32] {
        if let Some(d) = self.dirty.take() {
            log::trace!("materialize: repacking {}x{} at ({}, {})", d.w, d.h, d.x, d.y);
            for row in d.y..d.y + d.h {
                for col in d.x..d.x + d.w {
                    let i = (row * self.width + col) as usize;
                    self.packed[i] = self.cells[i].pack();
                }
            }
        }
        &self.packed
    }
}
