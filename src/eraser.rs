// Circular alpha clearing, the actual scratch.
//
// One call clears one circle. Work is bounded by the circle's bounding
// box, so a gesture firing every frame stays cheap no matter how large
// the overlay is.

use crate::buffer::PixelBuffer;
use crate::types::Vec2;

/// Zero the alpha of every pixel within `radius` of `center` (a
/// real-valued buffer-space position). Color channels keep their values,
/// which leaves room for partial-reveal blending on top of the mask.
pub fn erase(buffer: &mut PixelBuffer, center: Vec2, radius: i32) {
    let w = buffer.width() as i32;
    let h = buffer.height() as i32;
    let r = radius.max(0);

    // 1) Bounding box around the circle.
    let x0 = (center.x - r as f32).floor() as i32;
    let y0 = (center.y - r as f32).floor() as i32;
    let x1 = (center.x + r as f32).ceil() as i32;
    let y1 = (center.y + r as f32).ceil() as i32;

    // 2) Entirely off the buffer: nothing to scratch.
    if x1 < 0 || y1 < 0 || x0 >= w || y0 >= h {
        log::trace!(
            "erase at ({:.1}, {:.1}) r={r} misses the {w}x{h} buffer",
            center.x,
            center.y
        );
        return;
    }

    // 3) Clamp the box into the grid and grab it in one read.
    let x0 = x0.clamp(0, w - 1);
    let y0 = y0.clamp(0, h - 1);
    let x1 = x1.clamp(0, w - 1);
    let y1 = y1.clamp(0, h - 1);
    let bw = (x1 - x0 + 1) as u32;
    let bh = (y1 - y0 + 1) as u32;

    let mut pixels = buffer.read_region(x0 as u32, y0 as u32, bw, bh);

    // 4) Squared-distance test from each integer pixel center; no sqrt.
    let rr = (r * r) as f32;
    let mut i = 0;
    for y in 0..bh as i32 {
        for x in 0..bw as i32 {
            let dx = (x0 + x) as f32 - center.x;
            let dy = (y0 + y) as f32 - center.y;
            if dx * dx + dy * dy <= rr {
                pixels[i].a = 0;
            }
            i += 1;
        }
    }

    // 5) Put the box back in one write. The write shares the read's
    // pre-clamped box, so the sizes always agree.
    let written = buffer.write_region(x0 as u32, y0 as u32, bw, bh, &pixels);
    debug_assert!(written.is_ok(), "write box must match the read box");
}
