//! Scratch-off overlay erasure.
//!
//! An opaque overlay image conceals a hidden background. A pointer-driven
//! eraser clears circular regions of the overlay's alpha channel, one
//! request per interaction frame, progressively revealing what is
//! underneath. What you see: wherever the eraser passes, the overlay turns
//! transparent and the background shows through.
//!
//! The crate is the erasure core only. Input polling, camera motion and
//! rendering live in the host; they feed [`EraseSession`] world-space
//! requests and pull the edited pixels back out through
//! [`EraseSession::materialize`].
//!
//! ```
//! use scratch_reveal::{EraseSession, OverlayGeometry, Rect, Rgba, Vec2};
//!
//! // A 100x100 opaque overlay, one world unit across, origin at its center.
//! let art = vec![Rgba::opaque(120, 120, 120); 100 * 100];
//! let geometry = OverlayGeometry::centered(Rect::new(0, 0, 100, 100), 100.0)?;
//! let mut session = EraseSession::new(100, 100, &art, geometry)?;
//!
//! // One frame of an active gesture: scratch at the overlay center.
//! session.handle_erase_request(Vec2::new(0.0, 0.0), 0.1);
//!
//! // The display layer pulls packed 0xAARRGGBB pixels.
//! let frame = session.materialize();
//! assert_eq!(frame[50 * 100 + 50] >> 24, 0); // alpha cleared at the center
//! # Ok::<(), scratch_reveal::Error>(())
//! ```

mod buffer;
mod eraser;
mod error;
mod geometry;
mod session;
mod types;

pub use buffer::PixelBuffer;
pub use eraser::erase;
pub use error::Error;
pub use geometry::{
    OverlayGeometry, buffer_to_world, world_radius_to_pixel_radius, world_to_buffer,
};
pub use session::EraseSession;
pub use types::{Rect, Rgba, Vec2};
