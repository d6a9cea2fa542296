// Everything that can go wrong while wiring up an overlay.
// All of it is construction/setup time; per-frame erasing is designed
// not to fail once a session exists.

/// Crate error type. One variant per failure site.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The initial image does not describe a width x height pixel grid.
    #[error("invalid source image: {width}x{height} needs {expected} pixels, got {actual}")]
    InvalidSource {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// A region write was handed a pixel slice that does not match the
    /// region's dimensions.
    #[error("region size mismatch: {w}x{h} region needs {expected} pixels, got {actual}")]
    SizeMismatch {
        w: u32,
        h: u32,
        expected: usize,
        actual: usize,
    },

    /// Overlay geometry that can never map a world point to a pixel.
    #[error("invalid overlay geometry: {0}")]
    InvalidGeometry(&'static str),
}
