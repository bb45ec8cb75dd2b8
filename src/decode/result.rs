use crate::frame::Frame;

/// One decoded QR symbol found in a single frame.
///
/// Detections are produced per frame and discarded once the frame has been
/// annotated and consumed; nothing downstream holds on to them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detection {
    /// Decoded text payload (UTF-8). Never empty; symbols whose byte payload
    /// fails text decoding are dropped by the backend.
    pub payload: String,
    /// Axis-aligned bounding region in frame pixels.
    pub bounds: Bounds,
}

/// Axis-aligned bounding rectangle, clamped to the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Bounds {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Bounding rectangle of a symbol's four corner points, clamped to the
    /// frame. Corners may land slightly outside the frame on partially
    /// visible symbols.
    pub fn from_corners(corners: &[(i32, i32); 4], frame: &Frame) -> Self {
        let min_x = corners.iter().map(|c| c.0).min().unwrap_or(0).max(0) as u32;
        let min_y = corners.iter().map(|c| c.1).min().unwrap_or(0).max(0) as u32;
        let max_x = corners.iter().map(|c| c.0).max().unwrap_or(0).max(0) as u32;
        let max_y = corners.iter().map(|c| c.1).max().unwrap_or(0).max(0) as u32;
        let max_x = max_x.min(frame.width.saturating_sub(1));
        let max_y = max_y.min(frame.height.saturating_sub(1));
        let min_x = min_x.min(max_x);
        let min_y = min_y.min(max_y);
        Self {
            x: min_x,
            y: min_y,
            w: max_x - min_x + 1,
            h: max_y - min_y + 1,
        }
    }
}
