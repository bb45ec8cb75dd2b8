//! Live preview sinks for annotated frames.
//!
//! The scanner pushes every sampled frame here after annotation. This is an
//! advisory presentation side effect: sinks must not influence scanner state,
//! and a failing sink never fails a scan.

use std::path::PathBuf;

use image::RgbImage;

use crate::frame::Frame;

/// Receives annotated frames as scanning progresses.
pub trait DisplaySink {
    fn show(&mut self, frame: &Frame);
}

/// Discards all frames.
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn show(&mut self, _frame: &Frame) {}
}

/// Writes the most recent annotated frame to a PNG file, overwriting the
/// previous one. An image viewer pointed at the path acts as a crude live
/// display.
pub struct PngPreview {
    path: PathBuf,
}

impl PngPreview {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DisplaySink for PngPreview {
    fn show(&mut self, frame: &Frame) {
        let Some(img) = RgbImage::from_raw(frame.width, frame.height, frame.rgb().to_vec())
        else {
            log::warn!("preview skipped: frame buffer does not match dimensions");
            return;
        };
        if let Err(e) = img.save(&self.path) {
            log::warn!("failed to write preview {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_writes_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.png");
        let mut sink = PngPreview::new(path.clone());

        let frame = Frame::new(1, 8, 6, vec![200u8; 8 * 6 * 3]).unwrap();
        sink.show(&frame);

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (8, 6));
        assert_eq!(img.get_pixel(0, 0).0, [200, 200, 200]);
    }
}
