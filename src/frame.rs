//! RGB frame buffer.
//!
//! `Frame` is the unit of work flowing through the pipeline: sources produce
//! frames, the decoder reads them, annotation draws on them, and display
//! sinks consume them. Pixels are packed RGB24 (3 bytes per pixel, row-major,
//! no stride padding). The ordinal `index` starts at 1 for the first frame of
//! a video and drives the sampling policy.

use anyhow::{ensure, Result};

/// A single decoded color frame.
#[derive(Clone, Debug)]
pub struct Frame {
    /// 1-based ordinal within the video it came from.
    pub index: u64,
    pub width: u32,
    pub height: u32,
    rgb: Vec<u8>,
}

impl Frame {
    pub fn new(index: u64, width: u32, height: u32, rgb: Vec<u8>) -> Result<Self> {
        ensure!(width > 0 && height > 0, "frame dimensions must be non-zero");
        ensure!(
            rgb.len() == (width as usize) * (height as usize) * 3,
            "frame buffer is {} bytes, expected {}x{}x3",
            rgb.len(),
            width,
            height
        );
        Ok(Self {
            index,
            width,
            height,
            rgb,
        })
    }

    pub fn rgb(&self) -> &[u8] {
        &self.rgb
    }

    /// Convert to single-channel luminance for QR detection. Color carries no
    /// information the symbol decoder uses. One byte per pixel, row-major.
    pub fn to_luma(&self) -> Vec<u8> {
        let mut luma = Vec::with_capacity((self.width as usize) * (self.height as usize));
        for px in self.rgb.chunks_exact(3) {
            // Integer BT.601 weights.
            let y = (299 * px[0] as u32 + 587 * px[1] as u32 + 114 * px[2] as u32) / 1000;
            luma.push(y as u8);
        }
        luma
    }

    /// Overwrite one pixel. Out-of-bounds coordinates are ignored, so overlay
    /// drawing near frame edges does not need its own clamping.
    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = ((y as usize) * (self.width as usize) + x as usize) * 3;
        self.rgb[offset..offset + 3].copy_from_slice(&color);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y as usize) * (self.width as usize) + x as usize) * 3;
        Some([self.rgb[offset], self.rgb[offset + 1], self.rgb[offset + 2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        assert!(Frame::new(1, 4, 4, vec![0u8; 10]).is_err());
        assert!(Frame::new(1, 0, 4, vec![]).is_err());
        assert!(Frame::new(1, 4, 4, vec![0u8; 48]).is_ok());
    }

    #[test]
    fn luma_conversion_weights_channels() {
        // One red, one green, one blue, one white pixel.
        let rgb = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let frame = Frame::new(1, 4, 1, rgb).unwrap();
        let luma = frame.to_luma();
        assert_eq!(luma, vec![76, 149, 29, 255]); // 0.299R + 0.587G + 0.114B
    }

    #[test]
    fn set_pixel_ignores_out_of_bounds() {
        let mut frame = Frame::new(1, 2, 2, vec![0u8; 12]).unwrap();
        frame.set_pixel(5, 5, [255, 255, 255]);
        assert!(frame.rgb().iter().all(|&b| b == 0));
        frame.set_pixel(1, 1, [1, 2, 3]);
        assert_eq!(frame.pixel(1, 1), Some([1, 2, 3]));
    }
}
