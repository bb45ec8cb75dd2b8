//! QR decoding backend over the `rqrr` crate.

use crate::decode::decoder::QrDecoder;
use crate::decode::result::{Bounds, Detection};
use crate::frame::Frame;

/// Real QR decoder. Converts the frame to luminance, locates symbol grids,
/// and decodes each payload.
pub struct RqrrDecoder;

impl RqrrDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RqrrDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl QrDecoder for RqrrDecoder {
    fn name(&self) -> &'static str {
        "rqrr"
    }

    fn detect(&mut self, frame: &Frame) -> Vec<Detection> {
        let luma = frame.to_luma();
        let width = frame.width as usize;
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            width,
            frame.height as usize,
            |x, y| luma[y * width + x],
        );
        let grids = prepared.detect_grids();
        let mut detections = Vec::with_capacity(grids.len());
        for grid in grids {
            match grid.decode() {
                Ok((_meta, payload)) => {
                    if payload.is_empty() {
                        continue;
                    }
                    let corners = [
                        (grid.bounds[0].x as i32, grid.bounds[0].y as i32),
                        (grid.bounds[1].x as i32, grid.bounds[1].y as i32),
                        (grid.bounds[2].x as i32, grid.bounds[2].y as i32),
                        (grid.bounds[3].x as i32, grid.bounds[3].y as i32),
                    ];
                    detections.push(Detection {
                        payload,
                        bounds: Bounds::from_corners(&corners, frame),
                    });
                }
                // Misreads are expected in compressed video; drop and move on.
                Err(e) => log::debug!("skipping undecodable QR symbol: {}", e),
            }
        }
        detections
    }
}
