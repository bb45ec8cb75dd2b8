//! Deterministic synthetic frame source.

use anyhow::Result;

use crate::frame::Frame;
use crate::source::FrameSource;

const WIDTH: u32 = 64;
const HEIGHT: u32 = 48;

/// Produces a fixed number of small gradient frames. Frame content varies by
/// ordinal so downstream consumers see distinct buffers, but the sequence is
/// fully deterministic.
pub struct SyntheticSource {
    total: u64,
    produced: u64,
}

impl SyntheticSource {
    pub const DEFAULT_FRAMES: u64 = 90;

    pub fn new(total: u64) -> Self {
        Self { total, produced: 0 }
    }
}

impl FrameSource for SyntheticSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        if self.produced >= self.total {
            return Ok(None);
        }
        self.produced += 1;

        let pixel_count = (WIDTH * HEIGHT * 3) as usize;
        let mut rgb = vec![0u8; pixel_count];
        for (i, byte) in rgb.iter_mut().enumerate() {
            *byte = ((i as u64 + self.produced * 7) % 256) as u8;
        }

        Ok(Some(Frame::new(self.produced, WIDTH, HEIGHT, rgb)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_exactly_the_requested_frames() {
        let mut source = SyntheticSource::new(3);
        let mut indices = Vec::new();
        while let Some(frame) = source.next_frame().unwrap() {
            indices.push(frame.index);
        }
        assert_eq!(indices, vec![1, 2, 3]);
        // Exhausted sources stay exhausted.
        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn consecutive_frames_differ() {
        let mut source = SyntheticSource::new(2);
        let a = source.next_frame().unwrap().unwrap();
        let b = source.next_frame().unwrap().unwrap();
        assert_ne!(a.rgb(), b.rgb());
    }
}
