//! Scripted decoder backend for tests.

use std::collections::HashMap;

use crate::decode::decoder::QrDecoder;
use crate::decode::result::{Bounds, Detection};
use crate::frame::Frame;

/// Test backend that reports pre-programmed detections keyed by frame
/// ordinal, and records every ordinal it was asked to decode.
pub struct ScriptedDecoder {
    script: HashMap<u64, Vec<Detection>>,
    seen: Vec<u64>,
}

impl ScriptedDecoder {
    pub fn new() -> Self {
        Self {
            script: HashMap::new(),
            seen: Vec::new(),
        }
    }

    /// Program one detection with a default bounding region at `index`.
    pub fn with_payload_at(self, index: u64, payload: &str) -> Self {
        self.with_detection_at(
            index,
            Detection {
                payload: payload.to_string(),
                bounds: Bounds::new(8, 8, 24, 24),
            },
        )
    }

    pub fn with_detection_at(mut self, index: u64, detection: Detection) -> Self {
        self.script.entry(index).or_default().push(detection);
        self
    }

    /// Frame ordinals handed to this decoder, in order.
    pub fn seen(&self) -> &[u64] {
        &self.seen
    }
}

impl Default for ScriptedDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl QrDecoder for ScriptedDecoder {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn detect(&mut self, frame: &Frame) -> Vec<Detection> {
        self.seen.push(frame.index);
        self.script.get(&frame.index).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_programmed_frames() {
        let mut decoder = ScriptedDecoder::new()
            .with_payload_at(3, "CODE-1")
            .with_payload_at(3, "CODE-2")
            .with_payload_at(7, "CODE-3");

        let blank = |i| Frame::new(i, 8, 8, vec![0u8; 8 * 8 * 3]).unwrap();

        assert!(decoder.detect(&blank(1)).is_empty());
        assert_eq!(decoder.detect(&blank(3)).len(), 2);
        assert_eq!(decoder.detect(&blank(7))[0].payload, "CODE-3");
        assert_eq!(decoder.seen(), &[1, 3, 7]);
    }
}
