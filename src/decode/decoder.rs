use crate::decode::result::Detection;
use crate::frame::Frame;

/// QR symbol decoder backend.
///
/// `detect` locates every QR symbol in the frame and decodes each payload to
/// text. Malformed symbols are common in compressed video frames, so a symbol
/// whose payload cannot be decoded is skipped silently rather than reported
/// as an error. The returned order is unspecified; callers must not rely on
/// it.
///
/// Implementations must not mutate the frame; annotation is the caller's
/// responsibility.
pub trait QrDecoder {
    /// Backend identifier for logs.
    fn name(&self) -> &'static str;

    /// Locate and decode all QR symbols in one frame.
    fn detect(&mut self, frame: &Frame) -> Vec<Detection>;
}
