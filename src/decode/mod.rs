mod backends;
mod decoder;
mod result;

pub use backends::{RqrrDecoder, ScriptedDecoder};
pub use decoder::QrDecoder;
pub use result::{Bounds, Detection};
