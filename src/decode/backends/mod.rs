mod rqrr;
mod scripted;

pub use self::rqrr::RqrrDecoder;
pub use scripted::ScriptedDecoder;
