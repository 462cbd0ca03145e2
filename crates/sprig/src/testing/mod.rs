/// Sample trees for tests.
pub mod fixtures;
/// A painter that records draw calls.
pub mod painter;

pub use painter::{DrawCall, RecordingPainter};
