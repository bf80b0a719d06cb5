//! Rendering: cell buffer, painter, and terminal output.

mod buffer;
mod paint;
mod term;

pub use buffer::FrameBuffer;
pub use paint::paint;
pub use term::DiffRenderer;
