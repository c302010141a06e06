//! Text handling: document extraction and chunk segmentation.

pub mod extract;
pub mod segmenter;

pub use extract::extract_text;
pub use segmenter::{Chunk, segment};
