//! Speech synthesis boundary: the engine trait and its backends.

pub mod command;
pub mod engine;

pub use command::CommandSynthesizer;
pub use engine::{MockSynthesizer, SpeechSynthesizer};
