//! Document-to-audio pipeline.
//!
//! One run flows strictly one way:
//! ```text
//! ┌───────────┐    ┌───────────┐    ┌─────────────┐    ┌───────────┐    ┌────────┐
//! │ Extracted │───▶│ Segmenter │───▶│ Synthesizer │───▶│ Assembler │───▶│ Writer │
//! │ document  │    │           │    │  (worker)   │    │ +silence  │    │  WAV   │
//! └───────────┘    └───────────┘    └─────────────┘    └───────────┘    └────────┘
//! ```
//! Synthesis runs on a worker thread and results are committed to the
//! assembler strictly in chunk-index order, whatever order they complete in.

pub mod orchestrator;
pub mod report;

pub use orchestrator::{Pipeline, PipelineConfig, RunStage, RunSummary};
pub use report::{ErrorReporter, LogReporter};
