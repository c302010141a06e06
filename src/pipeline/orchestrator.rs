//! Drives one document-to-audio run from segmentation to the written file.

use crate::audio::assembler::assemble;
use crate::audio::waveform::Waveform;
use crate::audio::writer::write_wav;
use crate::config::FailurePolicy;
use crate::defaults;
use crate::error::{LectorError, Result};
use crate::output;
use crate::pipeline::report::{ErrorReporter, LogReporter};
use crate::synth::engine::SpeechSynthesizer;
use crate::text::segmenter::{Chunk, segment};
use crossbeam_channel::{Receiver, RecvTimeoutError, unbounded};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Stages of a single pipeline run.
///
/// A run progresses `Idle → Segmenting → Synthesizing → Assembling →
/// Writing → Done`; `Failed` is reachable from any stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Idle,
    Segmenting,
    Synthesizing,
    Assembling,
    Writing,
    Done,
    Failed,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunStage::Idle => "idle",
            RunStage::Segmenting => "segmenting",
            RunStage::Synthesizing => "synthesizing",
            RunStage::Assembling => "assembling",
            RunStage::Writing => "writing",
            RunStage::Done => "done",
            RunStage::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Configuration for the pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum words per synthesis chunk
    pub max_words_per_chunk: usize,
    /// Sample rate every stage must agree on
    pub sample_rate: u32,
    /// Silence inserted between consecutive chunk waveforms
    pub inter_chunk_silence_secs: f64,
    /// What to do when one chunk fails to synthesize
    pub failure_policy: FailurePolicy,
    /// Per-chunk synthesis bound; expiry counts as a chunk failure
    pub synthesis_timeout: Option<Duration>,
    /// Suppress progress output
    pub quiet: bool,
    /// Verbosity level (0=progress only, 1=stage transitions)
    pub verbosity: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_words_per_chunk: defaults::MAX_WORDS_PER_CHUNK,
            sample_rate: defaults::SAMPLE_RATE,
            inter_chunk_silence_secs: defaults::INTER_CHUNK_SILENCE_SECS,
            failure_policy: FailurePolicy::default(),
            synthesis_timeout: None,
            quiet: false,
            verbosity: 0,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of chunks the document segmented into
    pub chunk_count: usize,
    /// Indices of chunks replaced by silence under skip-with-silence
    pub skipped_chunks: Vec<usize>,
    /// Total duration of the written audio in seconds
    pub duration_secs: f64,
}

/// Document pipeline: Segmenter → Synthesizer → Assembler → Writer.
pub struct Pipeline {
    config: PipelineConfig,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    reporter: Arc<dyn ErrorReporter>,
}

impl Pipeline {
    /// Creates a new pipeline with default error reporter.
    pub fn new(config: PipelineConfig, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self {
            config,
            synthesizer,
            reporter: Arc::new(LogReporter),
        }
    }

    /// Sets a custom error reporter.
    pub fn with_error_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Runs the whole pipeline: segment `document`, synthesize every chunk,
    /// assemble with inter-chunk silence, and write to `destination`.
    ///
    /// Returns the run summary on `Done`; any fatal error leaves the run
    /// `Failed` and propagates to the caller.
    pub fn run(&self, document: &str, destination: &Path) -> Result<RunSummary> {
        let mut stage = RunStage::Idle;
        let outcome = self.run_to_completion(document, destination, &mut stage);
        if outcome.is_err() {
            self.enter_stage(&mut stage, RunStage::Failed);
        }
        outcome
    }

    fn enter_stage(&self, stage: &mut RunStage, next: RunStage) {
        *stage = next;
        if self.config.verbosity >= 1 {
            output::render_stage(&next.to_string());
        }
    }

    fn run_to_completion(
        &self,
        document: &str,
        destination: &Path,
        stage: &mut RunStage,
    ) -> Result<RunSummary> {
        self.enter_stage(stage, RunStage::Segmenting);
        let chunks = segment(document, self.config.max_words_per_chunk)?;

        self.enter_stage(stage, RunStage::Synthesizing);
        let (waveforms, skipped_chunks) = self.synthesize_all(&chunks)?;

        self.enter_stage(stage, RunStage::Assembling);
        let silence = Waveform::silence(self.config.inter_chunk_silence_secs, self.config.sample_rate);
        let assembled = assemble(&waveforms, &silence)?;

        self.enter_stage(stage, RunStage::Writing);
        write_wav(&assembled, destination)?;

        self.enter_stage(stage, RunStage::Done);
        Ok(RunSummary {
            chunk_count: chunks.len(),
            skipped_chunks,
            duration_secs: assembled.duration_secs(),
        })
    }

    /// Synthesizes all chunks through a worker thread, committing results
    /// strictly in index order.
    ///
    /// The worker is the only caller of the engine during a run, so
    /// non-reentrant engines are safe. A timed-out chunk's stale result is
    /// discarded by index when it eventually arrives.
    fn synthesize_all(&self, chunks: &[Chunk]) -> Result<(Vec<Waveform>, Vec<usize>)> {
        let mut waveforms = Vec::with_capacity(chunks.len());
        let mut skipped = Vec::new();
        if chunks.is_empty() {
            return Ok((waveforms, skipped));
        }

        let (job_tx, job_rx) = unbounded::<(usize, String)>();
        let (result_tx, result_rx) = unbounded::<(usize, Result<Waveform>)>();

        let engine = Arc::clone(&self.synthesizer);
        let worker = thread::spawn(move || {
            while let Ok((index, text)) = job_rx.recv() {
                let outcome = engine.synthesize(&text);
                if result_tx.send((index, outcome)).is_err() {
                    break;
                }
            }
        });

        // Issue every job up front; the worker drains them in index order.
        for chunk in chunks {
            if job_tx.send((chunk.index, chunk.text.clone())).is_err() {
                break;
            }
        }
        drop(job_tx);

        let total = chunks.len();
        for chunk in chunks {
            if !self.config.quiet {
                output::render_chunk_progress(chunk.index, total, &chunk.text);
            }

            match self.await_chunk(&result_rx, chunk.index) {
                Ok(waveform) => {
                    if waveform.sample_rate != self.config.sample_rate {
                        return Err(LectorError::SampleRateMismatch {
                            expected: self.config.sample_rate,
                            actual: waveform.sample_rate,
                        });
                    }
                    waveforms.push(waveform);
                }
                Err(err) => {
                    if matches!(err, LectorError::SampleRateMismatch { .. })
                        || self.config.failure_policy == FailurePolicy::Abort
                    {
                        return Err(err);
                    }

                    self.reporter.report("synthesizing", &err);
                    if !self.config.quiet {
                        output::render_chunk_skipped(chunk.index);
                    }
                    skipped.push(chunk.index);
                    waveforms.push(Waveform::silence(
                        self.config.inter_chunk_silence_secs,
                        self.config.sample_rate,
                    ));
                }
            }
        }

        drop(result_rx);
        if worker.join().is_err() {
            eprintln!("lector: synthesis worker panicked");
        }

        Ok((waveforms, skipped))
    }

    /// Waits for the result of chunk `index`, discarding stale results from
    /// chunks that already timed out.
    fn await_chunk(
        &self,
        result_rx: &Receiver<(usize, Result<Waveform>)>,
        index: usize,
    ) -> Result<Waveform> {
        loop {
            let (received_index, outcome) = match self.config.synthesis_timeout {
                Some(timeout) => result_rx.recv_timeout(timeout).map_err(|e| match e {
                    RecvTimeoutError::Timeout => LectorError::ChunkSynthesis {
                        chunk_index: index,
                        message: format!(
                            "timed out after {}",
                            humantime::format_duration(timeout)
                        ),
                    },
                    RecvTimeoutError::Disconnected => {
                        LectorError::Other("synthesis worker exited unexpectedly".to_string())
                    }
                })?,
                None => result_rx.recv().map_err(|_| {
                    LectorError::Other("synthesis worker exited unexpectedly".to_string())
                })?,
            };

            if received_index < index {
                // Stale result from a chunk already counted as failed
                continue;
            }

            return match outcome {
                Ok(waveform) => Ok(waveform),
                // A misconfigured engine is fatal, not a per-chunk failure
                Err(err @ LectorError::SampleRateMismatch { .. }) => Err(err),
                Err(err) => Err(LectorError::ChunkSynthesis {
                    chunk_index: index,
                    message: err.to_string(),
                }),
            };
        }
    }
}
