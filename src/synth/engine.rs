use crate::audio::waveform::Waveform;
use crate::error::{LectorError, Result};
use std::sync::Arc;
use std::time::Duration;

/// Trait for text-to-speech synthesis.
///
/// This trait allows swapping implementations (real engine vs mock).
/// The phoneme conversion and acoustic inference behind a backend are
/// opaque to the pipeline: one call in, one waveform out.
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize one chunk of text into a waveform.
    ///
    /// # Arguments
    /// * `text` - Chunk text, plain words separated by single spaces
    ///
    /// # Returns
    /// The synthesized waveform or an engine error
    fn synthesize(&self, text: &str) -> Result<Waveform>;

    /// The sample rate this engine produces, agreed with the writer.
    fn sample_rate(&self) -> u32;

    /// Get the name of the configured engine
    fn name(&self) -> &str;

    /// Check if the engine is ready to synthesize
    fn is_ready(&self) -> bool;
}

/// Implement SpeechSynthesizer for Arc<T> to allow sharing across threads.
impl<T: SpeechSynthesizer> SpeechSynthesizer for Arc<T> {
    fn synthesize(&self, text: &str) -> Result<Waveform> {
        (**self).synthesize(text)
    }

    fn sample_rate(&self) -> u32 {
        (**self).sample_rate()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

/// Mock synthesizer for testing.
///
/// Produces a deterministic waveform: a fixed number of samples per word
/// at a constant amplitude, so output durations are predictable from the
/// input text alone.
#[derive(Debug, Clone)]
pub struct MockSynthesizer {
    name: String,
    sample_rate: u32,
    samples_per_word: usize,
    amplitude: i16,
    should_fail: bool,
    fail_on: Option<String>,
    delay: Option<Duration>,
}

impl MockSynthesizer {
    /// Create a new mock synthesizer with default settings
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sample_rate: crate::defaults::SAMPLE_RATE,
            samples_per_word: 2205,
            amplitude: 1000,
            should_fail: false,
            fail_on: None,
            delay: None,
        }
    }

    /// Configure the sample rate the mock reports and produces
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Configure how many samples each word contributes
    pub fn with_samples_per_word(mut self, samples_per_word: usize) -> Self {
        self.samples_per_word = samples_per_word;
        self
    }

    /// Configure the mock to fail on every synthesize call
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Configure the mock to fail only when the text contains `marker`
    pub fn with_failure_on(mut self, marker: &str) -> Self {
        self.fail_on = Some(marker.to_string());
        self
    }

    /// Configure a fixed delay before each synthesize call returns
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl SpeechSynthesizer for MockSynthesizer {
    fn synthesize(&self, text: &str) -> Result<Waveform> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }

        let triggered = self
            .fail_on
            .as_deref()
            .is_some_and(|marker| text.contains(marker));
        if self.should_fail || triggered {
            return Err(LectorError::Synthesis {
                message: "mock synthesis failure".to_string(),
            });
        }

        let words = text.split_whitespace().count();
        Ok(Waveform::new(
            vec![self.amplitude; words * self.samples_per_word],
            self.sample_rate,
        ))
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_ready(&self) -> bool {
        !self.should_fail
    }
}
