//! External-command synthesis backend.
//!
//! Runs a user-configured TTS command per chunk (piper-style contract:
//! text on stdin, a complete WAV stream on stdout) and decodes the result.
//! The command's declared sample rate must match the configured rate;
//! disagreement is a contract violation, never resampled.

use crate::audio::waveform::Waveform;
use crate::error::{LectorError, Result};
use crate::synth::engine::SpeechSynthesizer;
use std::io::{Cursor, Write};
use std::path::Path;
use std::process::{Command, Stdio};

/// Synthesizer that delegates to an external TTS command.
#[derive(Debug)]
pub struct CommandSynthesizer {
    program: String,
    args: Vec<String>,
    sample_rate: u32,
}

impl CommandSynthesizer {
    /// Create from a whitespace-separated command line, e.g.
    /// `"piper --model en_US.onnx --output_file -"`.
    pub fn from_command_line(command: &str, sample_rate: u32) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| LectorError::ConfigInvalidValue {
            key: "synthesis.engine_command".to_string(),
            message: "must not be empty".to_string(),
        })?;

        Ok(Self {
            program,
            args: parts.collect(),
            sample_rate,
        })
    }

    /// Decode a WAV byte stream into a waveform at the configured rate.
    fn decode_wav(&self, data: Vec<u8>) -> Result<Waveform> {
        let mut reader =
            hound::WavReader::new(Cursor::new(data)).map_err(|e| LectorError::Synthesis {
                message: format!("engine returned invalid WAV data: {}", e),
            })?;

        let spec = reader.spec();
        if spec.sample_rate != self.sample_rate {
            return Err(LectorError::SampleRateMismatch {
                expected: self.sample_rate,
                actual: spec.sample_rate,
            });
        }
        if spec.channels > 2 {
            return Err(LectorError::Synthesis {
                message: format!("engine produced {} channels, expected mono or stereo", spec.channels),
            });
        }

        let raw: Vec<i16> = reader
            .samples::<i16>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| LectorError::Synthesis {
                message: format!("failed to read engine samples: {}", e),
            })?;

        // Downmix to mono if the engine emits stereo
        let samples = if spec.channels == 2 {
            raw.chunks_exact(2)
                .map(|pair| {
                    let left = pair[0] as i32;
                    let right = pair[1] as i32;
                    ((left + right) / 2) as i16
                })
                .collect()
        } else {
            raw
        };

        Ok(Waveform::new(samples, self.sample_rate))
    }

    /// Whether the configured program resolves on PATH (or is a direct path).
    fn resolves(&self) -> bool {
        let candidate = Path::new(&self.program);
        if candidate.components().count() > 1 {
            return candidate.exists();
        }
        std::env::var_os("PATH")
            .map(|paths| {
                std::env::split_paths(&paths).any(|dir| dir.join(&self.program).is_file())
            })
            .unwrap_or(false)
    }
}

impl SpeechSynthesizer for CommandSynthesizer {
    fn synthesize(&self, text: &str) -> Result<Waveform> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| LectorError::Synthesis {
                message: format!("failed to spawn '{}': {}", self.program, e),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| LectorError::Synthesis {
                    message: format!("failed to send text to '{}': {}", self.program, e),
                })?;
            // Dropping stdin closes the pipe so the engine sees EOF
        }

        let output = child.wait_with_output().map_err(|e| LectorError::Synthesis {
            message: format!("failed to wait for '{}': {}", self.program, e),
        })?;

        if !output.status.success() {
            return Err(LectorError::Synthesis {
                message: format!("'{}' exited with {}", self.program, output.status),
            });
        }

        self.decode_wav(output.stdout)
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn name(&self) -> &str {
        &self.program
    }

    fn is_ready(&self) -> bool {
        self.resolves()
    }
}
