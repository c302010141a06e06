//! WAV serialization of assembled audio.

use crate::audio::waveform::Waveform;
use crate::defaults;
use crate::error::{LectorError, Result};
use std::path::Path;

/// Writes `audio` to `destination` as a mono 16-bit PCM WAV file.
///
/// An existing file at `destination` is overwritten. Empty audio produces
/// a valid header-only file.
pub fn write_wav(audio: &Waveform, destination: &Path) -> Result<()> {
    let spec = hound::WavSpec {
        channels: defaults::CHANNELS,
        sample_rate: audio.sample_rate,
        bits_per_sample: defaults::BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer =
        hound::WavWriter::create(destination, spec).map_err(|e| LectorError::AudioWrite {
            path: destination.display().to_string(),
            message: e.to_string(),
        })?;

    for &sample in &audio.samples {
        writer.write_sample(sample).map_err(|e| LectorError::AudioWrite {
            path: destination.display().to_string(),
            message: e.to_string(),
        })?;
    }

    writer.finalize().map_err(|e| LectorError::AudioWrite {
        path: destination.display().to_string(),
        message: e.to_string(),
    })
}
