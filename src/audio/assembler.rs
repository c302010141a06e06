//! Concatenates per-chunk waveforms into one output signal.
//!
//! Waveforms are joined strictly in the order given, with the silence
//! buffer inserted between consecutive waveforms, never before the first
//! or after the last. All inputs must share the silence buffer's sample
//! rate; a mismatch is a contract violation, never silently resampled.

use crate::audio::waveform::Waveform;
use crate::error::{LectorError, Result};

/// Concatenates `waveforms` in order with `silence` between each pair.
///
/// Zero waveforms yield an empty result at the silence buffer's rate.
pub fn assemble(waveforms: &[Waveform], silence: &Waveform) -> Result<Waveform> {
    let sample_rate = silence.sample_rate;

    for wave in waveforms {
        if wave.sample_rate != sample_rate {
            return Err(LectorError::SampleRateMismatch {
                expected: sample_rate,
                actual: wave.sample_rate,
            });
        }
    }

    let total: usize = waveforms.iter().map(Waveform::len).sum::<usize>()
        + silence.len() * waveforms.len().saturating_sub(1);
    let mut samples = Vec::with_capacity(total);

    for (i, wave) in waveforms.iter().enumerate() {
        if i > 0 {
            samples.extend_from_slice(&silence.samples);
        }
        samples.extend_from_slice(&wave.samples);
    }

    Ok(Waveform::new(samples, sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(value: i16, len: usize) -> Waveform {
        Waveform::new(vec![value; len], 22050)
    }

    #[test]
    fn test_assemble_empty_input_yields_empty_audio() {
        let silence = Waveform::silence(0.1, 22050);
        let out = assemble(&[], &silence).unwrap();

        assert!(out.is_empty());
        assert_eq!(out.sample_rate, 22050);
    }

    #[test]
    fn test_assemble_single_waveform_has_no_silence() {
        let silence = Waveform::silence(0.1, 22050);
        let out = assemble(&[wave(100, 500)], &silence).unwrap();

        assert_eq!(out.len(), 500);
        assert!(out.samples.iter().all(|&s| s == 100));
    }

    #[test]
    fn test_assemble_inserts_n_minus_one_silences() {
        let silence = Waveform::new(vec![0; 10], 22050);
        let inputs = vec![wave(1, 100), wave(2, 200), wave(3, 300)];

        let out = assemble(&inputs, &silence).unwrap();

        // 3 waveforms → exactly 2 silence insertions
        assert_eq!(out.len(), 100 + 10 + 200 + 10 + 300);
    }

    #[test]
    fn test_assemble_preserves_order_and_boundaries() {
        let silence = Waveform::new(vec![0; 2], 22050);
        let inputs = vec![wave(1, 3), wave(2, 3)];

        let out = assemble(&inputs, &silence).unwrap();

        assert_eq!(out.samples, vec![1, 1, 1, 0, 0, 2, 2, 2]);
    }

    #[test]
    fn test_assemble_no_trailing_silence() {
        let silence = Waveform::new(vec![0; 4], 22050);
        let inputs = vec![wave(5, 2), wave(6, 2)];

        let out = assemble(&inputs, &silence).unwrap();

        assert_eq!(out.samples.last(), Some(&6));
        assert_eq!(out.samples.first(), Some(&5));
    }

    #[test]
    fn test_assemble_rejects_mismatched_rate() {
        let silence = Waveform::silence(0.1, 22050);
        let inputs = vec![wave(1, 10), Waveform::new(vec![2; 10], 16000)];

        match assemble(&inputs, &silence) {
            Err(LectorError::SampleRateMismatch { expected, actual }) => {
                assert_eq!(expected, 22050);
                assert_eq!(actual, 16000);
            }
            other => panic!("Expected SampleRateMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_assemble_with_empty_silence_buffer() {
        let silence = Waveform::empty(22050);
        let inputs = vec![wave(1, 5), wave(2, 5)];

        let out = assemble(&inputs, &silence).unwrap();

        assert_eq!(out.len(), 10);
    }

    #[test]
    fn test_assemble_empty_chunk_waveforms_keep_alignment() {
        // A substituted-silence chunk can itself be a plain waveform
        let silence = Waveform::new(vec![0; 3], 22050);
        let inputs = vec![wave(1, 4), Waveform::silence(0.0, 22050), wave(3, 4)];

        let out = assemble(&inputs, &silence).unwrap();

        // Two separators are still inserted around the empty middle chunk
        assert_eq!(out.len(), 4 + 3 + 0 + 3 + 4);
    }
}
