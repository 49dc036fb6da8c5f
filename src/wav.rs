//! WAV output.

use crate::SAMPLE_RATE;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;

/// The format every track is written in: mono, 16-bit PCM, 44100 Hz.
fn track_spec() -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Writes `samples` (nominally in [-1, 1]) to `path` as 16-bit PCM.
///
/// Callers hand over a fully rendered buffer, so a failed render never
/// leaves a truncated file behind.
pub fn write_wav(path: impl AsRef<Path>, samples: &[f64]) -> Result<(), hound::Error> {
    let mut writer = WavWriter::create(path, track_spec())?;
    for &sample in samples {
        writer.write_sample(to_pcm(sample))?;
    }
    writer.finalize()
}

/// Converts one sample to 16-bit PCM. Values outside [-1, 1] are clamped
/// rather than left to wrap.
pub fn to_pcm(sample: f64) -> i16 {
    (sample * f64::from(i16::MAX))
        .round()
        .clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}
