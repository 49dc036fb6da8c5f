//! Oscillator implementations for waveform synthesis.
//!
//! Each of the four supported shapes is a phase-accumulator oscillator
//! implementing [`Signal`]. [`synthesize`] renders one voice of a shape
//! into a finished buffer.

mod sawtooth;
mod sine;
mod square;
mod triangle;

pub use sawtooth::SawtoothOscillator;
pub use sine::SineOscillator;
pub use square::SquareOscillator;
pub use triangle::TriangleOscillator;

use crate::error::Error;
use crate::signal::Signal;
use crate::{SAMPLE_RATE, samples_for};

/// The supported waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Saw,
    Triangle,
    Square,
}

impl Waveform {
    /// All shapes, in catalog order, for random selection.
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Saw,
        Waveform::Triangle,
        Waveform::Square,
    ];
}

impl std::str::FromStr for Waveform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sine" => Ok(Waveform::Sine),
            "saw" => Ok(Waveform::Saw),
            "triangle" => Ok(Waveform::Triangle),
            "square" => Ok(Waveform::Square),
            _ => Err(Error::UnsupportedWaveform(s.to_string())),
        }
    }
}

/// Renders one voice of `waveform` at `frequency` Hz.
///
/// Produces `round(SAMPLE_RATE * duration)` samples scaled by
/// `amplitude`, starting from phase zero. Fully deterministic: the same
/// inputs always produce the same buffer.
///
/// # Examples
///
/// ```
/// use vamp::{Waveform, synthesize};
///
/// let buffer = synthesize(440.0, 1.0, 0.5, Waveform::Sine);
/// assert_eq!(buffer.len(), 44100);
/// assert_eq!(buffer[0], 0.0);
/// ```
pub fn synthesize(frequency: f64, duration: f64, amplitude: f64, waveform: Waveform) -> Vec<f64> {
    let mut buffer = vec![0.0; samples_for(duration)];
    match waveform {
        Waveform::Sine => SineOscillator::<SAMPLE_RATE>::new(frequency).process(&mut buffer),
        Waveform::Saw => SawtoothOscillator::<SAMPLE_RATE>::new(frequency).process(&mut buffer),
        Waveform::Triangle => {
            TriangleOscillator::<SAMPLE_RATE>::new(frequency).process(&mut buffer)
        }
        Waveform::Square => SquareOscillator::<SAMPLE_RATE>::new(frequency).process(&mut buffer),
    }
    for sample in buffer.iter_mut() {
        *sample *= amplitude;
    }
    buffer
}
