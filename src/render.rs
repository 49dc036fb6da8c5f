//! Chord mixing and progression rendering.

use crate::envelopes::Adsr;
use crate::error::Error;
use crate::music::{Mood, Pitch};
use crate::oscillators::{Waveform, synthesize};
use crate::samples_for;
use rand::Rng;

/// Beats each chord is held for.
const BEATS_PER_CHORD: f64 = 4.0;

/// Per-voice amplitude, leaving headroom for the three-voice mix.
const MIX_AMPLITUDE: f64 = 0.3;

/// Octave placement of the rendered voicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    High,
    Normal,
    Low,
}

impl Tone {
    /// Frequency multiplier applied to every voice.
    pub fn multiplier(self) -> f64 {
        match self {
            Tone::High => 2.0,
            Tone::Normal => 1.0,
            Tone::Low => 0.5,
        }
    }
}

impl std::str::FromStr for Tone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Tone::High),
            "normal" => Ok(Tone::Normal),
            "low" => Ok(Tone::Low),
            _ => Err(Error::InvalidConfiguration {
                option: "tone",
                value: s.to_string(),
            }),
        }
    }
}

/// Everything the renderer needs for one track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub bpm: u32,
    pub mood: Mood,
    pub key: Pitch,
    pub tone: Tone,
    pub waveform: Waveform,
    pub adsr: Adsr,
}

/// Mixes the three voices of one chord into a single buffer.
///
/// Each voice is synthesized at `amplitude`, envelope-shaped, and
/// accumulated; the sum is divided by the voice count so constructive
/// peaks stay inside the requested amplitude.
pub fn render_chord(
    frequencies: [f64; 3],
    duration: f64,
    amplitude: f64,
    waveform: Waveform,
    adsr: &Adsr,
) -> Vec<f64> {
    let mut mix = vec![0.0; samples_for(duration)];
    for frequency in frequencies {
        let mut voice = synthesize(frequency, duration, amplitude, waveform);
        adsr.apply(&mut voice);
        for (out, sample) in mix.iter_mut().zip(voice) {
            *out += sample;
        }
    }

    let voices = frequencies.len() as f64;
    for out in mix.iter_mut() {
        *out /= voices;
    }
    mix
}

/// Renders a full four-chord track.
///
/// Picks one of the mood's progressions through `rng`, maps it to
/// triads, transposes to the configured key, voices each chord for the
/// configured tone, and concatenates the four rendered chords. Apart
/// from the progression choice the render is fully deterministic.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use vamp::{Adsr, Mood, Pitch, RenderConfig, Tone, Waveform, render_progression};
///
/// let config = RenderConfig {
///     bpm: 120,
///     mood: Mood::Happy,
///     key: Pitch::C,
///     tone: Tone::Normal,
///     waveform: Waveform::Sine,
///     adsr: Adsr::new(0.1, 0.3, 0.75, 0.15),
/// };
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let track = render_progression(&config, &mut rng).unwrap();
/// assert_eq!(track.len(), 4 * 2 * 44100); // four chords of two seconds
/// ```
pub fn render_progression<R: Rng>(config: &RenderConfig, rng: &mut R) -> Result<Vec<f64>, Error> {
    let chord_seconds = 60.0 / f64::from(config.bpm) * BEATS_PER_CHORD;
    let transpose = i32::from(config.key.semitone_offset());

    let degrees = config.mood.pick_progression(rng)?;

    let mut track = Vec::with_capacity(degrees.len() * samples_for(chord_seconds));
    for degree in degrees {
        let chord = degree.triad().transposed(transpose);
        let frequencies = chord.voiced(config.tone.multiplier());
        track.extend(render_chord(
            frequencies,
            chord_seconds,
            MIX_AMPLITUDE,
            config.waveform,
            &config.adsr,
        ));
    }
    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_buffer_length() {
        let adsr = Adsr::new(0.1, 0.3, 0.75, 0.15);
        let chord = render_chord([261.63, 392.0, 659.26], 2.0, 0.3, Waveform::Sine, &adsr);
        assert_eq!(chord.len(), 88200);
    }

    #[test]
    fn test_zero_amplitude_chord_is_silent() {
        let adsr = Adsr::new(0.1, 0.3, 0.75, 0.15);
        for waveform in Waveform::ALL {
            let chord = render_chord([440.0, 440.0, 440.0], 0.5, 0.0, waveform, &adsr);
            assert!(chord.iter().all(|&s| s == 0.0));
        }
    }

    #[test]
    fn test_mix_stays_inside_amplitude() {
        let adsr = Adsr::new(0.0, 0.0, 1.0, 0.0);
        let chord = render_chord([261.63, 392.0, 659.26], 0.5, 0.3, Waveform::Square, &adsr);
        let peak = chord.iter().fold(0.0f64, |max, s| max.max(s.abs()));
        assert!(peak <= 0.3 + 1e-12);
    }

    #[test]
    fn test_tone_parsing() {
        assert_eq!("high".parse::<Tone>().unwrap(), Tone::High);
        assert_eq!("NORMAL".parse::<Tone>().unwrap(), Tone::Normal);
        assert_eq!("low".parse::<Tone>().unwrap(), Tone::Low);
        assert!("mid".parse::<Tone>().is_err());
    }

    #[test]
    fn test_tone_multipliers() {
        assert_eq!(Tone::High.multiplier(), 2.0);
        assert_eq!(Tone::Normal.multiplier(), 1.0);
        assert_eq!(Tone::Low.multiplier(), 0.5);
    }
}
