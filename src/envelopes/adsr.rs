//! ADSR (Attack, Decay, Sustain, Release) envelope generator.

use crate::samples_for;

/// ADSR amplitude envelope applied to a finished buffer.
///
/// Attack, decay, and release are times in seconds; sustain is a level
/// in [0, 1] held for whatever time the other segments leave over. The
/// envelope shape is:
/// - **Attack**: linear ramp from 0 to 1
/// - **Decay**: linear ramp from 1 to the sustain level
/// - **Sustain**: constant at the sustain level
/// - **Release**: linear ramp from the sustain level to 0, anchored so
///   its final zero lands on the buffer's last sample
///
/// # Examples
///
/// ```
/// use vamp::Adsr;
///
/// let adsr = Adsr::new(0.1, 0.3, 0.75, 0.15);
/// let mut buffer = vec![1.0; 44100];
/// adsr.apply(&mut buffer);
/// assert_eq!(buffer[0], 0.0);       // attack starts from silence
/// assert_eq!(buffer[44099], 0.0);   // release ends in silence
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adsr {
    attack: f64,
    decay: f64,
    sustain: f64,
    release: f64,
}

impl Adsr {
    /// Creates a new envelope.
    ///
    /// Negative times are treated as zero and the sustain level is
    /// clamped to [0, 1].
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }

    /// Shapes `buffer` in place; the length never changes.
    ///
    /// Segments are written in time order - attack, decay, sustain
    /// plateau, release - with every write clamped to the buffer's index
    /// range, so an envelope longer than the buffer stays deterministic:
    /// later segments overwrite earlier ones and the release always
    /// reaches zero on the final sample. A segment that rounds to zero
    /// samples contributes nothing. When attack + decay + release exceed
    /// the buffer, only the sustain plateau is skipped.
    pub fn apply(&self, buffer: &mut [f64]) {
        let total = buffer.len();
        let attack = samples_for(self.attack);
        let decay = samples_for(self.decay);
        let release = samples_for(self.release);

        let mut envelope = vec![0.0; total];

        write_ramp(&mut envelope, 0, attack, 0.0, 1.0);
        write_ramp(&mut envelope, attack as isize, decay, 1.0, self.sustain);

        let sustain_span = total as isize - (attack + decay + release) as isize;
        if sustain_span > 0 {
            let start = (attack + decay).min(total);
            let end = (attack + decay + sustain_span as usize).min(total);
            envelope[start..end].fill(self.sustain);
        }

        write_ramp(
            &mut envelope,
            total as isize - release as isize,
            release,
            self.sustain,
            0.0,
        );

        for (sample, gain) in buffer.iter_mut().zip(envelope) {
            *sample *= gain;
        }
    }
}

/// Writes a `len`-sample linear ramp from `from` to `to` starting at
/// (possibly negative) index `start`, skipping positions outside the
/// buffer. Both endpoints are included in the ramp and land exactly on
/// `from` and `to`; a one-sample ramp emits `from`.
fn write_ramp(envelope: &mut [f64], start: isize, len: usize, from: f64, to: f64) {
    if len == 0 {
        return;
    }
    if len == 1 {
        if (0..envelope.len() as isize).contains(&start) {
            envelope[start as usize] = from;
        }
        return;
    }
    let step = (to - from) / (len - 1) as f64;
    for j in 0..len {
        let index = start + j as isize;
        if index < 0 || index >= envelope.len() as isize {
            continue;
        }
        envelope[index as usize] = if j == len - 1 {
            to
        } else {
            from + step * j as f64
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(len: usize) -> Vec<f64> {
        vec![1.0; len]
    }

    #[test]
    fn test_length_is_preserved() {
        for len in [0, 1, 100, 44100] {
            let mut buffer = ones(len);
            Adsr::new(0.1, 0.3, 0.75, 0.15).apply(&mut buffer);
            assert_eq!(buffer.len(), len);
        }
    }

    #[test]
    fn test_segment_boundaries() {
        let adsr = Adsr::new(0.1, 0.3, 0.75, 0.15);
        let mut buffer = ones(44100);
        adsr.apply(&mut buffer);

        // 4410 attack samples ramp 0 -> 1, endpoint included
        assert_eq!(buffer[0], 0.0);
        assert!((buffer[4409] - 1.0).abs() < 1e-12);
        // decay lands on the sustain level
        assert!((buffer[4410 + 13229] - 0.75).abs() < 1e-12);
        // plateau holds the sustain level
        assert!((buffer[20000] - 0.75).abs() < 1e-12);
        // release ends in silence
        assert_eq!(buffer[44099], 0.0);
    }

    #[test]
    fn test_zero_segments_leave_sustain() {
        let mut buffer = ones(1000);
        Adsr::new(0.0, 0.0, 0.5, 0.0).apply(&mut buffer);
        assert!(buffer.iter().all(|&s| (s - 0.5).abs() < 1e-12));
    }

    #[test]
    fn test_oversized_envelope_clamps_to_buffer() {
        // 0.5s of attack, decay, and release each against a 1s buffer:
        // no room for a plateau, release overwrites the decay tail.
        let mut buffer = ones(44100);
        Adsr::new(0.5, 0.5, 0.75, 0.5).apply(&mut buffer);
        assert_eq!(buffer[0], 0.0);
        assert!((buffer[22050] - 0.75).abs() < 1e-12); // release start
        assert_eq!(buffer[44099], 0.0); // release still ends at zero
    }

    #[test]
    fn test_release_longer_than_buffer() {
        let mut buffer = ones(100);
        Adsr::new(0.0, 0.0, 1.0, 1.0).apply(&mut buffer);
        // Only the tail of the release ramp fits; it must still hit zero
        // on the last sample.
        assert_eq!(buffer[99], 0.0);
        assert!(buffer[0] < 1.0);
    }

    #[test]
    fn test_sustain_is_clamped() {
        let mut buffer = ones(1000);
        Adsr::new(0.0, 0.0, 2.0, 0.0).apply(&mut buffer);
        assert!(buffer.iter().all(|&s| (s - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_silence_stays_silent() {
        let mut buffer = vec![0.0; 4410];
        Adsr::new(0.1, 0.3, 0.75, 0.15).apply(&mut buffer);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }
}
