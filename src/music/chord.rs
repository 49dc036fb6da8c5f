//! Scale degrees and triads.

use super::pitch::Pitch;
use crate::error::Error;

/// Triad quality, encoded by the letter case of a degree symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Major,
    Minor,
}

impl Quality {
    /// Ring steps from the root to the third: 4 for major, 3 for minor.
    fn third_steps(self) -> i32 {
        match self {
            Quality::Major => 4,
            Quality::Minor => 3,
        }
    }
}

/// A scale degree parsed from a roman numeral symbol.
///
/// The numeral (I-VII) picks the chord root from the fixed major-scale
/// table; the symbol's case picks the triad quality, uppercase for major
/// and lowercase for minor.
///
/// # Examples
///
/// ```
/// use vamp::{Degree, Pitch, Quality};
///
/// let five: Degree = "V".parse().unwrap();
/// assert_eq!(five.root(), Pitch::G);
/// assert_eq!(five.quality(), Quality::Major);
///
/// let six: Degree = "vi".parse().unwrap();
/// assert_eq!(six.root(), Pitch::A);
/// assert_eq!(six.quality(), Quality::Minor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degree {
    root: Pitch,
    quality: Quality,
}

impl Degree {
    /// The chord root in the reference key of C.
    pub fn root(self) -> Pitch {
        self.root
    }

    /// The triad quality encoded by the symbol's case.
    pub fn quality(self) -> Quality {
        self.quality
    }

    /// Builds the triad on this degree: root, third at +4 (major) or +3
    /// (minor) ring steps, fifth at +7.
    pub fn triad(self) -> Chord {
        Chord {
            root: self.root,
            third: self.root.step(self.quality.third_steps()),
            fifth: self.root.step(7),
        }
    }
}

impl std::str::FromStr for Degree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let root = match s.to_uppercase().as_str() {
            "I" => Pitch::C,
            "II" => Pitch::D,
            "III" => Pitch::E,
            "IV" => Pitch::F,
            "V" => Pitch::G,
            "VI" => Pitch::A,
            "VII" => Pitch::B,
            _ => return Err(Error::InvalidDegree(s.to_string())),
        };
        // Only a fully uppercase symbol is major; mixed case counts as
        // minor.
        let quality = if s.chars().all(|c| c.is_uppercase()) {
            Quality::Major
        } else {
            Quality::Minor
        };
        Ok(Degree { root, quality })
    }
}

/// A triad as three pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    pub root: Pitch,
    pub third: Pitch,
    pub fifth: Pitch,
}

impl Chord {
    /// Shifts every note `steps` positions along the pitch-class ring.
    pub fn transposed(self, steps: i32) -> Chord {
        Chord {
            root: self.root.step(steps),
            third: self.third.step(steps),
            fifth: self.fifth.step(steps),
        }
    }

    /// Spreads the triad into three absolute frequencies in ascending
    /// order.
    ///
    /// Every base frequency is scaled by `tone_multiplier`. The fifth
    /// sits in the middle of the voicing, octave-doubled when it falls
    /// strictly below the root; the third goes on top at twice the
    /// multiplier, octave-doubled again when it falls strictly below the
    /// middle.
    ///
    /// # Examples
    ///
    /// ```
    /// use vamp::Degree;
    ///
    /// let chord = "I".parse::<Degree>().unwrap().triad();
    /// let [low, mid, high] = chord.voiced(1.0);
    /// assert!((low - 261.63).abs() < 1e-9);  // C
    /// assert!((mid - 392.00).abs() < 1e-9);  // G
    /// assert!((high - 659.26).abs() < 1e-9); // E, an octave up
    /// ```
    pub fn voiced(self, tone_multiplier: f64) -> [f64; 3] {
        let low = self.root.base_frequency() * tone_multiplier;

        let fifth = self.fifth.base_frequency() * tone_multiplier;
        let mid = if fifth < low { fifth * 2.0 } else { fifth };

        let third = self.third.base_frequency() * tone_multiplier * 2.0;
        let high = if third < mid { third * 2.0 } else { third };

        [low, mid, high]
    }
}
