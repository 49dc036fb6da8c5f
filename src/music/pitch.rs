//! The pitch-class ring.

use crate::error::Error;
use std::fmt;

/// One of the 12 equal-tempered pitch classes.
///
/// The classes form a ring: [`Pitch::step`] moves a number of semitone
/// positions along it with wraparound. Each class carries a fixed base
/// frequency at the reference octave.
///
/// # Examples
///
/// ```
/// use vamp::Pitch;
///
/// assert_eq!(Pitch::C.step(4), Pitch::E);
/// assert_eq!(Pitch::A.step(7), Pitch::E); // wraps past B
/// assert_eq!(Pitch::A.base_frequency(), 440.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pitch {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Pitch {
    /// The ring in ascending order, for iteration and random key choice.
    pub const ALL: [Pitch; 12] = [
        Pitch::C,
        Pitch::CSharp,
        Pitch::D,
        Pitch::DSharp,
        Pitch::E,
        Pitch::F,
        Pitch::FSharp,
        Pitch::G,
        Pitch::GSharp,
        Pitch::A,
        Pitch::ASharp,
        Pitch::B,
    ];

    /// Returns the semitone offset from C (0-11).
    pub fn semitone_offset(self) -> u8 {
        match self {
            Pitch::C => 0,
            Pitch::CSharp => 1,
            Pitch::D => 2,
            Pitch::DSharp => 3,
            Pitch::E => 4,
            Pitch::F => 5,
            Pitch::FSharp => 6,
            Pitch::G => 7,
            Pitch::GSharp => 8,
            Pitch::A => 9,
            Pitch::ASharp => 10,
            Pitch::B => 11,
        }
    }

    /// Moves `steps` positions along the ring, wrapping modulo 12.
    /// Negative steps move downward.
    pub fn step(self, steps: i32) -> Pitch {
        let index = (i32::from(self.semitone_offset()) + steps).rem_euclid(12);
        Pitch::ALL[index as usize]
    }

    /// Base frequency in Hz at the reference octave.
    pub fn base_frequency(self) -> f64 {
        match self {
            Pitch::C => 261.63,
            Pitch::CSharp => 277.18,
            Pitch::D => 293.66,
            Pitch::DSharp => 311.13,
            Pitch::E => 329.63,
            Pitch::F => 349.23,
            Pitch::FSharp => 369.99,
            Pitch::G => 392.00,
            Pitch::GSharp => 415.30,
            Pitch::A => 440.00,
            Pitch::ASharp => 466.16,
            Pitch::B => 493.88,
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pitch::C => "C",
            Pitch::CSharp => "C#",
            Pitch::D => "D",
            Pitch::DSharp => "D#",
            Pitch::E => "E",
            Pitch::F => "F",
            Pitch::FSharp => "F#",
            Pitch::G => "G",
            Pitch::GSharp => "G#",
            Pitch::A => "A",
            Pitch::ASharp => "A#",
            Pitch::B => "B",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Pitch {
    type Err = Error;

    /// Parses a pitch class case-insensitively. Flat spellings are
    /// accepted and converted to their sharp equivalents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "C" => Ok(Pitch::C),
            "C#" | "DB" => Ok(Pitch::CSharp),
            "D" => Ok(Pitch::D),
            "D#" | "EB" => Ok(Pitch::DSharp),
            "E" => Ok(Pitch::E),
            "F" => Ok(Pitch::F),
            "F#" | "GB" => Ok(Pitch::FSharp),
            "G" => Ok(Pitch::G),
            "G#" | "AB" => Ok(Pitch::GSharp),
            "A" => Ok(Pitch::A),
            "A#" | "BB" => Ok(Pitch::ASharp),
            "B" => Ok(Pitch::B),
            _ => Err(Error::InvalidConfiguration {
                option: "key",
                value: s.to_string(),
            }),
        }
    }
}
