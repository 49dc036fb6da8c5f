//! Music theory: pitch classes, scale degrees, triads, and the mood
//! catalog.

mod chord;
mod pitch;
mod progression;

pub use chord::{Chord, Degree, Quality};
pub use pitch::Pitch;
pub use progression::Mood;
