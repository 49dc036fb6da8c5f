//! Amplitude envelopes for shaping rendered buffers.

mod adsr;

pub use adsr::Adsr;
