//! A teaching-grade link-layer and physical-layer simulator for a
//! point-to-point digital channel: frame a payload, add an error-detection
//! or -correction code, modulate the result into a real-valued sample
//! sequence (baseband or passband), push it through an additive white
//! Gaussian noise channel, and run the exact inverse chain back to text.
//!
//! The two top-level entry points are [`encode`] and [`decode`]; everything
//! else is the module that implements one stage of the pipeline described
//! in [`pipeline`].

pub mod bits;
pub mod channel;
pub mod constants;
pub mod error;
pub mod error_correction;
pub mod framing;
pub mod modulation;
pub mod pipeline;
pub mod text;
pub mod tracing_init;

pub use channel::Channel;
pub use error_correction::{ErrorCode, ErrorReport};
pub use framing::Framing;
pub use modulation::{Carrier, LineCode};
pub use pipeline::{decode, encode, DecodeResult};
