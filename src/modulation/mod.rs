//! Physical-layer modulation (§4.3, §4.4): baseband line codes and passband
//! carrier codes, sharing the pulse-shaping primitives in [`pulse`].

pub mod carrier;
pub mod line;
pub mod pulse;

pub use carrier::Carrier;
pub use line::LineCode;
