//! Channel impairment (§4.5): additive white Gaussian noise over a sample
//! sequence.

mod noise;

pub use noise::Channel;
