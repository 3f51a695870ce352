pub mod uniform;

pub use uniform::{sample_noise, sample_noise_vec, NOISE_BOUND};
