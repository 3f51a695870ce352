use std::sync::Arc;
use crate::error::Result;
use crate::params::{SchemeParams, SchemeParamsBuilder, DEFAULT_MODULUS, DEFAULT_RING_DEGREE};

/// The demonstration parameters: q = 104729 (prime), N = 8.
pub fn default_params() -> Result<Arc<SchemeParams>> {
    SchemeParamsBuilder::new()
        .modulus(DEFAULT_MODULUS)
        .ring_degree(DEFAULT_RING_DEGREE)
        .build()
}

/// Very small parameters for hand-checkable tests: q = 17, N = 4.
/// Noise in [-5, 5] is a large fraction of q here, which makes wraparound easy to hit.
pub fn tiny_params() -> Result<Arc<SchemeParams>> {
    SchemeParamsBuilder::new()
        .modulus(17)
        .ring_degree(4)
        .build()
}

/// Largest admissible modulus, 2^31, with N = 16.
pub fn wide_params() -> Result<Arc<SchemeParams>> {
    SchemeParamsBuilder::new()
        .modulus(crate::ring::modular::MAX_MODULUS)
        .ring_degree(16)
        .build()
}
