pub mod presets;

use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::info;

use crate::error::{ToyBfvError, Result};
use crate::ring::modular::MAX_MODULUS;

/// Default ciphertext modulus (a prime).
pub const DEFAULT_MODULUS: i64 = 104_729;
/// Default nominal ring degree.
pub const DEFAULT_RING_DEGREE: usize = 8;

/// Scheme parameters shared by every ciphertext produced under them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemeParams {
    /// Ciphertext modulus q; every ciphertext coefficient lies in [0, q).
    pub modulus: i64,
    /// Nominal ring degree N. Not enforced on coefficient lengths.
    pub ring_degree: usize,
}

impl fmt::Display for SchemeParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q = {}, N = {}", self.modulus, self.ring_degree)
    }
}

/// Builder for SchemeParams.
pub struct SchemeParamsBuilder {
    modulus: i64,
    ring_degree: usize,
}

impl Default for SchemeParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemeParamsBuilder {
    pub fn new() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
            ring_degree: DEFAULT_RING_DEGREE,
        }
    }

    pub fn modulus(mut self, q: i64) -> Self {
        self.modulus = q;
        self
    }

    pub fn ring_degree(mut self, n: usize) -> Self {
        self.ring_degree = n;
        self
    }

    pub fn build(self) -> Result<Arc<SchemeParams>> {
        // q <= 2^31 keeps residue products inside i64.
        if self.modulus < 2 || self.modulus > MAX_MODULUS {
            return Err(ToyBfvError::InvalidModulus(self.modulus));
        }

        Ok(Arc::new(SchemeParams {
            modulus: self.modulus,
            ring_degree: self.ring_degree,
        }))
    }
}

static GLOBAL_PARAMS: OnceLock<Arc<SchemeParams>> = OnceLock::new();

/// Set the process-wide scheme parameters.
///
/// The first successful call wins. Repeating the call with the same values
/// returns the stored parameters; asking for different values is an error.
pub fn init_params(modulus: i64, ring_degree: usize) -> Result<Arc<SchemeParams>> {
    let requested = SchemeParamsBuilder::new()
        .modulus(modulus)
        .ring_degree(ring_degree)
        .build()?;

    let stored = GLOBAL_PARAMS.get_or_init(|| {
        info!(params = %requested, "initialized scheme parameters");
        requested.clone()
    });

    if **stored != *requested {
        return Err(ToyBfvError::AlreadyInitialized {
            current: stored.to_string(),
            requested: requested.to_string(),
        });
    }
    Ok(stored.clone())
}

/// Process-wide scheme parameters set by [`init_params`].
pub fn global_params() -> Result<Arc<SchemeParams>> {
    GLOBAL_PARAMS
        .get()
        .cloned()
        .ok_or(ToyBfvError::ParamsNotInitialized)
}
