pub mod encrypt;
pub mod eval;
pub mod noise;

pub use encrypt::{encrypt, encrypt_with_rng, encrypt_with_global_params, decrypt};
pub use eval::{bfv_add, bfv_mul, bfv_sub, bfv_neg, bfv_plain_add};
pub use noise::{noise_per_coeff, max_noise, decrypts_exactly};

use std::fmt;
use std::sync::Arc;

use crate::params::SchemeParams;
use crate::ring::poly::write_coeffs;

/// A ciphertext: the pair (c0, c1) of coefficient vectors over Z_q.
///
/// Arithmetic keeps every entry in [0, q). The constructor does not check this;
/// values built by hand are the caller's responsibility. The two components may
/// have different lengths, and neither has to match the ring degree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    pub c0: Vec<i64>,
    pub c1: Vec<i64>,
    /// Parameters this ciphertext lives under.
    pub params: Arc<SchemeParams>,
}

impl Ciphertext {
    pub fn new(c0: Vec<i64>, c1: Vec<i64>, params: Arc<SchemeParams>) -> Self {
        Self { c0, c1, params }
    }

    pub fn c0(&self) -> &[i64] {
        &self.c0
    }

    pub fn c1(&self) -> &[i64] {
        &self.c1
    }

    pub fn params(&self) -> &Arc<SchemeParams> {
        &self.params
    }

    pub fn modulus(&self) -> i64 {
        self.params.modulus
    }

    pub fn ring_degree(&self) -> usize {
        self.params.ring_degree
    }

    /// True when every entry of both components lies in [0, q).
    pub fn is_reduced(&self) -> bool {
        let q = self.modulus();
        self.c0.iter().chain(self.c1.iter()).all(|&c| (0..q).contains(&c))
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(c0: ")?;
        write_coeffs(f, &self.c0)?;
        f.write_str(", c1: ")?;
        write_coeffs(f, &self.c1)?;
        f.write_str(")")
    }
}
