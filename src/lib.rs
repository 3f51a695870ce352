//! # toybfv: the shape of a BFV-style somewhat-homomorphic encryption API
//!
//! Two value types, a cleartext [`Plaintext`](ring::Plaintext) polynomial and a
//! [`Ciphertext`](bfv::Ciphertext) pair (c0, c1) over Z_q, with arithmetic that
//! approximately commutes with decryption:
//!
//! ```text
//! decrypt(encrypt(m1) + encrypt(m2)) ≈ m1 + m2   (within noise, mod q)
//! ```
//!
//! This is a teaching model, not a cryptosystem. There is no secret key,
//! encryption adds uniform noise in [-5, 5] to the plaintext coefficients, and
//! decryption simply reads c0 mod q. Ciphertext multiplication is
//! coefficient-wise and does **not** decrypt to the plaintext product.
//!
//! ## Quick Start
//!
//! ```
//! use toybfv::prelude::*;
//!
//! let params = toybfv::params::presets::default_params().unwrap();
//!
//! let m1 = Plaintext::new(vec![1, 2, 3], 8);
//! let m2 = Plaintext::new(vec![2, 1, 1], 8);
//!
//! let ct_sum = encrypt(&m1, &params) + encrypt(&m2, &params);
//! let dec = decrypt(&ct_sum);
//!
//! assert!(max_noise(&(&m1 + &m2), &dec, params.modulus) <= 10);
//! ```

pub mod error;
pub mod params;
pub mod ring;
pub mod sampling;
pub mod bfv;

/// Convenient re-exports for common types and functions.
pub mod prelude {
    pub use crate::error::{ToyBfvError, Result};
    pub use crate::params::{SchemeParams, SchemeParamsBuilder, init_params, global_params};
    pub use crate::ring::{Plaintext, reduce};
    pub use crate::bfv::{
        Ciphertext,
        encrypt, encrypt_with_rng, encrypt_with_global_params, decrypt,
        bfv_add, bfv_sub, bfv_neg, bfv_mul, bfv_plain_add,
        noise_per_coeff, max_noise, decrypts_exactly,
    };
}
