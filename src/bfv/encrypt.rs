use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, instrument, trace};

use crate::bfv::Ciphertext;
use crate::error::Result;
use crate::params::{global_params, SchemeParams};
use crate::ring::modular::reduce;
use crate::ring::poly::Plaintext;
use crate::sampling::{sample_noise_vec, NOISE_BOUND};

/// Encrypt a plaintext, drawing noise from a freshly OS-seeded generator.
///
/// ct = (m + e mod q, 0) with every e_i uniform in [-5, 5].
/// There is no secret key: c1 is all zeros and carries no information.
pub fn encrypt(plaintext: &Plaintext, params: &Arc<SchemeParams>) -> Ciphertext {
    let mut rng = ChaCha20Rng::from_os_rng();
    encrypt_with_rng(plaintext, params, &mut rng)
}

/// Encrypt with provided RNG (for deterministic testing).
#[instrument(level = "debug", skip_all, fields(len = plaintext.len(), q = params.modulus))]
pub fn encrypt_with_rng<R: Rng + ?Sized>(
    plaintext: &Plaintext,
    params: &Arc<SchemeParams>,
    rng: &mut R,
) -> Ciphertext {
    let q = params.modulus;
    let noise = sample_noise_vec(plaintext.len(), NOISE_BOUND, rng);
    trace!(?noise, "sampled encryption noise");

    let c0: Vec<i64> = plaintext.coeffs.iter()
        .zip(noise.iter())
        .map(|(&m, &e)| reduce(reduce(m, q) + e, q))
        .collect();
    let c1 = vec![0i64; plaintext.len()];

    debug!("encrypted plaintext");
    Ciphertext {
        c0,
        c1,
        params: params.clone(),
    }
}

/// Encrypt under the process-wide parameters set by
/// [`init_params`](crate::params::init_params).
pub fn encrypt_with_global_params(plaintext: &Plaintext) -> Result<Ciphertext> {
    let params = global_params()?;
    Ok(encrypt(plaintext, &params))
}

/// Decrypt a ciphertext: m = c0 mod q, with the scheme's ring degree.
///
/// c1 is ignored. The result still contains the encryption noise, so it
/// generally differs from the encrypted plaintext by up to 5 per coefficient.
#[instrument(level = "debug", skip_all, fields(len = ct.c0.len(), q = ct.params.modulus))]
pub fn decrypt(ct: &Ciphertext) -> Plaintext {
    let q = ct.params.modulus;
    let coeffs = ct.c0.iter().map(|&c| reduce(c, q)).collect();
    Plaintext {
        coeffs,
        degree: ct.params.ring_degree,
    }
}
