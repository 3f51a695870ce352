use crate::ring::modular::residue_distance;
use crate::ring::poly::Plaintext;

/// Per-coefficient distance on Z_q between an expected plaintext and a
/// decryption. Positions missing on either side read as 0.
pub fn noise_per_coeff(expected: &Plaintext, decrypted: &Plaintext, q: i64) -> Vec<i64> {
    let len = expected.len().max(decrypted.len());
    (0..len)
        .map(|i| {
            let a = expected.coeffs.get(i).copied().unwrap_or(0);
            let b = decrypted.coeffs.get(i).copied().unwrap_or(0);
            residue_distance(a, b, q)
        })
        .collect()
}

/// Largest per-coefficient noise; 0 for two empty plaintexts.
pub fn max_noise(expected: &Plaintext, decrypted: &Plaintext, q: i64) -> i64 {
    noise_per_coeff(expected, decrypted, q)
        .into_iter()
        .max()
        .unwrap_or(0)
}

/// Exact coefficient equality, ignoring the degree field.
pub fn decrypts_exactly(expected: &Plaintext, decrypted: &Plaintext) -> bool {
    expected.coeffs == decrypted.coeffs
}
