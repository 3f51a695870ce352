use std::ops::{Add, Mul, Neg, Sub};

use tracing::{debug, instrument};

use crate::bfv::Ciphertext;
use crate::error::{ToyBfvError, Result};
use crate::ring::modular::{mod_add, mod_mul, mod_neg, mod_sub, reduce};
use crate::ring::poly::Plaintext;

/// Homomorphic addition: ct_out = ct1 + ct2.
///
/// c0 with c0 and c1 with c1, each `(a[i] + b[i]) mod q` over the longer
/// length with missing positions read as 0.
pub fn bfv_add(ct1: &Ciphertext, ct2: &Ciphertext) -> Result<Ciphertext> {
    check_moduli(ct1, ct2)?;
    Ok(add_unchecked(ct1, ct2))
}

/// Homomorphic subtraction: ct_out = ct1 - ct2.
pub fn bfv_sub(ct1: &Ciphertext, ct2: &Ciphertext) -> Result<Ciphertext> {
    check_moduli(ct1, ct2)?;
    Ok(sub_unchecked(ct1, ct2))
}

/// Negate a ciphertext.
pub fn bfv_neg(ct: &Ciphertext) -> Ciphertext {
    let q = ct.params.modulus;
    let negate = |v: &[i64]| -> Vec<i64> { v.iter().map(|&a| mod_neg(a, q)).collect() };
    Ciphertext {
        c0: negate(&ct.c0),
        c1: negate(&ct.c1),
        params: ct.params.clone(),
    }
}

/// Coefficient-wise ("Hadamard") multiplication of each component.
///
/// Where both operands have position i the output is `a[i] * b[i] mod q`.
/// Past the end of the shorter operand the longer operand's value is copied
/// (reduced mod q). This is not polynomial convolution and does not
/// decrypt to the plaintext product.
pub fn bfv_mul(ct1: &Ciphertext, ct2: &Ciphertext) -> Result<Ciphertext> {
    check_moduli(ct1, ct2)?;
    Ok(mul_unchecked(ct1, ct2))
}

/// Add a plaintext to a ciphertext: c0 + m mod q, c1 unchanged.
#[instrument(level = "debug", skip_all, fields(ct_len = ct.c0.len(), pt_len = plaintext.len()))]
pub fn bfv_plain_add(ct: &Ciphertext, plaintext: &Plaintext) -> Ciphertext {
    let q = ct.params.modulus;
    Ciphertext {
        c0: zip_longest(&ct.c0, &plaintext.coeffs, |a, b| match (a, b) {
            (Some(a), Some(b)) => mod_add(a, b, q),
            (Some(v), None) | (None, Some(v)) => reduce(v, q),
            (None, None) => unreachable!(),
        }),
        c1: ct.c1.clone(),
        params: ct.params.clone(),
    }
}

fn check_moduli(ct1: &Ciphertext, ct2: &Ciphertext) -> Result<()> {
    if ct1.params.modulus != ct2.params.modulus {
        return Err(ToyBfvError::ModulusMismatch {
            left: ct1.params.modulus,
            right: ct2.params.modulus,
        });
    }
    Ok(())
}

#[instrument(level = "debug", skip_all, fields(q = ct1.params.modulus))]
fn add_unchecked(ct1: &Ciphertext, ct2: &Ciphertext) -> Ciphertext {
    let q = ct1.params.modulus;
    let add = |a: Option<i64>, b: Option<i64>| mod_add(a.unwrap_or(0), b.unwrap_or(0), q);
    let out = Ciphertext {
        c0: zip_longest(&ct1.c0, &ct2.c0, add),
        c1: zip_longest(&ct1.c1, &ct2.c1, add),
        params: ct1.params.clone(),
    };
    debug!("homomorphic add");
    out
}

fn sub_unchecked(ct1: &Ciphertext, ct2: &Ciphertext) -> Ciphertext {
    let q = ct1.params.modulus;
    let sub = |a: Option<i64>, b: Option<i64>| mod_sub(a.unwrap_or(0), b.unwrap_or(0), q);
    Ciphertext {
        c0: zip_longest(&ct1.c0, &ct2.c0, sub),
        c1: zip_longest(&ct1.c1, &ct2.c1, sub),
        params: ct1.params.clone(),
    }
}

#[instrument(level = "debug", skip_all, fields(q = ct1.params.modulus))]
fn mul_unchecked(ct1: &Ciphertext, ct2: &Ciphertext) -> Ciphertext {
    let q = ct1.params.modulus;
    let mul = |a: Option<i64>, b: Option<i64>| match (a, b) {
        (Some(a), Some(b)) => mod_mul(a, b, q),
        // Shorter side ran out: copy the longer side.
        (Some(v), None) | (None, Some(v)) => reduce(v, q),
        (None, None) => unreachable!(),
    };
    let out = Ciphertext {
        c0: zip_longest(&ct1.c0, &ct2.c0, mul),
        c1: zip_longest(&ct1.c1, &ct2.c1, mul),
        params: ct1.params.clone(),
    };
    debug!("homomorphic coefficient-wise mul");
    out
}

/// Walk two slices up to the longer length, handing `f` the entries present at each index.
fn zip_longest<F>(a: &[i64], b: &[i64], f: F) -> Vec<i64>
where
    F: Fn(Option<i64>, Option<i64>) -> i64,
{
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| f(a.get(i).copied(), b.get(i).copied()))
        .collect()
}

// Operators are total and take the left operand's parameters; the `bfv_*`
// functions above additionally reject mismatched moduli.

impl Add for &Ciphertext {
    type Output = Ciphertext;
    fn add(self, rhs: &Ciphertext) -> Ciphertext {
        debug_assert_eq!(self.params.modulus, rhs.params.modulus, "modulus mismatch");
        add_unchecked(self, rhs)
    }
}

impl Add for Ciphertext {
    type Output = Ciphertext;
    fn add(self, rhs: Ciphertext) -> Ciphertext {
        &self + &rhs
    }
}

impl Sub for &Ciphertext {
    type Output = Ciphertext;
    fn sub(self, rhs: &Ciphertext) -> Ciphertext {
        debug_assert_eq!(self.params.modulus, rhs.params.modulus, "modulus mismatch");
        sub_unchecked(self, rhs)
    }
}

impl Sub for Ciphertext {
    type Output = Ciphertext;
    fn sub(self, rhs: Ciphertext) -> Ciphertext {
        &self - &rhs
    }
}

impl Mul for &Ciphertext {
    type Output = Ciphertext;
    fn mul(self, rhs: &Ciphertext) -> Ciphertext {
        debug_assert_eq!(self.params.modulus, rhs.params.modulus, "modulus mismatch");
        mul_unchecked(self, rhs)
    }
}

impl Mul for Ciphertext {
    type Output = Ciphertext;
    fn mul(self, rhs: Ciphertext) -> Ciphertext {
        &self * &rhs
    }
}

impl Neg for &Ciphertext {
    type Output = Ciphertext;
    fn neg(self) -> Ciphertext {
        bfv_neg(self)
    }
}

impl Neg for Ciphertext {
    type Output = Ciphertext;
    fn neg(self) -> Ciphertext {
        bfv_neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfv::encrypt::*;
    use crate::bfv::noise::max_noise;
    use crate::params::SchemeParamsBuilder;
    use crate::params::presets::{default_params, tiny_params};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    const Q: i64 = 104729;

    #[test]
    fn test_homomorphic_add() {
        let params = default_params().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(42);

        let pt1 = Plaintext::new(vec![1, 2, 3], 8);
        let pt2 = Plaintext::new(vec![2, 1, 1], 8);

        let ct1 = encrypt_with_rng(&pt1, &params, &mut rng);
        let ct2 = encrypt_with_rng(&pt2, &params, &mut rng);

        let ct_sum = bfv_add(&ct1, &ct2).unwrap();
        assert!(ct_sum.is_reduced());
        let decrypted = decrypt(&ct_sum);

        assert!(max_noise(&(&pt1 + &pt2), &decrypted, Q) <= 10);
    }

    #[test]
    fn test_add_known_values() {
        let params = default_params().unwrap();
        let a = Ciphertext::new(vec![Q - 1, 5], vec![0, 0], params.clone());
        let b = Ciphertext::new(vec![2, 6, 7], vec![1], params);
        let c = &a + &b;
        assert_eq!(c.c0, vec![1, 11, 7]);
        assert_eq!(c.c1, vec![1, 0]);
    }

    #[test]
    fn test_homomorphic_sub() {
        let params = default_params().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(42);

        let pt1 = Plaintext::new(vec![50, 40, 30], 8);
        let pt2 = Plaintext::new(vec![20, 20, 20], 8);

        let ct1 = encrypt_with_rng(&pt1, &params, &mut rng);
        let ct2 = encrypt_with_rng(&pt2, &params, &mut rng);

        let ct_diff = bfv_sub(&ct1, &ct2).unwrap();
        assert!(ct_diff.is_reduced());
        let expected = Plaintext::new(vec![30, 20, 10], 8);
        assert!(max_noise(&expected, &decrypt(&ct_diff), Q) <= 10);
    }

    #[test]
    fn test_sub_missing_left_negates() {
        let params = default_params().unwrap();
        let a = Ciphertext::new(vec![10], vec![], params.clone());
        let b = Ciphertext::new(vec![3, 4], vec![1], params);
        let c = &a - &b;
        assert_eq!(c.c0, vec![7, Q - 4]);
        assert_eq!(c.c1, vec![Q - 1]);
    }

    #[test]
    fn test_neg() {
        let params = default_params().unwrap();
        let a = Ciphertext::new(vec![0, 1, Q - 1], vec![2], params);
        let n = -&a;
        assert_eq!(n.c0, vec![0, Q - 1, 1]);
        assert_eq!(n.c1, vec![Q - 2]);
        let zero = &a + &n;
        assert!(zero.c0.iter().chain(zero.c1.iter()).all(|&c| c == 0));
    }

    #[test]
    fn test_mul_hadamard() {
        let params = default_params().unwrap();
        let a = Ciphertext::new(vec![2, 3, 4], vec![0, 0, 0], params.clone());
        let b = Ciphertext::new(vec![5, 6, 7], vec![0, 0, 0], params);
        let c = bfv_mul(&a, &b).unwrap();
        assert_eq!(c.c0, vec![10, 18, 28]);
        assert_eq!(c.c1, vec![0, 0, 0]);
    }

    #[test]
    fn test_mul_copies_longer_side() {
        let params = default_params().unwrap();
        let a = Ciphertext::new(vec![2], vec![3, 9, 11], params.clone());
        let b = Ciphertext::new(vec![5, 6, 7], vec![4], params);
        let c = &a * &b;
        assert_eq!(c.c0, vec![10, 6, 7]);
        assert_eq!(c.c1, vec![12, 9, 11]);
    }

    #[test]
    fn test_mul_wraps_modulus() {
        let params = default_params().unwrap();
        let a = Ciphertext::new(vec![Q - 1], vec![], params.clone());
        let b = Ciphertext::new(vec![Q - 1], vec![], params);
        assert_eq!((&a * &b).c0, vec![1]);
    }

    #[test]
    fn test_mul_encrypted_shape() {
        let params = default_params().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let ct1 = encrypt_with_rng(&Plaintext::new(vec![1, 2, 3], 8), &params, &mut rng);
        let ct2 = encrypt_with_rng(&Plaintext::new(vec![2, 1, 1], 8), &params, &mut rng);
        let prod = ct1 * ct2;
        assert_eq!(prod.c0.len(), 3);
        assert_eq!(prod.c1.len(), 3);
        assert!(prod.is_reduced());
    }

    #[test]
    fn test_plain_add() {
        let params = default_params().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let pt1 = Plaintext::new(vec![100, 200], 8);
        let pt2 = Plaintext::new(vec![1, 2, -3], 8);

        let ct = encrypt_with_rng(&pt1, &params, &mut rng);
        let out = bfv_plain_add(&ct, &pt2);
        assert_eq!(out.c0.len(), 3);
        assert_eq!(out.c1, ct.c1);
        assert!(out.is_reduced());
        assert!(max_noise(&(&pt1 + &pt2), &decrypt(&out), Q) <= 5);
    }

    #[test]
    fn test_modulus_mismatch() {
        let p1 = default_params().unwrap();
        let p2 = tiny_params().unwrap();
        let a = Ciphertext::new(vec![1], vec![0], p1);
        let b = Ciphertext::new(vec![1], vec![0], p2);
        assert!(matches!(
            bfv_add(&a, &b),
            Err(ToyBfvError::ModulusMismatch { left: 104729, right: 17 })
        ));
        assert!(bfv_mul(&a, &b).is_err());
        assert!(bfv_sub(&a, &b).is_err());
    }

    #[test]
    fn test_result_takes_left_params() {
        let p1 = SchemeParamsBuilder::new().ring_degree(8).build().unwrap();
        let p2 = SchemeParamsBuilder::new().ring_degree(16).build().unwrap();
        let a = Ciphertext::new(vec![1], vec![0], p1);
        let b = Ciphertext::new(vec![1], vec![0], p2);
        assert_eq!(bfv_add(&a, &b).unwrap().ring_degree(), 8);
        assert_eq!(decrypt(&(&b * &a)).degree, 16);
    }
}
