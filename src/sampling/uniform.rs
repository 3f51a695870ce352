use rand::Rng;

/// Half-width of the encryption noise interval: noise is drawn from [-5, 5].
pub const NOISE_BOUND: u32 = 5;

/// Draw a single integer uniformly from `[-bound, bound]` (inclusive).
#[inline]
pub fn sample_noise<R: Rng + ?Sized>(bound: u32, rng: &mut R) -> i64 {
    let b = i64::from(bound);
    rng.random_range(-b..=b)
}

/// Draw `n` independent noise terms from `[-bound, bound]`.
pub fn sample_noise_vec<R: Rng + ?Sized>(n: usize, bound: u32, rng: &mut R) -> Vec<i64> {
    (0..n).map(|_| sample_noise(bound, rng)).collect()
}
