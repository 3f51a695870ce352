/// Largest modulus for which the product of two residues fits in an `i64`.
pub const MAX_MODULUS: i64 = 1 << 31;

/// Canonical residue of `x` modulo `q`: `((x mod q) + q) mod q`, always in `[0, q)`.
///
/// Negative inputs (noise, subtraction) land on their positive representative.
#[inline(always)]
pub fn reduce(x: i64, q: i64) -> i64 {
    debug_assert!(q > 0 && q <= MAX_MODULUS, "modulus {q} out of range");
    ((x % q) + q) % q
}

/// Modular addition: (a + b) mod q for arbitrary signed inputs.
#[inline(always)]
pub fn mod_add(a: i64, b: i64, q: i64) -> i64 {
    reduce(reduce(a, q) + reduce(b, q), q)
}

/// Modular subtraction: (a - b) mod q for arbitrary signed inputs.
#[inline(always)]
pub fn mod_sub(a: i64, b: i64, q: i64) -> i64 {
    reduce(reduce(a, q) - reduce(b, q), q)
}

/// Modular negation: (-a) mod q.
#[inline(always)]
pub fn mod_neg(a: i64, q: i64) -> i64 {
    reduce(-reduce(a, q), q)
}

/// Modular multiplication: (a * b) mod q.
///
/// Both factors are reduced first, so the product stays below 2^62 whenever
/// `q <= 2^31`.
#[inline(always)]
pub fn mod_mul(a: i64, b: i64, q: i64) -> i64 {
    reduce(reduce(a, q) * reduce(b, q), q)
}

/// Centered representative: maps [0, q) -> (-q/2, q/2].
pub fn centered(x: i64, q: i64) -> i64 {
    let r = reduce(x, q);
    if r > q / 2 {
        r - q
    } else {
        r
    }
}

/// Distance between `a` and `b` on the ring Z_q: the smaller of
/// `(a - b) mod q` and `(b - a) mod q`.
pub fn residue_distance(a: i64, b: i64, q: i64) -> i64 {
    let d = mod_sub(a, b, q);
    d.min(q - d)
}
