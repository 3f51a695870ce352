use std::fmt;
use std::ops::{Add, Mul};

use crate::ring::modular::centered;

/// Cleartext polynomial `coeffs[0] + coeffs[1]·X + ...` over the integers.
///
/// `degree` is the nominal ring degree N. Arithmetic never reduces modulo
/// X^N + 1 and never reduces coefficients, so `coeffs` may be longer than
/// `degree` after a multiplication.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plaintext {
    pub coeffs: Vec<i64>,
    pub degree: usize,
}

impl Plaintext {
    /// Create a plaintext from coefficients.
    ///
    /// An empty coefficient vector with a positive `degree` is zero-filled to
    /// `degree` entries; any other vector is kept verbatim.
    pub fn new(coeffs: Vec<i64>, degree: usize) -> Self {
        let coeffs = if coeffs.is_empty() && degree > 0 {
            vec![0i64; degree]
        } else {
            coeffs
        };
        Self { coeffs, degree }
    }

    /// Zero polynomial with `degree` coefficients.
    pub fn zero(degree: usize) -> Self {
        Self::new(Vec::new(), degree)
    }

    pub fn coeffs(&self) -> &[i64] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of stored coefficients.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Centered view modulo q: residues above q/2 become negative.
    /// Useful for reading small signed values out of a decryption.
    pub fn centered(&self, q: i64) -> Vec<i64> {
        self.coeffs.iter().map(|&c| centered(c, q)).collect()
    }
}

impl Add for &Plaintext {
    type Output = Plaintext;

    /// Coefficient-wise sum, missing positions read as 0. Keeps the left degree.
    fn add(self, rhs: &Plaintext) -> Plaintext {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).copied().unwrap_or(0);
                let b = rhs.coeffs.get(i).copied().unwrap_or(0);
                a + b
            })
            .collect();
        Plaintext {
            coeffs,
            degree: self.degree,
        }
    }
}

impl Add for Plaintext {
    type Output = Plaintext;
    fn add(self, rhs: Plaintext) -> Plaintext {
        &self + &rhs
    }
}

impl Add<&Plaintext> for Plaintext {
    type Output = Plaintext;
    fn add(self, rhs: &Plaintext) -> Plaintext {
        &self + rhs
    }
}

impl Mul for &Plaintext {
    type Output = Plaintext;

    /// Full schoolbook convolution, length |a| + |b| - 1. Keeps the left degree.
    fn mul(self, rhs: &Plaintext) -> Plaintext {
        if self.coeffs.is_empty() || rhs.coeffs.is_empty() {
            return Plaintext {
                coeffs: Vec::new(),
                degree: self.degree,
            };
        }

        let mut coeffs = vec![0i64; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }

        Plaintext {
            coeffs,
            degree: self.degree,
        }
    }
}

impl Mul for Plaintext {
    type Output = Plaintext;
    fn mul(self, rhs: Plaintext) -> Plaintext {
        &self * &rhs
    }
}

impl Mul<&Plaintext> for Plaintext {
    type Output = Plaintext;
    fn mul(self, rhs: &Plaintext) -> Plaintext {
        &self * rhs
    }
}

/// Writes `coeffs` as a comma-separated list in square brackets.
pub(crate) fn write_coeffs(f: &mut fmt::Formatter<'_>, coeffs: &[i64]) -> fmt::Result {
    f.write_str("[")?;
    for (i, c) in coeffs.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Plaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coeffs(f, &self.coeffs)
    }
}
