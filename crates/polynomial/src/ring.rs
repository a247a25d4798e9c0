// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Elements of `Z_q[x]/(x^N + 1)`.
//!
//! Coefficients are stored as residues in `[0, q)`, lowest degree first.
//! Reduction by `x^N + 1` means `x^N = -1`, so a product term that lands at
//! index `i + j >= N` wraps to `i + j - N` with its sign flipped.

use crate::errors::PolynomialError;
use crate::signed::SignedSmall;
use audit_params::RlweParams;
use rand::{CryptoRng, Rng, RngCore};
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RingElement {
    coefficients: Vec<u64>,
    modulus: u64,
}

impl RingElement {
    /// Builds an element from reduced residues.
    pub fn new(coefficients: Vec<u64>, params: &RlweParams) -> Result<Self, PolynomialError> {
        Self::with_modulus(coefficients, params.degree(), params.ciphertext_modulus())
    }

    /// Builds an element for an explicit degree and modulus.
    pub fn with_modulus(
        coefficients: Vec<u64>,
        degree: usize,
        modulus: u64,
    ) -> Result<Self, PolynomialError> {
        if coefficients.len() != degree {
            return Err(PolynomialError::DegreeMismatch {
                expected: degree,
                actual: coefficients.len(),
            });
        }
        if let Some((index, &value)) = coefficients.iter().enumerate().find(|&(_, &c)| c >= modulus)
        {
            return Err(PolynomialError::CoefficientOutOfRange {
                index,
                value,
                modulus,
            });
        }
        Ok(Self {
            coefficients,
            modulus,
        })
    }

    pub fn zero(params: &RlweParams) -> Self {
        Self {
            coefficients: vec![0; params.degree()],
            modulus: params.ciphertext_modulus(),
        }
    }

    /// Embeds small signed values as residues modulo q.
    pub fn from_signed(
        values: &[SignedSmall],
        params: &RlweParams,
    ) -> Result<Self, PolynomialError> {
        let q = params.ciphertext_modulus();
        Self::new(values.iter().map(|v| v.to_field(q)).collect(), params)
    }

    /// Draws every coefficient uniformly from `[0, q)`.
    pub fn sample_uniform<R: RngCore + CryptoRng + ?Sized>(
        rng: &mut R,
        params: &RlweParams,
    ) -> Self {
        let q = params.ciphertext_modulus();
        Self {
            coefficients: (0..params.degree()).map(|_| rng.gen_range(0..q)).collect(),
            modulus: q,
        }
    }

    pub fn coefficients(&self) -> &[u64] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<u64> {
        self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn add(&self, other: &Self) -> Result<Self, PolynomialError> {
        self.check_compatible(other)?;
        let q = self.modulus;
        let coefficients = self
            .coefficients
            .iter()
            .zip(&other.coefficients)
            .map(|(&a, &b)| ((a as u128 + b as u128) % q as u128) as u64)
            .collect();
        Ok(Self {
            coefficients,
            modulus: q,
        })
    }

    pub fn neg(&self) -> Self {
        let q = self.modulus;
        Self {
            coefficients: self.coefficients.iter().map(|&a| (q - a) % q).collect(),
            modulus: q,
        }
    }

    pub fn sub(&self, other: &Self) -> Result<Self, PolynomialError> {
        self.add(&other.neg())
    }

    /// Negacyclic product `self * other mod (x^N + 1, q)`.
    ///
    /// Each output coefficient is accumulated exactly in `u128` before the
    /// final reduction, so the result does not depend on evaluation order.
    pub fn negacyclic_multiply(&self, other: &Self) -> Result<Self, PolynomialError> {
        self.check_compatible(other)?;
        let n = self.degree();
        let q = self.modulus as u128;
        let a = &self.coefficients;
        let b = &other.coefficients;

        let coefficients = (0..n)
            .into_par_iter()
            .map(|k| {
                // Terms with i <= k land on k directly, the rest wrap with a sign flip.
                let positive: u128 = (0..=k).map(|i| a[i] as u128 * b[k - i] as u128).sum();
                let negative: u128 = (k + 1..n)
                    .map(|i| a[i] as u128 * b[k + n - i] as u128)
                    .sum();
                ((positive % q + q - negative % q) % q) as u64
            })
            .collect();

        Ok(Self {
            coefficients,
            modulus: self.modulus,
        })
    }

    /// Row `k` of the matrix of multiplication by `self`.
    ///
    /// `row[j] = self[k - j]` for `j <= k` and `-self[k - j + N] mod q`
    /// otherwise, so that `<row, r> = (self * r)[k] (mod q)`.
    pub fn negacyclic_matrix_row(&self, k: usize) -> Result<Vec<u64>, PolynomialError> {
        let n = self.degree();
        if k >= n {
            return Err(PolynomialError::IndexOutOfRange {
                index: k,
                degree: n,
            });
        }
        let q = self.modulus;
        Ok((0..n)
            .map(|j| {
                if j <= k {
                    self.coefficients[k - j]
                } else {
                    (q - self.coefficients[k + n - j]) % q
                }
            })
            .collect())
    }

    fn check_compatible(&self, other: &Self) -> Result<(), PolynomialError> {
        if self.modulus != other.modulus {
            return Err(PolynomialError::ModulusMismatch {
                left: self.modulus,
                right: other.modulus,
            });
        }
        if self.degree() != other.degree() {
            return Err(PolynomialError::DegreeMismatch {
                expected: self.degree(),
                actual: other.degree(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const Q: u64 = 167772161;

    fn element(coefficients: Vec<u64>) -> RingElement {
        let n = coefficients.len();
        RingElement::with_modulus(coefficients, n, Q).unwrap()
    }

    /// Schoolbook product followed by reduction by x^N + 1.
    fn reference_multiply(a: &[u64], b: &[u64]) -> Vec<u64> {
        let n = a.len();
        let mut acc = vec![0i128; n];
        for i in 0..n {
            for j in 0..n {
                let term = a[i] as i128 * b[j] as i128;
                if i + j < n {
                    acc[i + j] += term;
                } else {
                    acc[i + j - n] -= term;
                }
            }
        }
        acc.into_iter()
            .map(|v| v.rem_euclid(Q as i128) as u64)
            .collect()
    }

    #[test]
    fn x_to_the_n_is_minus_one() {
        // x^(N-1) * x = x^N = -1
        let n = 8;
        let mut a = vec![0; n];
        a[n - 1] = 1;
        let mut x = vec![0; n];
        x[1] = 1;
        let product = element(a).negacyclic_multiply(&element(x)).unwrap();
        let mut expected = vec![0; n];
        expected[0] = Q - 1;
        assert_eq!(product.coefficients(), expected.as_slice());
    }

    #[test]
    fn rejects_unreduced_or_wrong_length() {
        assert!(matches!(
            RingElement::with_modulus(vec![Q], 1, Q),
            Err(PolynomialError::CoefficientOutOfRange { index: 0, .. })
        ));
        assert!(matches!(
            RingElement::with_modulus(vec![0; 3], 4, Q),
            Err(PolynomialError::DegreeMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn mismatched_operands_fail() {
        let a = element(vec![1; 4]);
        let b = element(vec![1; 8]);
        assert!(a.negacyclic_multiply(&b).is_err());
        let c = RingElement::with_modulus(vec![1; 4], 4, 97).unwrap();
        assert!(matches!(
            a.add(&c),
            Err(PolynomialError::ModulusMismatch { .. })
        ));
    }

    #[test]
    fn matrix_row_bounds() {
        let a = element(vec![1, 2, 3, 4]);
        assert_eq!(a.negacyclic_matrix_row(0).unwrap(), vec![1, Q - 4, Q - 3, Q - 2]);
        assert_eq!(a.negacyclic_matrix_row(3).unwrap(), vec![4, 3, 2, 1]);
        assert!(a.negacyclic_matrix_row(4).is_err());
    }

    #[test]
    fn neg_of_zero_is_zero() {
        let z = element(vec![0; 4]);
        assert_eq!(z.neg(), z);
        let a = element(vec![5, 0, Q - 1, 1]);
        assert_eq!(a.add(&a.neg()).unwrap(), z);
    }

    fn residues(n: usize) -> impl Strategy<Value = Vec<u64>> {
        prop::collection::vec(0..Q, n)
    }

    proptest! {
        #[test]
        fn multiply_matches_schoolbook(a in residues(16), b in residues(16)) {
            let product = element(a.clone()).negacyclic_multiply(&element(b.clone())).unwrap();
            prop_assert_eq!(product.into_coefficients(), reference_multiply(&a, &b));
        }

        #[test]
        fn multiply_commutes(a in residues(16), b in residues(16)) {
            let (a, b) = (element(a), element(b));
            prop_assert_eq!(a.negacyclic_multiply(&b).unwrap(), b.negacyclic_multiply(&a).unwrap());
        }

        #[test]
        fn multiply_distributes(a in residues(8), b in residues(8), c in residues(8)) {
            let (a, b, c) = (element(a), element(b), element(c));
            let left = a.negacyclic_multiply(&b.add(&c).unwrap()).unwrap();
            let right = a
                .negacyclic_multiply(&b)
                .unwrap()
                .add(&a.negacyclic_multiply(&c).unwrap())
                .unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn matrix_rows_reproduce_product(a in residues(16), r in prop::collection::vec(-3i64..=3, 16)) {
            let a = element(a);
            let r_mod: Vec<u64> = r.iter().map(|&v| crate::utils::to_field(v, Q)).collect();
            let product = a.negacyclic_multiply(&element(r_mod)).unwrap();
            for k in 0..16 {
                let row = a.negacyclic_matrix_row(k).unwrap();
                let dot: i128 = row.iter().zip(&r).map(|(&x, &y)| x as i128 * y as i128).sum();
                prop_assert_eq!(dot.rem_euclid(Q as i128) as u64, product.coefficients()[k]);
            }
        }
    }
}
