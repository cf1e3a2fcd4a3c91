use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::ops::Mul;

// 2x2 matrix over arbitrary precision integers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    pub a: BigUint,
    pub b: BigUint,
    pub c: BigUint,
    pub d: BigUint,
}

impl Matrix {
    pub fn identity() -> Self {
        Matrix {
            a: BigUint::one(),
            b: BigUint::zero(),
            c: BigUint::zero(),
            d: BigUint::one(),
        }
    }

    /// The Q-matrix `[[1, 1], [1, 0]]`, whose n-th power is
    /// `[[F(n+1), F(n)], [F(n), F(n-1)]]`.
    pub fn fibonacci() -> Self {
        Matrix {
            a: BigUint::one(),
            b: BigUint::one(),
            c: BigUint::one(),
            d: BigUint::zero(),
        }
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Matrix {
        Matrix {
            a: &self.a * &rhs.a + &self.b * &rhs.c,
            b: &self.a * &rhs.b + &self.b * &rhs.d,
            c: &self.c * &rhs.a + &self.d * &rhs.c,
            d: &self.c * &rhs.b + &self.d * &rhs.d,
        }
    }
}

// Exponentiation by squaring (O(log n) multiplications)
pub fn matrix_pow(mut base: Matrix, mut exp: usize) -> Matrix {
    let mut result = Matrix::identity();

    while exp > 0 {
        if exp % 2 == 1 {
            result = &result * &base;
        }
        base = &base * &base;
        exp /= 2;
    }

    result
}

/// Returns `(F(n), F(n+1))` without touching any cache.
pub fn fibonacci_pair(n: usize) -> (BigUint, BigUint) {
    let m = matrix_pow(Matrix::fibonacci(), n);
    (m.c, m.a)
}

/// Evaluates `F(n)` directly. Used as an independent check on the memoized
/// generator.
///
/// ```
/// use fibonacci_memo::math;
/// use num_bigint::BigUint;
/// assert_eq!(math::nth(10), BigUint::from(55u32));
/// ```
pub fn nth(n: usize) -> BigUint {
    fibonacci_pair(n).0
}
