//! `CovarianceMatrix`: a symmetric positive semi-definite matrix of fixed
//! dimension, with its volatility / correlation decomposition.
//!
//! This is a thin newtype around a statically sized nalgebra matrix.
//! Symmetry and positive semi-definiteness are the caller's responsibility:
//! constructors do not check them (only `debug_assert!` for symmetry) and
//! invalid inputs simply produce invalid numbers, e.g. a `NaN` correlation
//! for a zero volatility. [`CovarianceMatrix::validate`] is available for
//! callers that want an explicit check.
//!
//! ```text
//! cov = D · R · D,   D = diag(volatilities),   R = correlations
//! ```

use crate::types::{Matrix, Vector};
use fp_core::{ensure, errors::Error, Correlation, Real, Result, Volatility};
use std::ops::{Add, Index, Mul, Sub};

/// A symmetric `N × N` covariance matrix.
///
/// Scaling by a non-negative scalar (e.g. a time horizon) preserves both
/// symmetry and positive semi-definiteness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CovarianceMatrix<const N: usize>(Matrix<N, N>);

impl<const N: usize> CovarianceMatrix<N> {
    /// The zero covariance matrix (a degenerate, deterministic vector).
    pub fn zeros() -> Self {
        Self(Matrix::zeros())
    }

    /// The identity: independent components with unit variance.
    pub fn identity() -> Self {
        Self(Matrix::identity())
    }

    /// Wrap explicit matrix entries. The caller guarantees symmetry and PSD.
    pub fn from_matrix(m: Matrix<N, N>) -> Self {
        debug_assert!(is_symmetric(&m, 1e-12), "covariance matrix must be symmetric");
        Self(m)
    }

    /// Create from row-major entries.
    ///
    /// Fails with [`Error::DimensionMismatch`] unless `data` holds exactly
    /// `N * N` values.
    pub fn from_row_slice(data: &[Real]) -> Result<Self> {
        if data.len() != N * N {
            return Err(Error::DimensionMismatch {
                expected: N * N,
                actual: data.len(),
            });
        }
        Ok(Self::from_matrix(Matrix::from_row_slice(data)))
    }

    /// Build `D · R · D` from volatilities and a correlation matrix.
    pub fn from_vols_and_correlations(vols: &Vector<N>, correlations: &Matrix<N, N>) -> Self {
        let d = Matrix::from_diagonal(vols);
        Self(d * correlations * d)
    }

    /// Volatilities `sqrt(diag(cov))`.
    pub fn volatilities(&self) -> Vector<N> {
        self.0.diagonal().map(Real::sqrt)
    }

    /// Correlation matrix `D⁻¹ · cov · D⁻¹`.
    pub fn correlations(&self) -> Matrix<N, N> {
        self.correlations_with(&self.volatilities())
    }

    /// Correlation matrix using precomputed volatilities.
    pub fn correlations_with(&self, vols: &Vector<N>) -> Matrix<N, N> {
        let inv = Matrix::from_diagonal(&vols.map(|v| 1.0 / v));
        inv * self.0 * inv
    }

    /// Split into `(volatilities, correlations)`.
    pub fn decompose(&self) -> (Vector<N>, Matrix<N, N>) {
        let vols = self.volatilities();
        let corr = self.correlations_with(&vols);
        (vols, corr)
    }

    /// The variances, i.e. the diagonal.
    pub fn diagonal(&self) -> Vector<N> {
        self.0.diagonal()
    }

    /// Variance of the `i`-th component.
    pub fn variance(&self, i: usize) -> Real {
        self.0[(i, i)]
    }

    /// `t · cov`. Requires `t >= 0` to stay positive semi-definite.
    pub fn scaled(&self, t: Real) -> Self {
        debug_assert!(t >= 0.0, "covariance scale must be non-negative, got {t}");
        Self(self.0 * t)
    }

    /// `cov − v · vᵗ`: turns a raw second-moment matrix into a centred one.
    pub fn sub_outer(&self, v: &Vector<N>) -> Self {
        Self(self.0 - v * v.transpose())
    }

    /// `A · cov · Aᵗ`, the covariance of `A · X`.
    pub fn transform<const K: usize>(&self, a: &Matrix<K, N>) -> CovarianceMatrix<K> {
        CovarianceMatrix(a * self.0 * a.transpose())
    }

    /// Borrow the underlying matrix.
    pub fn as_matrix(&self) -> &Matrix<N, N> {
        &self.0
    }

    /// Consume and return the underlying matrix.
    pub fn into_inner(self) -> Matrix<N, N> {
        self.0
    }

    /// Check symmetry (within `tolerance`), finiteness and non-negative
    /// variances. Positive semi-definiteness beyond the diagonal is not
    /// checked.
    pub fn validate(&self, tolerance: Real) -> Result<()> {
        let ok = self.check(tolerance);
        if ok.is_err() {
            tracing::warn!(dimension = N, "rejected covariance matrix");
        }
        ok
    }

    fn check(&self, tolerance: Real) -> Result<()> {
        ensure!(
            self.0.iter().all(|x| x.is_finite()),
            "covariance entries must be finite"
        );
        ensure!(
            is_symmetric(&self.0, tolerance),
            "covariance matrix is not symmetric within {tolerance}"
        );
        for i in 0..N {
            let v = self.0[(i, i)];
            ensure!(v >= 0.0, "variance {i} is negative: {v}");
        }
        Ok(())
    }
}

fn is_symmetric<const N: usize>(m: &Matrix<N, N>, tolerance: Real) -> bool {
    (0..N).all(|i| (0..i).all(|j| (m[(i, j)] - m[(j, i)]).abs() <= tolerance))
}

// ── Low-dimensional constructors ─────────────────────────────────────────────

impl CovarianceMatrix<1> {
    /// A 1 × 1 covariance holding `variance`.
    pub fn from_variance(variance: Real) -> Self {
        Self(Matrix::<1, 1>::new(variance))
    }

    /// The variance as a scalar.
    pub fn variance_scalar(&self) -> Real {
        self.0[(0, 0)]
    }

    /// The volatility as a scalar.
    pub fn volatility(&self) -> Volatility {
        self.0[(0, 0)].sqrt()
    }

    /// A single component is perfectly correlated with itself.
    pub fn corrcoef(&self) -> Correlation {
        1.0
    }
}

impl CovarianceMatrix<2> {
    /// Build a 2 × 2 covariance from two volatilities and their correlation.
    pub fn from_vols_and_corr(vol1: Volatility, vol2: Volatility, corr: Correlation) -> Self {
        let c = vol1 * vol2 * corr;
        Self(Matrix::<2, 2>::new(vol1 * vol1, c, c, vol2 * vol2))
    }

    /// The correlation coefficient as a scalar.
    pub fn corrcoef(&self) -> Correlation {
        self.correlations()[(0, 1)]
    }
}

// ── Conversions ──────────────────────────────────────────────────────────────

impl<const N: usize> Default for CovarianceMatrix<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> From<CovarianceMatrix<N>> for Matrix<N, N> {
    fn from(c: CovarianceMatrix<N>) -> Self {
        c.0
    }
}

impl<const N: usize> Index<(usize, usize)> for CovarianceMatrix<N> {
    type Output = Real;
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        &self.0[(i, j)]
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────────

impl<const N: usize> Add for CovarianceMatrix<N> {
    type Output = CovarianceMatrix<N>;
    fn add(self, rhs: CovarianceMatrix<N>) -> CovarianceMatrix<N> {
        CovarianceMatrix(self.0 + rhs.0)
    }
}

impl<const N: usize> Sub for CovarianceMatrix<N> {
    type Output = CovarianceMatrix<N>;
    fn sub(self, rhs: CovarianceMatrix<N>) -> CovarianceMatrix<N> {
        CovarianceMatrix(self.0 - rhs.0)
    }
}

impl<const N: usize> Mul<CovarianceMatrix<N>> for Real {
    type Output = CovarianceMatrix<N>;
    fn mul(self, rhs: CovarianceMatrix<N>) -> CovarianceMatrix<N> {
        rhs.scaled(self)
    }
}

impl<const N: usize> Mul<Real> for CovarianceMatrix<N> {
    type Output = CovarianceMatrix<N>;
    fn mul(self, rhs: Real) -> CovarianceMatrix<N> {
        self.scaled(rhs)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl<const N: usize> std::fmt::Display for CovarianceMatrix<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..N {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..N {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.0[(i, j)])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
