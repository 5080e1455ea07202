//! Fixed-size vector and matrix aliases.
//!
//! Dimensions are small and known at compile time, so everything is built
//! on nalgebra's statically sized `SMatrix` / `SVector` and lives on the
//! stack.

use fp_core::{Error, Real, Result};
use nalgebra::{SMatrix, SVector};

/// Complex scalar used for transform arguments and values.
pub type Complex = num_complex::Complex64;

/// A real column vector of dimension `N`.
pub type Vector<const N: usize> = SVector<Real, N>;

/// A real `M × N` matrix.
pub type Matrix<const M: usize, const N: usize> = SMatrix<Real, M, N>;

/// A complex column vector of dimension `N` (Laplace transform argument).
pub type ComplexVector<const N: usize> = SVector<Complex, N>;

/// Embed a real matrix or vector into the complex numbers.
pub fn complexify<const R: usize, const C: usize>(m: &SMatrix<Real, R, C>) -> SMatrix<Complex, R, C> {
    m.map(|x| Complex::new(x, 0.0))
}

/// Copy a slice into a fixed-size vector, failing with
/// [`Error::DimensionMismatch`] when the length is not `N`.
pub fn vector_from_slice<const N: usize>(data: &[Real]) -> Result<Vector<N>> {
    if data.len() != N {
        return Err(Error::DimensionMismatch {
            expected: N,
            actual: data.len(),
        });
    }
    Ok(Vector::<N>::from_column_slice(data))
}

/// `i·t·eₖ`: the `k`-th unit vector scaled by the purely imaginary `i·t`.
pub(crate) fn imaginary_axis<const N: usize>(k: usize, t: Real) -> ComplexVector<N> {
    let mut z = ComplexVector::<N>::zeros();
    z[k] = Complex::new(0.0, t);
    z
}
