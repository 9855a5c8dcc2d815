use crate::errors::CipherError;
use crate::ring::{Matrix, Ring, Vector};

/// Working row of the elimination routines, wide enough for the intermediate minors.
type WideRow = Vec<i128>;

/// x·A where x is a length–m row‐vector and A is m×n.
/// Returns a length–n row‐vector.
pub fn vector_matrix_mul(x: &Vector, a: &Matrix, ring: &Ring) -> Result<Vector, CipherError> {
    let m = x.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    if a.len() != m {
        return Err(CipherError::DimensionMismatch(format!(
            "Vector length ({}) must match matrix rows ({})",
            m,
            a.len()
        )));
    }
    let n = a[0].len();
    // sanity‐check ragged rows
    for (i, row) in a.iter().enumerate() {
        if row.len() != n {
            return Err(CipherError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
    }

    let mut y = vec![0i64; n];
    for (j, out) in y.iter_mut().enumerate() {
        let mut sum = 0i64;
        for i in 0..m {
            let term = ring.mul(x[i], a[i][j]);
            sum = ring.add(sum, term);
        }
        *out = sum;
    }
    Ok(y)
}

/// Computes the matrix product `C = AB` modulo `m`, where `m` is the modulus of the ring.
///
/// # Errors
///
/// Returns `CipherError::DimensionMismatch` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, CipherError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = a[0].len(); // cols in A

    if b.len() != m_common {
        return Err(CipherError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }

    a.iter()
        .enumerate()
        .map(|(i, row)| {
            if row.len() != m_common {
                return Err(CipherError::DimensionMismatch(format!(
                    "Matrix A row {} has incorrect length (expected {})",
                    i, m_common
                )));
            }
            // Each output row is the row vector `row` times B.
            vector_matrix_mul(row, b, ring)
        })
        .collect()
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Returns the order of `matrix`, or an error if it is not square.
fn square_order(matrix: &Matrix) -> Result<usize, CipherError> {
    let n = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(CipherError::DimensionMismatch(format!(
                "Matrix must be square: row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
    }
    Ok(n)
}

/// One fraction-free elimination update: `(pivot * x - factor * y) / prev`.
///
/// The division is exact for Bareiss elimination.
fn bareiss_update(pivot: i128, x: i128, factor: i128, y: i128, prev: i128) -> Result<i128, CipherError> {
    let lhs = pivot.checked_mul(x).ok_or(CipherError::CalculationOverflow)?;
    let rhs = factor.checked_mul(y).ok_or(CipherError::CalculationOverflow)?;
    let diff = lhs.checked_sub(rhs).ok_or(CipherError::CalculationOverflow)?;
    Ok(diff / prev)
}

/// Computes the exact integer determinant of a square matrix.
///
/// Uses fraction-free (Bareiss) elimination, so no rounding is involved. A column with
/// no non-zero pivot candidate means the matrix is singular and the result is 0.
///
/// # Errors
///
/// Returns `CipherError::DimensionMismatch` if the matrix is not square.
/// Returns `CipherError::CalculationOverflow` if the determinant does not fit in `i64`.
///
/// # Example
///
/// ```
/// # use classical_cipher::ring::determinant;
/// assert_eq!(determinant(&vec![vec![3, 3], vec![2, 5]]).unwrap(), 9);
/// assert_eq!(determinant(&vec![vec![1, 2], vec![2, 4]]).unwrap(), 0);
/// ```
pub fn determinant(matrix: &Matrix) -> Result<i64, CipherError> {
    let n = square_order(matrix)?;
    if n == 0 {
        return Ok(1);
    }

    let mut a: Vec<WideRow> = matrix
        .iter()
        .map(|row| row.iter().map(|&v| v as i128).collect())
        .collect();
    let mut sign: i128 = 1;
    let mut prev: i128 = 1;

    for k in 0..n - 1 {
        if a[k][k] == 0 {
            match (k + 1..n).find(|&i| a[i][k] != 0) {
                Some(i) => {
                    a.swap(k, i);
                    sign = -sign;
                }
                None => return Ok(0),
            }
        }

        let pivot = a[k][k];
        for i in (k + 1)..n {
            let factor = a[i][k];
            for j in (k + 1)..n {
                a[i][j] = bareiss_update(pivot, a[i][j], factor, a[k][j], prev)?;
            }
            a[i][k] = 0;
        }
        prev = pivot;
    }

    let det = sign * a[n - 1][n - 1];
    i64::try_from(det).map_err(|_| CipherError::CalculationOverflow)
}

/// Computes the inverse of a square matrix modulo the ring's modulus.
///
/// The matrix is augmented with the identity, its rows are ordered by descending first-column
/// value, and fraction-free Gauss–Jordan elimination then reduces the left block to
/// `det · I` while turning the identity block into the adjugate of the reordered system.
/// Multiplying by `det⁻¹ mod m` yields the inverse.
///
/// # Errors
///
/// Returns `CipherError::DimensionMismatch` if the matrix is not square.
/// Returns `CipherError::NoInverse` if `gcd(det, m) != 1`.
/// Returns `CipherError::CalculationOverflow` if an intermediate minor overflows.
pub fn inverse_mod(matrix: &Matrix, ring: &Ring) -> Result<Matrix, CipherError> {
    let n = square_order(matrix)?;
    if n == 0 {
        return Ok(Vec::new());
    }
    let m = ring.modulus() as i128;

    // Reducing mod m first keeps the minors small without changing anything mod m.
    let mut rows: Vec<(WideRow, WideRow)> = matrix
        .iter()
        .zip(identity_matrix(n))
        .map(|(row, unit)| {
            (
                row.iter().map(|&v| ring.normalize(v) as i128).collect(),
                unit.into_iter().map(|v| v as i128).collect(),
            )
        })
        .collect();

    rows.sort_by(|lhs, rhs| rhs.0[0].cmp(&lhs.0[0]));

    let mut prev: i128 = 1;
    for k in 0..n {
        if rows[k].0[k] == 0 {
            let swap_with = (k + 1..n).find(|&i| rows[i].0[k] != 0).ok_or_else(|| {
                CipherError::NoInverse(format!("Matrix is singular mod {}", m))
            })?;
            rows.swap(k, swap_with);
        }

        let (pivot_left, pivot_right) = rows[k].clone();
        let pivot = pivot_left[k];
        for (i, (left, right)) in rows.iter_mut().enumerate() {
            if i == k {
                continue;
            }
            let factor = left[k];
            for j in 0..n {
                left[j] = bareiss_update(pivot, left[j], factor, pivot_left[j], prev)?;
                right[j] = bareiss_update(pivot, right[j], factor, pivot_right[j], prev)?;
            }
        }
        prev = pivot;
    }

    // Every diagonal entry now equals the determinant of the reordered matrix.
    let det = rows[0].0[0];
    let det_mod = det.rem_euclid(m) as i64;
    let inv_det = ring.inv(det_mod)?;

    let mut inverse = vec![vec![0i64; n]; n];
    for (i, (left, right)) in rows.iter().enumerate() {
        let diagonal = left[i];
        for j in 0..n {
            let adjugate = right[j]
                .checked_mul(det)
                .ok_or(CipherError::CalculationOverflow)?
                / diagonal;
            inverse[i][j] = ring.mul(inv_det, adjugate.rem_euclid(m) as i64);
        }
    }

    log::trace!("inverse_mod: det={} inv_det={} inverse={:?}", det, inv_det, inverse);

    Ok(inverse)
}
