use crate::cipher::Cipher;
use crate::errors::CipherError;
use crate::preset::alphabet::{SPACE, from_residue, to_residue, validate_message};
use crate::ring::matrix_ops::vector_matrix_mul;
use crate::ring::{ALPHABET_SIZE, Matrix, Ring, Vector, determinant, gcd, inverse_mod};

use serde::{Deserialize, Serialize};

/// Letter appended to the plaintext until it fills whole blocks.
pub const PADDING: char = 'x';

/// Smallest key order the cipher accepts.
pub const MIN_ORDER: usize = 2;

/// Whether `matrix` is usable as a Hill key: square, order ≥ 2, and
/// `gcd(det mod 26, 26) == 1`.
///
/// # Example
///
/// ```
/// # use classical_cipher::cipher::hill_key_valid;
/// assert!(hill_key_valid(&vec![vec![3, 3], vec![2, 5]]));
/// assert!(!hill_key_valid(&vec![vec![2, 4], vec![6, 8]]));
/// assert!(!hill_key_valid(&vec![vec![7]]));
/// ```
pub fn hill_key_valid(matrix: &Matrix) -> bool {
    check_key(matrix).is_ok()
}

fn check_key(matrix: &Matrix) -> Result<(), CipherError> {
    if matrix.len() < MIN_ORDER {
        return Err(CipherError::InvalidKey(format!(
            "Hill key must have order >= {}, got {}",
            MIN_ORDER,
            matrix.len()
        )));
    }

    // det is only needed mod 26.
    let ring = Ring::alphabet();
    let reduced: Matrix = matrix
        .iter()
        .map(|row| row.iter().map(|&v| ring.normalize(v)).collect())
        .collect();
    let det = determinant(&reduced).map_err(|e| CipherError::InvalidKey(e.to_string()))?;
    let det_mod = ring.normalize(det);
    if gcd(det_mod, ALPHABET_SIZE) != 1 {
        return Err(CipherError::InvalidKey(format!(
            "Determinant {} (≡ {} mod 26) is not coprime with 26",
            det, det_mod
        )));
    }

    Ok(())
}

/// Square key matrix together with its inverse mod 26.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Matrix", into = "Matrix")]
pub struct HillKey {
    matrix: Matrix,
    inverse: Matrix,
}

impl HillKey {
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the matrix is not square, has order below 2, or
    /// its determinant shares a factor with 26.
    pub fn try_with(matrix: Matrix) -> Result<Self, CipherError> {
        check_key(&matrix)?;
        let inverse = inverse_mod(&matrix, &Ring::alphabet())?;
        log::debug!("hill key of order {} accepted", matrix.len());

        Ok(Self { matrix, inverse })
    }

    pub fn order(&self) -> usize {
        self.matrix.len()
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn inverse(&self) -> &Matrix {
        &self.inverse
    }

    /// Letters of `message` as residues; spaces are dropped.
    fn residues(message: &str) -> Result<Vector, CipherError> {
        validate_message(message)?;
        message.chars().filter(|&ch| ch != SPACE).map(to_residue).collect()
    }

    /// Multiplies each block, as a row vector, by `key`.
    fn transform(&self, residues: &[i64], key: &Matrix) -> Result<String, CipherError> {
        let ring = Ring::alphabet();
        let mut out = String::with_capacity(residues.len());

        for block in residues.chunks(self.order()) {
            let product = vector_matrix_mul(&block.to_vec(), key, &ring)?;
            out.extend(product.into_iter().map(from_residue));
        }

        Ok(out)
    }
}

impl TryFrom<Matrix> for HillKey {
    type Error = CipherError;

    fn try_from(matrix: Matrix) -> Result<Self, Self::Error> {
        HillKey::try_with(matrix)
    }
}

impl From<HillKey> for Matrix {
    fn from(key: HillKey) -> Self {
        key.matrix
    }
}

impl Cipher for HillKey {
    /// Pads with `x` to a multiple of the order; the padding is kept on decode.
    fn encode(&self, message: &str) -> Result<String, CipherError> {
        let mut residues = Self::residues(message)?;
        let pad = to_residue(PADDING)?;
        while residues.len() % self.order() != 0 {
            residues.push(pad);
        }

        self.transform(&residues, &self.matrix)
    }

    fn decode(&self, message: &str) -> Result<String, CipherError> {
        let residues = Self::residues(message)?;
        if residues.len() % self.order() != 0 {
            return Err(CipherError::MalformedInput(format!(
                "Hill ciphertext has {} letters, not a multiple of the key order {}",
                residues.len(),
                self.order()
            )));
        }

        self.transform(&residues, &self.inverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::matrix_ops::{identity_matrix, matrix_mul};

    use quickcheck::TestResult;
    use quickcheck::quickcheck;

    fn key_2x2() -> HillKey {
        HillKey::try_with(vec![vec![3, 3], vec![2, 5]]).unwrap()
    }

    #[test]
    fn test_encode_known_vector() -> Result<(), CipherError> {
        let key = key_2x2();
        // [7, 4]·K = [3, 15], [11, 15]·K = [11, 4]
        assert_eq!(key.encode("help")?, "dple");
        assert_eq!(key.decode("dple")?, "help");
        Ok(())
    }

    #[test]
    fn test_padding_is_kept() -> Result<(), CipherError> {
        let key = key_2x2();
        let cipher = key.encode("hel")?;
        assert_eq!(cipher.len(), 4);
        assert_eq!(key.decode(&cipher)?, "helx");
        Ok(())
    }

    #[test]
    fn test_spaces_are_dropped() -> Result<(), CipherError> {
        let key = key_2x2();
        assert_eq!(key.encode("he lp")?, "dple");
        Ok(())
    }

    #[test]
    fn test_order_three_round_trip() -> Result<(), CipherError> {
        let key = HillKey::try_with(vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]])?;
        assert_eq!(key.encode("act")?, "qrt");
        assert_eq!(key.decode("qrt")?, "act");

        // Row vectors times the transpose give the column-vector textbook result "poh".
        let transposed = HillKey::try_with(vec![vec![6, 13, 20], vec![24, 16, 17], vec![1, 10, 15]])?;
        assert_eq!(transposed.encode("act")?, "poh");
        Ok(())
    }

    #[test]
    fn test_inverse_is_cached_and_correct() {
        let key = key_2x2();
        let ring = Ring::alphabet();
        let product = matrix_mul(key.matrix(), key.inverse(), &ring).unwrap();
        assert_eq!(product, identity_matrix(2));
    }

    #[test]
    fn test_rejects_invalid_keys() {
        // det = -8
        assert!(matches!(
            HillKey::try_with(vec![vec![2, 4], vec![6, 8]]),
            Err(CipherError::InvalidKey(_))
        ));
        // det = 13
        assert!(HillKey::try_with(vec![vec![13, 0], vec![0, 1]]).is_err());
        // not square
        assert!(HillKey::try_with(vec![vec![1, 2, 3], vec![4, 5, 6]]).is_err());
        // order 1
        assert!(HillKey::try_with(vec![vec![3]]).is_err());
    }

    #[test]
    fn test_huge_entries_are_read_mod_26() -> Result<(), CipherError> {
        // Each entry is ≡ its counterpart in [[3, 3], [2, 5]], but the raw determinant
        // does not fit in i64.
        let big = 26 * 354_745_078_340_568_300;
        let matrix = vec![vec![big + 3, big + 3], vec![big + 2, big + 5]];
        assert!(hill_key_valid(&matrix));

        let key = HillKey::try_with(matrix)?;
        assert_eq!(key.inverse(), key_2x2().inverse());
        assert_eq!(key.encode("help")?, "dple");
        assert_eq!(key.decode("dple")?, "help");
        Ok(())
    }

    #[test]
    fn test_decode_rejects_partial_block() {
        assert!(matches!(
            key_2x2().decode("abc"),
            Err(CipherError::MalformedInput(_))
        ));
    }

    quickcheck! {
        fn prop_matrix_times_inverse_is_identity(entries: Vec<i8>) -> TestResult {
            if entries.len() < 9 {
                return TestResult::discard();
            }
            let matrix: Matrix = entries[..9].chunks(3).map(|r| r.iter().map(|&v| v as i64).collect()).collect();
            if !hill_key_valid(&matrix) {
                return TestResult::discard();
            }
            let key = match HillKey::try_with(matrix.clone()) {
                Ok(key) => key,
                Err(e) => return TestResult::error(e.to_string()),
            };
            let ring = Ring::alphabet();
            match matrix_mul(&matrix, key.inverse(), &ring) {
                Ok(product) => TestResult::from_bool(product == identity_matrix(3)),
                Err(e) => TestResult::error(e.to_string()),
            }
        }

        fn prop_round_trip_on_whole_blocks(raw: Vec<u8>) -> bool {
            let key = key_2x2();
            let mut message: String = raw.iter().map(|b| (b'a' + b % 26) as char).collect();
            if message.len() % 2 == 1 {
                message.pop();
            }
            key.encode(&message).and_then(|c| key.decode(&c)).ok() == Some(message)
        }
    }
}
