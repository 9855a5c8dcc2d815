use crate::cipher::{Cipher, substitute};
use crate::errors::CipherError;
use crate::ring::{ALPHABET_SIZE, Ring, gcd};

use serde::{Deserialize, Serialize};

/// Whether `a` can serve as the multiplier of an affine key, i.e. `gcd(a, 26) == 1`.
///
/// # Example
///
/// ```
/// # use classical_cipher::cipher::affine_key_valid;
/// assert!(affine_key_valid(5));
/// assert!(affine_key_valid(-3));
/// assert!(!affine_key_valid(13));
/// assert!(!affine_key_valid(0));
/// ```
pub fn affine_key_valid(a: i64) -> bool {
    gcd(a, ALPHABET_SIZE) == 1
}

/// Key of the map `x ↦ a·x + b (mod 26)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct AffineKey {
    a: i64,
    b: i64,
    a_inv: i64,
}

impl AffineKey {
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if `a` is not coprime with 26.
    pub fn try_with(a: i64, b: i64) -> Result<Self, CipherError> {
        if !affine_key_valid(a) {
            return Err(CipherError::InvalidKey(format!(
                "Affine multiplier must be coprime with 26, but gcd({}, 26) = {}",
                a,
                gcd(a, ALPHABET_SIZE)
            )));
        }

        let ring = Ring::alphabet();
        let a_inv = ring.inv(a)?;
        log::debug!("affine key a={} b={} a^-1={}", a, b, a_inv);

        Ok(Self {
            a: ring.normalize(a),
            b: ring.normalize(b),
            a_inv,
        })
    }

    pub fn a(&self) -> i64 {
        self.a
    }

    pub fn b(&self) -> i64 {
        self.b
    }
}

impl TryFrom<(i64, i64)> for AffineKey {
    type Error = CipherError;

    fn try_from((a, b): (i64, i64)) -> Result<Self, Self::Error> {
        AffineKey::try_with(a, b)
    }
}

impl From<AffineKey> for (i64, i64) {
    fn from(key: AffineKey) -> Self {
        (key.a, key.b)
    }
}

impl Cipher for AffineKey {
    fn encode(&self, message: &str) -> Result<String, CipherError> {
        let ring = Ring::alphabet();
        substitute(message, |x| ring.add(ring.mul(self.a, x), self.b))
    }

    fn decode(&self, message: &str) -> Result<String, CipherError> {
        let ring = Ring::alphabet();
        substitute(message, |y| ring.mul(self.a_inv, ring.sub(y, self.b)))
    }
}
