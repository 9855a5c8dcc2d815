//! Implementation of ring ops using modular arithmetic.

use crate::errors::CipherError;

use super::{ALPHABET_SIZE, modular_inverse, normalize};

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_m using modular arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Default for Ring {
    fn default() -> Self {
        Ring::alphabet()
    }
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, CipherError> {
        if modulus <= 1 || modulus > i64::MAX as u64 {
            return Err(CipherError::InvalidModulus(format!(
                "Modulus must be greater than 1 and fit in i64, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// The ring Z_26 of letter residues.
    ///
    /// # Example
    ///
    /// ```
    /// # use classical_cipher::ring::Ring;
    /// assert_eq!(Ring::alphabet().modulus(), 26);
    /// ```
    pub fn alphabet() -> Self {
        Ring {
            modulus: ALPHABET_SIZE as u64,
        }
    }

    /// Returns the modulus of the ring.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classical_cipher::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.normalize(27), 1);
    /// assert_eq!(ring.normalize(-3), 23);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        normalize(value, self.modulus as i64)
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// The sum is taken in `i128`, so moduli close to `i64::MAX` do not wrap.
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 + b_norm as i128) % (self.modulus as i128);

        result as i64
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classical_cipher::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.sub(3, 5), 24);
    /// assert_eq!(ring.sub(-2, 3), 21);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 - b_norm as i128).rem_euclid(self.modulus as i128);

        result as i64
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        self.sub(0, a)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::NoInverse` if `gcd(a, modulus) != 1`, which includes `a == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classical_cipher::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.inv(3).unwrap(), 9); // 3 * 9 = 27 = 1 mod 26
    /// assert!(ring.inv(2).is_err()); // gcd(2, 26) = 2
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, CipherError> {
        modular_inverse(a, self.modulus as i64)
    }

    /// Whether `a` has a multiplicative inverse in this ring.
    pub fn is_unit(&self, a: i64) -> bool {
        super::gcd(self.normalize(a), self.modulus as i64) == 1
    }
}
