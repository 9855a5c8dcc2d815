use crate::cipher::{Cipher, substitute};
use crate::errors::CipherError;
use crate::preset::alphabet::{to_residue, validate_keyword};
use crate::ring::Ring;

use serde::{Deserialize, Serialize};

/// Polyalphabetic key: a non-empty lowercase keyword applied cyclically.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VigenereKey {
    keyword: String,
    shifts: Vec<i64>,
}

impl VigenereKey {
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the keyword is empty or not purely lowercase letters.
    pub fn try_with(keyword: &str) -> Result<Self, CipherError> {
        validate_keyword(keyword)?;
        let shifts = keyword.chars().map(to_residue).collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            keyword: keyword.to_string(),
            shifts,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Applies the keyword stream; the cursor only advances on letters.
    fn run(&self, message: &str, sign: i64) -> Result<String, CipherError> {
        let ring = Ring::alphabet();
        let mut stream = self.shifts.iter().cycle();

        substitute(message, |residue| {
            // `shifts` is never empty, so the cycle never ends.
            let shift = stream.next().copied().unwrap_or(0);
            ring.add(residue, sign * shift)
        })
    }
}

impl TryFrom<String> for VigenereKey {
    type Error = CipherError;

    fn try_from(keyword: String) -> Result<Self, Self::Error> {
        VigenereKey::try_with(&keyword)
    }
}

impl From<VigenereKey> for String {
    fn from(key: VigenereKey) -> Self {
        key.keyword
    }
}

impl Cipher for VigenereKey {
    fn encode(&self, message: &str) -> Result<String, CipherError> {
        self.run(message, 1)
    }

    fn decode(&self, message: &str) -> Result<String, CipherError> {
        self.run(message, -1)
    }
}
