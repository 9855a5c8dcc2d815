use crate::cipher::{Cipher, substitute};
use crate::errors::CipherError;
use crate::ring::Ring;

use serde::{Deserialize, Serialize};

/// Number of distinct shifts, and so of brute-force candidates.
const CANDIDATE_COUNT: usize = 26;

/// Shift cipher key, stored reduced into `[0, 26)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct CaesarKey {
    shift: i64,
}

impl CaesarKey {
    /// Any integer is a valid shift; it is normalized mod 26.
    ///
    /// # Example
    ///
    /// ```
    /// # use classical_cipher::cipher::CaesarKey;
    /// assert_eq!(CaesarKey::new(29).shift(), 3);
    /// assert_eq!(CaesarKey::new(-1).shift(), 25);
    /// ```
    pub fn new(shift: i64) -> Self {
        Self {
            shift: Ring::alphabet().normalize(shift),
        }
    }

    pub fn shift(&self) -> i64 {
        self.shift
    }
}

impl From<i64> for CaesarKey {
    fn from(shift: i64) -> Self {
        CaesarKey::new(shift)
    }
}

impl From<CaesarKey> for i64 {
    fn from(key: CaesarKey) -> Self {
        key.shift
    }
}

impl Cipher for CaesarKey {
    fn encode(&self, message: &str) -> Result<String, CipherError> {
        rotate(message, self.shift)
    }

    fn decode(&self, message: &str) -> Result<String, CipherError> {
        rotate(message, Ring::alphabet().neg(self.shift))
    }
}

/// Rotates every letter of `message` by `shift` positions, wrapping around the alphabet.
pub fn rotate(message: &str, shift: i64) -> Result<String, CipherError> {
    let ring = Ring::alphabet();
    substitute(message, |residue| ring.add(residue, shift))
}

/// Lists all 26 candidate decryptions of `message`.
///
/// Entry `k` is the message shifted back by `k`. Each entry is produced by rotating the
/// previous one by a single step, starting from the ciphertext itself at shift 0.
pub fn brute_force(message: &str) -> Result<Vec<String>, CipherError> {
    let mut candidates = Vec::with_capacity(CANDIDATE_COUNT);
    candidates.push(rotate(message, 0)?);

    while candidates.len() < CANDIDATE_COUNT {
        let previous = &candidates[candidates.len() - 1];
        let next = rotate(previous, -1)?;
        candidates.push(next);
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_encode_known_vector() -> Result<(), CipherError> {
        let key = CaesarKey::new(3);
        assert_eq!(key.encode("hello world")?, "khoor zruog");
        assert_eq!(key.decode("khoor zruog")?, "hello world");
        Ok(())
    }

    #[test]
    fn test_wraparound() -> Result<(), CipherError> {
        assert_eq!(CaesarKey::new(1).encode("xyz")?, "yza");
        assert_eq!(CaesarKey::new(1).decode("abc")?, "zab");
        assert_eq!(CaesarKey::new(25).encode("a")?, "z");
        Ok(())
    }

    #[test]
    fn test_shift_is_normalized() -> Result<(), CipherError> {
        assert_eq!(CaesarKey::new(-3).encode("khoor")?, "hello");
        assert_eq!(CaesarKey::new(26).encode("abc")?, "abc");
        assert_eq!(CaesarKey::new(55), CaesarKey::new(3));
        Ok(())
    }

    #[test]
    fn test_rejects_uppercase() {
        assert!(matches!(
            CaesarKey::new(3).encode("Hello"),
            Err(CipherError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_brute_force_lists_every_shift() -> Result<(), CipherError> {
        let candidates = brute_force("khoor zruog")?;
        assert_eq!(candidates.len(), 26);
        assert_eq!(candidates[0], "khoor zruog");
        assert_eq!(candidates[1], "jgnnq yqtnf");
        assert_eq!(candidates[3], "hello world");
        assert_eq!(candidates[25], "lipps asvph");
        Ok(())
    }

    #[test]
    fn test_brute_force_empty_and_spaces() -> Result<(), CipherError> {
        let candidates = brute_force("  ")?;
        assert!(candidates.iter().all(|c| c == "  "));
        assert!(brute_force("x1").is_err());
        Ok(())
    }

    #[quickcheck]
    fn prop_round_trip(words: Vec<u8>, shift: i64) -> TestResult {
        let message: String = words
            .iter()
            .map(|b| if b % 7 == 0 { ' ' } else { (b'a' + b % 26) as char })
            .collect();
        let key = CaesarKey::new(shift);
        match key.encode(&message).and_then(|c| key.decode(&c)) {
            Ok(plain) => TestResult::from_bool(plain == message),
            Err(e) => TestResult::error(e.to_string()),
        }
    }

    #[quickcheck]
    fn prop_brute_force_matches_direct_decode(words: Vec<u8>) -> bool {
        let message: String = words.iter().map(|b| (b'a' + b % 26) as char).collect();
        let candidates = match brute_force(&message) {
            Ok(candidates) => candidates,
            Err(_) => return false,
        };
        candidates
            .iter()
            .enumerate()
            .all(|(shift, candidate)| CaesarKey::new(shift as i64).decode(&message).ok().as_ref() == Some(candidate))
    }
}
