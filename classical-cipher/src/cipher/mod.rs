//! # Cipher Module
//!
//! The six classical ciphers. Each key type implements [`Cipher`]; [`CipherKey`] is the
//! tagged union a front end stores once the user has picked a cipher and entered its key.

pub mod affine;
pub mod caesar;
pub mod hill;
pub mod playfair;
pub mod transposition;
pub mod vigenere;

pub use affine::{AffineKey, affine_key_valid};
pub use caesar::{CaesarKey, brute_force};
pub use hill::{HillKey, hill_key_valid};
pub use playfair::{PlayfairGrid, PlayfairKey};
pub use transposition::TranspositionKey;
pub use vigenere::VigenereKey;

use crate::errors::CipherError;
use crate::preset::alphabet::{SPACE, from_residue, to_residue, validate_message};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The encode/decode contract shared by every cipher.
pub trait Cipher {
    /// Transforms plaintext into ciphertext.
    fn encode(&self, message: &str) -> Result<String, CipherError>;

    /// Transforms ciphertext back into plaintext.
    fn decode(&self, message: &str) -> Result<String, CipherError>;

    /// Runs [`Cipher::encode`] or [`Cipher::decode`] depending on `direction`.
    fn apply(&self, direction: Direction, message: &str) -> Result<String, CipherError> {
        match direction {
            Direction::Encode => self.encode(message),
            Direction::Decode => self.decode(message),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Encode,
    Decode,
}

/// Names a cipher without any key material.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CipherKind {
    Caesar,
    Affine,
    Vigenere,
    Hill,
    Transposition,
    Playfair,
}

impl CipherKind {
    /// All ciphers in menu order.
    pub const ALL: [CipherKind; 6] = [
        CipherKind::Caesar,
        CipherKind::Affine,
        CipherKind::Vigenere,
        CipherKind::Hill,
        CipherKind::Transposition,
        CipherKind::Playfair,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CipherKind::Caesar => "Caesar",
            CipherKind::Affine => "Affine",
            CipherKind::Vigenere => "Vigenere",
            CipherKind::Hill => "Hill",
            CipherKind::Transposition => "Transposition",
            CipherKind::Playfair => "Playfair",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A validated key for one of the six ciphers.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum CipherKey {
    Caesar(CaesarKey),
    Affine(AffineKey),
    Vigenere(VigenereKey),
    Hill(HillKey),
    Transposition(TranspositionKey),
    Playfair(PlayfairKey),
}

impl CipherKey {
    pub fn kind(&self) -> CipherKind {
        match self {
            CipherKey::Caesar(_) => CipherKind::Caesar,
            CipherKey::Affine(_) => CipherKind::Affine,
            CipherKey::Vigenere(_) => CipherKind::Vigenere,
            CipherKey::Hill(_) => CipherKind::Hill,
            CipherKey::Transposition(_) => CipherKind::Transposition,
            CipherKey::Playfair(_) => CipherKind::Playfair,
        }
    }
}

impl Cipher for CipherKey {
    fn encode(&self, message: &str) -> Result<String, CipherError> {
        log::debug!("{} encode of {} chars", self.kind(), message.chars().count());
        match self {
            CipherKey::Caesar(key) => key.encode(message),
            CipherKey::Affine(key) => key.encode(message),
            CipherKey::Vigenere(key) => key.encode(message),
            CipherKey::Hill(key) => key.encode(message),
            CipherKey::Transposition(key) => key.encode(message),
            CipherKey::Playfair(key) => key.encode(message),
        }
    }

    fn decode(&self, message: &str) -> Result<String, CipherError> {
        log::debug!("{} decode of {} chars", self.kind(), message.chars().count());
        match self {
            CipherKey::Caesar(key) => key.decode(message),
            CipherKey::Affine(key) => key.decode(message),
            CipherKey::Vigenere(key) => key.decode(message),
            CipherKey::Hill(key) => key.decode(message),
            CipherKey::Transposition(key) => key.decode(message),
            CipherKey::Playfair(key) => key.decode(message),
        }
    }
}

macro_rules! impl_from_key {
    ($($variant:ident => $key:ty),* $(,)?) => {
        $(
            impl From<$key> for CipherKey {
                fn from(key: $key) -> Self {
                    CipherKey::$variant(key)
                }
            }
        )*
    };
}

impl_from_key! {
    Caesar => CaesarKey,
    Affine => AffineKey,
    Vigenere => VigenereKey,
    Hill => HillKey,
    Transposition => TranspositionKey,
    Playfair => PlayfairKey,
}

/// Maps every letter of `message` through `map` on residues, copying spaces unchanged.
///
/// `map` is only called for letters, so stateful key streams do not advance on spaces.
pub(crate) fn substitute(
    message: &str,
    mut map: impl FnMut(i64) -> i64,
) -> Result<String, CipherError> {
    validate_message(message)?;

    message
        .chars()
        .map(|ch| {
            if ch == SPACE {
                return Ok(ch);
            }
            Ok(from_residue(map(to_residue(ch)?)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_keeps_spaces() {
        let out = substitute("ab c", |r| r + 1).unwrap();
        assert_eq!(out, "bc d");
    }

    #[test]
    fn test_substitute_rejects_malformed_input() {
        assert!(matches!(
            substitute("Hello", |r| r),
            Err(CipherError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_dispatch_by_variant() -> Result<(), CipherError> {
        let keys: Vec<CipherKey> = vec![
            CaesarKey::new(3).into(),
            AffineKey::try_with(5, 8)?.into(),
            VigenereKey::try_with("lemon")?.into(),
            HillKey::try_with(vec![vec![3, 3], vec![2, 5]])?.into(),
            TranspositionKey::try_with(3)?.into(),
            PlayfairKey::try_with("monarchy")?.into(),
        ];

        let kinds: Vec<CipherKind> = keys.iter().map(CipherKey::kind).collect();
        assert_eq!(kinds, CipherKind::ALL.to_vec());

        for key in &keys {
            let cipher = key.apply(Direction::Encode, "helpme")?;
            assert_eq!(key.apply(Direction::Decode, &cipher)?, "helpme", "{}", key.kind());
        }
        Ok(())
    }

    #[test]
    fn test_cipher_key_serde() -> Result<(), Box<dyn std::error::Error>> {
        let key: CipherKey = HillKey::try_with(vec![vec![3, 3], vec![2, 5]])?.into();
        let json = serde_json::to_string(&key)?;
        let back: CipherKey = serde_json::from_str(&json)?;
        assert_eq!(back, key);

        // Deserialization runs the same validation as the constructors.
        assert!(serde_json::from_str::<CipherKey>(r#"{"Affine":[13,1]}"#).is_err());
        assert!(serde_json::from_str::<CipherKey>(r#"{"Vigenere":""}"#).is_err());
        Ok(())
    }
}
