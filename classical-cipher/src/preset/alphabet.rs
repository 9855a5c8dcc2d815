use crate::errors::CipherError;

use lazy_static::lazy_static;
use std::collections::HashMap;

/// The lowercase Latin alphabet, in residue order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Word separator allowed in messages.
pub const SPACE: char = ' ';

lazy_static! {
    /// A static HashMap mapping a residue (0 to 25) to its lowercase letter.
    pub static ref RESIDUE_TO_LETTER_MAP: HashMap<i64, char> = {
        let mut map = HashMap::new();

        for (i, ch) in ALPHABET.chars().enumerate() {
            map.insert(i as i64, ch);
        }

        map
    };

    /// A static HashMap mapping a lowercase letter to its residue (0 to 25).
    pub static ref LETTER_TO_RESIDUE_MAP: HashMap<char, i64> = {
        let mut map = HashMap::new();

        for (&index, &ch) in RESIDUE_TO_LETTER_MAP.iter() {
            map.insert(ch, index);
        }

        map
    };
}

/// Maps a lowercase letter to its residue `c - 'a'`.
pub fn to_residue(ch: char) -> Result<i64, CipherError> {
    LETTER_TO_RESIDUE_MAP
        .get(&ch)
        .copied()
        .ok_or_else(|| CipherError::MalformedInput(format!("'{}' is not a lowercase letter", ch)))
}

/// Maps a residue back to its letter, reducing it mod 26 first.
pub fn from_residue(residue: i64) -> char {
    let r = crate::ring::normalize(residue, crate::ring::ALPHABET_SIZE);
    ALPHABET.as_bytes()[r as usize] as char
}

/// Checks that a message only holds lowercase letters and spaces.
///
/// # Example
///
/// ```
/// # use classical_cipher::preset::alphabet::validate_message;
/// assert!(validate_message("attack at dawn").is_ok());
/// assert!(validate_message("Attack!").is_err());
/// ```
pub fn validate_message(message: &str) -> Result<(), CipherError> {
    match message
        .char_indices()
        .find(|&(_, ch)| ch != SPACE && !LETTER_TO_RESIDUE_MAP.contains_key(&ch))
    {
        Some((pos, ch)) => Err(CipherError::MalformedInput(format!(
            "Unexpected character '{}' at byte {}; only lowercase letters and spaces are allowed",
            ch, pos
        ))),
        None => Ok(()),
    }
}

/// Checks that a keyword is non-empty and purely alphabetic.
pub fn validate_keyword(keyword: &str) -> Result<(), CipherError> {
    if keyword.is_empty() {
        return Err(CipherError::InvalidKey("Keyword must not be empty".to_string()));
    }
    if let Some(ch) = keyword.chars().find(|ch| !LETTER_TO_RESIDUE_MAP.contains_key(ch)) {
        return Err(CipherError::InvalidKey(format!(
            "Keyword may only contain lowercase letters, found '{}'",
            ch
        )));
    }
    Ok(())
}
