//! # Classical Cipher
//!
//! Classical text ciphers over the lowercase Latin alphabet: Caesar, Vigenère, Affine, Hill,
//! Playfair and columnar transposition, together with the modular arithmetic and the
//! matrix-mod-26 engine they rely on.
//!
//! ```
//! use classical_cipher::cipher::{Cipher, CipherKey, VigenereKey};
//!
//! let key: CipherKey = VigenereKey::try_with("lemon").unwrap().into();
//! assert_eq!(key.encode("attackatdawn").unwrap(), "lxfopvefrnhr");
//! ```

pub mod cipher;
pub mod errors;
pub mod preset;
pub mod ring;

pub use cipher::{Cipher, CipherKey, CipherKind, Direction};
pub use errors::CipherError;
