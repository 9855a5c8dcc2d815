//! # Ring Module
//!
//! Modular arithmetic over Z/m and the integer matrix engine the Hill cipher runs on.

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

/// Size of the lowercase Latin alphabet every cipher works over.
pub const ALPHABET_SIZE: i64 = 26;

pub use helper::{extended_gcd, gcd, modular_inverse, normalize};
pub use math::Ring;
pub use matrix_ops::{determinant, inverse_mod};
