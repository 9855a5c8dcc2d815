#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Key material that the chosen cipher cannot work with (e.g. affine `a` sharing a factor with 26).
    #[error("InvalidKey: {0}")]
    InvalidKey(String),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Message contains characters outside `a-z` and space, or has a length the cipher cannot decode.
    #[error("MalformedInput: {0}")]
    MalformedInput(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),

    #[error("Internal error: Overflow during calculation")]
    CalculationOverflow,
}
