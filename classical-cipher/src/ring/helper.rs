use crate::errors::CipherError;

/// Computes the greatest common divisor of two numbers.
///
/// The result is never negative and `gcd(a, 0) == |a|`.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a.abs()
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if a == 0 {
        if b.is_negative() {
            return (-b, 0, -1);
        }

        return (b, 0, 1);
    }

    let (g, x1, y1) = extended_gcd(b % a, a);
    let x = y1 - (b / a) * x1;
    let y = x1;
    (g, x, y)
}

/// Reduces `value` into `[0, modulus)`.
///
/// Unlike `%`, the result is never negative, so `normalize(-3, 26) == 23`.
/// `modulus` must be positive.
pub fn normalize(value: i64, modulus: i64) -> i64 {
    let rem = value % modulus;
    if rem < 0 {
        return rem + modulus;
    }

    rem
}

/// Computes `x` in `[0, modulus)` with `a * x ≡ 1 (mod modulus)`.
///
/// # Errors
///
/// Returns `CipherError::InvalidModulus` if `modulus <= 1`.
/// Returns `CipherError::NoInverse` if `gcd(a, modulus) != 1`.
///
/// # Example
///
/// ```
/// # use classical_cipher::ring::modular_inverse;
/// assert_eq!(modular_inverse(5, 26).unwrap(), 21);
/// assert_eq!(modular_inverse(-5, 26).unwrap(), 5);
/// assert!(modular_inverse(13, 26).is_err());
/// ```
pub fn modular_inverse(a: i64, modulus: i64) -> Result<i64, CipherError> {
    if modulus <= 1 {
        return Err(CipherError::InvalidModulus(format!(
            "Modulus must be greater than 1, got {}",
            modulus
        )));
    }

    let a_norm = normalize(a, modulus);
    let (g, x, _) = extended_gcd(a_norm, modulus);
    if g != 1 {
        return Err(CipherError::NoInverse(format!(
            "Modular inverse does not exist for {} mod {} (gcd={})",
            a_norm, modulus, g
        )));
    }

    Ok(normalize(x, modulus))
}
