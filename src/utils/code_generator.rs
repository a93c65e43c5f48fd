//! Short code generation.
//!
//! Codes are random, not derived from record ids: a code reveals nothing
//! about how many records exist and cannot be reconstructed from an id.
//! Uniqueness is enforced by the database constraint, with the caller
//! re-drawing on collision.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
///
/// 6 bytes encode to 8 URL-safe characters with no padding, comfortably
/// above the 5-character minimum the redirect path expects while keeping
/// the collision probability negligible for realistic record counts.
const CODE_LENGTH_BYTES: usize = 6;

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing an 8-character code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
