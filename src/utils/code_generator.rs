//! Short code generation.
//!
//! Codes are drawn from the operating system CSPRNG rather than derived from
//! the clock, so two calls within the same timer tick still produce
//! independent codes.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Length of random bytes before base64 encoding.
const CODE_LENGTH_BYTES: usize = 9;

/// Length of every generated code (`CODE_LENGTH_BYTES * 4 / 3`).
pub const CODE_LENGTH: usize = 12;

/// Generates a cryptographically secure random short code.
///
/// Encodes 72 random bits as URL-safe base64 without padding, producing a
/// 12-character code over the alphabet `[A-Za-z0-9_-]`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), CODE_LENGTH);
/// ```
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate short code",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
