//! Random human-readable codes for booking references and payment transactions.

use rand::Rng;

/// Uppercase letters and digits without the easily confused `0`, `O`, `1` and `I`.
const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generates `<prefix>-<length random characters>`.
///
/// # Arguments
/// - `prefix` - Fixed prefix such as `OCR` or `TX`
/// - `length` - Number of random characters after the dash
///
/// # Returns
/// - `String` - e.g. `OCR-7KQ2M9XA`
pub fn generate_code(prefix: &str, length: usize) -> String {
    let mut rng = rand::rng();

    let suffix: String = (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    format!("{}-{}", prefix, suffix)
}
