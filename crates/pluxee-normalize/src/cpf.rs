//! CPF normalization.

use crate::text::digits_only;

/// Minimum digit count of a CPF.
pub const CPF_MIN_DIGITS: usize = 11;

/// Normalize a raw CPF: keep digits only, left-pad with '0' to 11 digits.
///
/// Longer digit strings are preserved in full; only shorter ones are padded.
/// Input without any digit yields an empty string.
pub fn normalize_cpf(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return digits;
    }
    if digits.len() >= CPF_MIN_DIGITS {
        digits
    } else {
        format!("{digits:0>width$}", width = CPF_MIN_DIGITS)
    }
}
