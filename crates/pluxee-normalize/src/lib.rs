//! Normalization primitives for Pluxee order generation.
//!
//! Pure CPU-bound string transforms with no I/O: transliteration and case
//! folding, fit-to-width abbreviation, CPF digit normalization, and lenient
//! day-first date parsing.

pub mod abbrev;
pub mod cpf;
pub mod date;
pub mod text;

pub use abbrev::abbreviate;
pub use cpf::{CPF_MIN_DIGITS, normalize_cpf};
pub use date::{find_dmy_substring, normalize_date, parse_fuzzy};
pub use text::{digits_only, normalize_text};
