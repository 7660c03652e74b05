use thiserror::Error;

/// Errors surfaced by the order-generation core.
///
/// Skippable rows (missing name or CPF) are not errors; they are counted and
/// excluded. Only fatal input conditions reach this type.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The uploaded source contained no rows or paragraphs at all.
    #[error("the roster source is empty")]
    EmptySource,

    /// A required logical field could not be resolved because the source has
    /// no header cells to match against.
    #[error("no header cells available to resolve required field '{field}'")]
    MissingHeaders { field: &'static str },

    /// The source file could not be read or decoded.
    #[error("failed to read roster source: {0}")]
    Source(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OrderError>;
