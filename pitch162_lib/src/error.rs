//! Error types for the library layer.

/// Errors that abort a run: output I/O and invalid run settings.
///
/// Per-player problems never surface here; they are recorded on the
/// player's row instead.
#[derive(thiserror::Error, Debug)]
pub enum Pitch162Error {
    /// Reading or writing a CSV file failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// Filesystem failure outside CSV handling.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The politeness delay range is empty, negative or not finite.
    #[error("invalid delay range {min}..={max} seconds")]
    InvalidDelay { min: f64, max: f64 },
}
