//! Error types for mzstream

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mzstream operations
pub type Result<T> = std::result::Result<T, MzStreamError>;

/// Error types that can occur in mzstream
///
/// Parse errors are surfaced eagerly at the line where the malformed unit
/// was encountered; a reader or writer that has returned an error must not
/// be used further.
#[derive(Debug, Error)]
pub enum MzStreamError {
    /// Input path missing or unopenable at open time
    #[error("file not found: {}", .path.display())]
    NotFound {
        /// Path that could not be opened
        path: PathBuf,
    },

    /// I/O error after the stream was opened
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid FASTA header
    #[error("Invalid FASTA header at line {line}: {msg}")]
    MalformedHeader {
        /// Line number where error occurred
        line: usize,
        /// Error message
        msg: String,
    },

    /// Invalid MGF peak line
    #[error("Invalid MGF peak at line {line}: {msg}")]
    MalformedPeak {
        /// Line number where error occurred
        line: usize,
        /// Error message
        msg: String,
    },

    /// End of stream reached inside a `BEGIN IONS` block
    #[error("Unterminated spectrum: end of file at line {line} before END IONS")]
    UnterminatedSpectrum {
        /// Last line number read before end of stream
        line: usize,
    },

    /// Write attempted after the writer was closed
    #[error("Writer is closed")]
    WriterClosed,
}
