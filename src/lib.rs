//! mzstream: streaming I/O for proteomics text formats
//!
//! # Overview
//!
//! mzstream reads and writes very large protein sequence databases (FASTA)
//! and tandem-mass-spectrum lists (MGF) without loading a file into
//! memory: readers pull fixed-size chunks through an exclusively-owned
//! buffer and yield one fully-formed record at a time, writers buffer
//! serialized text until flushed.
//!
//! ## Key Properties
//!
//! - **Streaming**: memory bounded by buffer capacity + one record
//! - **Dialect-aware FASTA**: plain headers kept verbatim, UniProt headers
//!   parsed into accession, entry name, description, and keyword attributes
//! - **Round-trip fidelity**: serializing parsed records reproduces the
//!   input (byte-for-byte for plain FASTA and canonical MGF, structurally
//!   for UniProt headers)
//! - **Typed errors**: malformed input surfaces eagerly as a specific
//!   [`MzStreamError`] variant with the offending line number
//!
//! ## Quick Start
//!
//! ```no_run
//! use mzstream::{FastaDialect, FastaStream};
//!
//! # fn main() -> mzstream::Result<()> {
//! let stream = FastaStream::open("uniprot_sprot.fasta", 4096, FastaDialect::UniProt)?;
//!
//! for entry in stream {
//!     let entry = entry?;
//!     // Process one entry at a time
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`io`]: buffered line source, FASTA and MGF readers/writers
//! - [`error`]: crate-wide error enum and `Result` alias
//! - [`types`]: record value types shared across the codecs

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod io;
pub mod types;

// Re-export commonly used types
pub use error::{MzStreamError, Result};
pub use io::{FastaStream, FastaWriter, MgfStream, MgfWriter};
pub use types::{FastaDialect, FastaEntry, FastaHeader, MgfSpectrum, Peak, UniProtHeader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
