//! I/O module: buffered line source and format codecs
//!
//! The [`line_source`] module owns all byte-level buffering; the FASTA and
//! MGF codecs are line-oriented grammars layered on top of it. Every
//! reader is a pull-based, forward-only iterator yielding fully-formed
//! records; every writer buffers serialized text until flushed or closed.

pub mod line_source;

mod fasta;
mod mgf;

pub use fasta::{FastaStream, FastaWriter};
pub use line_source::{Line, LineSource, DEFAULT_BUFFER_SIZE};
pub use mgf::{MgfStream, MgfWriter};
