//! FASTA format support: streaming parser and writer
//!
//! # Basic Usage
//!
//! ```no_run
//! use mzstream::{FastaDialect, FastaStream, FastaWriter};
//!
//! # fn main() -> mzstream::Result<()> {
//! let stream = FastaStream::open("uniprot_sprot.fasta", 4096, FastaDialect::UniProt)?;
//! let mut writer = FastaWriter::create("filtered.fasta")?;
//!
//! for entry in stream {
//!     let entry = entry?;
//!     if entry.sequence.len() >= 7 {
//!         writer.write_entry(&entry)?;
//!     }
//! }
//! writer.close()?;
//! # Ok(())
//! # }
//! ```

mod parser;
mod writer;

pub use parser::FastaStream;
pub use writer::FastaWriter;
