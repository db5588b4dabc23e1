//! MGF (Mascot Generic Format) support: streaming parser and writer
//!
//! # Basic Usage
//!
//! ```no_run
//! use mzstream::{MgfStream, MgfWriter};
//!
//! # fn main() -> mzstream::Result<()> {
//! let stream = MgfStream::open("run01.mgf", 4096)?;
//! let mut writer = MgfWriter::create("filtered.mgf")?;
//!
//! for spectrum in stream {
//!     let spectrum = spectrum?;
//!     if spectrum.peaks.len() >= 10 {
//!         writer.write_spectrum(&spectrum)?;
//!     }
//! }
//! writer.close()?;
//! # Ok(())
//! # }
//! ```

mod parser;
mod writer;

pub use parser::MgfStream;
pub use writer::MgfWriter;
