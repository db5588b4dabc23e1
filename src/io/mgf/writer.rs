//! MGF writer with buffered output and explicit close semantics
//!
//! Each spectrum is serialized as `BEGIN IONS`, its metadata pairs as
//! `KEY=VALUE` in stored order, its peaks as `mz intensity`, then
//! `END IONS`, all `\n`-terminated. Peak values use Rust's `f64`
//! `Display`, which emits the shortest decimal text that parses back to
//! the identical double, so round trips lose no precision.

use crate::error::{MzStreamError, Result};
use crate::types::MgfSpectrum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// MGF writer
///
/// # Example
///
/// ```no_run
/// use mzstream::{MgfSpectrum, MgfWriter, Peak};
///
/// # fn main() -> mzstream::Result<()> {
/// let mut writer = MgfWriter::create("out.mgf")?;
/// let spectrum = MgfSpectrum::new(
///     vec![("TITLE".to_string(), "spec1".to_string())],
///     vec![Peak::new(100.1, 200.2)],
/// );
/// writer.write_spectrum(&spectrum)?;
/// writer.close()?;
/// # Ok(())
/// # }
/// ```
pub struct MgfWriter {
    writer: Option<BufWriter<File>>,
    spectra_written: usize,
}

impl MgfWriter {
    /// Create an MGF writer, creating or truncating the file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            spectra_written: 0,
        })
    }

    /// Serialize one spectrum into the write buffer
    ///
    /// Returns the number of bytes appended. Fails with
    /// [`MzStreamError::WriterClosed`] after [`MgfWriter::close`].
    pub fn write_spectrum(&mut self, spectrum: &MgfSpectrum) -> Result<usize> {
        let writer = self.writer.as_mut().ok_or(MzStreamError::WriterClosed)?;

        let mut text = String::from("BEGIN IONS\n");
        for (key, value) in &spectrum.metadata {
            text.push_str(key);
            text.push('=');
            text.push_str(value);
            text.push('\n');
        }
        for peak in &spectrum.peaks {
            text.push_str(&format!("{} {}\n", peak.mz, peak.intensity));
        }
        text.push_str("END IONS\n");

        writer.write_all(text.as_bytes())?;
        self.spectra_written += 1;
        Ok(text.len())
    }

    /// Serialize multiple spectra
    pub fn write_all<'a, I>(&mut self, spectra: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a MgfSpectrum>,
    {
        let mut written_bytes = 0;
        for spectrum in spectra {
            written_bytes += self.write_spectrum(spectrum)?;
        }
        Ok(written_bytes)
    }

    /// Commit buffered output to the file
    ///
    /// No-op after close.
    pub fn flush(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    /// Number of spectra written so far
    pub fn spectra_written(&self) -> usize {
        self.spectra_written
    }

    /// Flush and release the file
    ///
    /// Subsequent writes fail with [`MzStreamError::WriterClosed`].
    /// Idempotent.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for MgfWriter {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}
