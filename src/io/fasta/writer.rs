//! FASTA writer with buffered output and explicit close semantics
//!
//! Serialization mirrors the parser: the header line is rebuilt from the
//! entry's [`FastaHeader`] (verbatim for `Plain`, reconstructed with
//! attributes in stored order for `UniProt`) and the sequence is wrapped
//! at 60 characters per line, the UniProt distribution convention. Output
//! is buffered; call [`FastaWriter::flush`] or [`FastaWriter::close`] to
//! commit it.

use crate::error::{MzStreamError, Result};
use crate::types::FastaEntry;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Max sequence characters per line
const SEQUENCE_LINE_WIDTH: usize = 60;

/// FASTA writer
///
/// # Example
///
/// ```no_run
/// use mzstream::{FastaEntry, FastaHeader, FastaWriter};
///
/// # fn main() -> mzstream::Result<()> {
/// let mut writer = FastaWriter::create("out.fasta")?;
/// let entry = FastaEntry::new(
///     FastaHeader::Plain("seq1 description one".to_string()),
///     "ACDEFG".to_string(),
/// );
/// writer.write_entry(&entry)?;
/// writer.close()?;
/// # Ok(())
/// # }
/// ```
pub struct FastaWriter {
    writer: Option<BufWriter<File>>,
    entries_written: usize,
}

impl FastaWriter {
    /// Create a FASTA writer, creating or truncating the file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            entries_written: 0,
        })
    }

    /// Serialize one entry into the write buffer
    ///
    /// Returns the number of bytes appended. Fails with
    /// [`MzStreamError::WriterClosed`] after [`FastaWriter::close`].
    pub fn write_entry(&mut self, entry: &FastaEntry) -> Result<usize> {
        let writer = self.writer.as_mut().ok_or(MzStreamError::WriterClosed)?;

        let mut text = format!("{}\n", entry.header);
        if !entry.sequence.is_empty() {
            text.push_str(&wrap_sequence(&entry.sequence));
            text.push('\n');
        }
        writer.write_all(text.as_bytes())?;
        self.entries_written += 1;
        Ok(text.len())
    }

    /// Serialize multiple entries
    pub fn write_all<'a, I>(&mut self, entries: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a FastaEntry>,
    {
        let mut written_bytes = 0;
        for entry in entries {
            written_bytes += self.write_entry(entry)?;
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

    /// Number of entries written so far
    pub fn entries_written(&self) -> usize {
        self.entries_written
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

impl Drop for FastaWriter {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}

/// Split a sequence into lines of at most `SEQUENCE_LINE_WIDTH` characters
fn wrap_sequence(sequence: &str) -> String {
    sequence
        .chars()
        .collect::<Vec<char>>()
        .chunks(SEQUENCE_LINE_WIDTH)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}
