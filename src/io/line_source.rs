//! Buffered line source: chunked reads with logical line extraction
//!
//! # Architecture
//!
//! `LineSource` owns a fixed-capacity byte arena with two cursors: `filled`
//! marks how much of the buffer the last read populated, `pos` marks how far
//! the line extractor has consumed it (invariant: `pos <= filled <=
//! capacity`). A refill issues exactly one `read` call against the
//! underlying stream and only happens once the arena is drained, so buffer
//! capacity trades memory for system calls without affecting what is
//! parsed. A line that spans two fills is accumulated across the refill,
//! never dropped or duplicated.
//!
//! The source knows nothing about FASTA or MGF; the format codecs in
//! [`crate::io::fasta`] and [`crate::io::mgf`] sit on top of it.

use crate::error::{MzStreamError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Default buffer capacity for readers constructed without an explicit size
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// One logical line with its terminator stripped
///
/// Both `\n` and `\r\n` terminators are recognized and removed.
/// `had_terminator` is `false` only for a final line that ends at
/// end-of-stream without a terminator, which is valid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Line content without its terminator
    pub text: String,
    /// Whether the line ended with a terminator in the input
    pub had_terminator: bool,
}

/// Buffered, forward-only line reader over a byte stream
///
/// # Example
///
/// ```no_run
/// use mzstream::io::line_source::LineSource;
///
/// # fn main() -> mzstream::Result<()> {
/// let mut source = LineSource::open("database.fasta", 4096)?;
/// while let Some(line) = source.next_line()? {
///     println!("{}", line.text);
/// }
/// # Ok(())
/// # }
/// ```
pub struct LineSource<R: Read> {
    inner: R,
    buf: Box<[u8]>,
    filled: usize,
    pos: usize,
    eof: bool,
    line_number: usize,
}

impl LineSource<File> {
    /// Open a file as a line source
    ///
    /// A missing or unopenable path surfaces as
    /// [`MzStreamError::NotFound`]; other open failures surface as
    /// [`MzStreamError::Io`].
    pub fn open<P: AsRef<Path>>(path: P, capacity: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                MzStreamError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                MzStreamError::Io(e)
            }
        })?;
        Ok(Self::from_reader(file, capacity))
    }
}

impl<R: Read> LineSource<R> {
    /// Create a line source from any byte reader
    ///
    /// This is useful for testing or reading from in-memory sources.
    /// A capacity of 0 is rounded up to 1.
    pub fn from_reader(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            buf: vec![0u8; capacity.max(1)].into_boxed_slice(),
            filled: 0,
            pos: 0,
            eof: false,
            line_number: 0,
        }
    }

    /// 1-based number of the last line yielded (0 before the first line)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Refill the arena with one read against the underlying stream
    fn refill(&mut self) -> Result<usize> {
        debug_assert_eq!(self.pos, self.filled);
        let n = self.inner.read(&mut self.buf)?;
        self.pos = 0;
        self.filled = n;
        if n == 0 {
            self.eof = true;
        }
        Ok(n)
    }

    /// Return the next logical line, or `None` once the stream is exhausted
    pub fn next_line(&mut self) -> Result<Option<Line>> {
        let mut raw: Vec<u8> = Vec::new();
        loop {
            if self.pos == self.filled {
                if self.eof || self.refill()? == 0 {
                    if raw.is_empty() {
                        return Ok(None);
                    }
                    // Final line without a trailing terminator is valid
                    self.line_number += 1;
                    return Ok(Some(Self::finish_line(raw, false)?));
                }
            }
            let chunk = &self.buf[self.pos..self.filled];
            match chunk.iter().position(|&b| b == b'\n') {
                Some(i) => {
                    raw.extend_from_slice(&chunk[..i]);
                    self.pos += i + 1;
                    self.line_number += 1;
                    return Ok(Some(Self::finish_line(raw, true)?));
                }
                None => {
                    // Partial line at the end of this fill; keep it and
                    // continue into the next fill
                    raw.extend_from_slice(chunk);
                    self.pos = self.filled;
                }
            }
        }
    }

    fn finish_line(mut raw: Vec<u8>, had_terminator: bool) -> Result<Line> {
        if had_terminator && raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let text = String::from_utf8(raw).map_err(|e| {
            MzStreamError::Io(std::io::Error::new(ErrorKind::InvalidData, e))
        })?;
        Ok(Line {
            text,
            had_terminator,
        })
    }
}
