//! MGF streaming parser
//!
//! # Format
//!
//! MGF (Mascot Generic Format) holds one tandem mass spectrum per
//! `BEGIN IONS`/`END IONS` block:
//!
//! ```text
//! BEGIN IONS
//! TITLE=spec1
//! PEPMASS=500.25
//! CHARGE=2+
//! 100.1 200.2
//! 150.3 50.0
//! END IONS
//! ```
//!
//! `KEY=VALUE` lines are metadata, kept in encounter order without key
//! deduplication; lines starting with a digit, sign, or dot are peaks
//! (`mz intensity` as floating-point tokens). Anything before `BEGIN IONS`
//! is ignored, which tolerates leading blank lines and comments.

use crate::error::{MzStreamError, Result};
use crate::io::line_source::LineSource;
use crate::types::{MgfSpectrum, Peak};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// MGF streaming parser
///
/// Yields one [`MgfSpectrum`] per block, lazily and in file order. The
/// stream is forward-only and non-restartable; after an error, iteration
/// must not continue.
///
/// # Example
///
/// ```no_run
/// use mzstream::MgfStream;
///
/// # fn main() -> mzstream::Result<()> {
/// let stream = MgfStream::open("run01.mgf", 4096)?;
/// for spectrum in stream {
///     let spectrum = spectrum?;
///     println!("{:?}: {} peaks", spectrum.title(), spectrum.peaks.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct MgfStream<R: Read> {
    source: LineSource<R>,
    finished: bool,
}

impl MgfStream<File> {
    /// Open an MGF file
    ///
    /// `buffer_size` is the byte capacity of the underlying
    /// [`LineSource`] arena; it affects I/O chunking only, never parse
    /// results. Fails with [`MzStreamError::NotFound`] if the path cannot
    /// be opened.
    pub fn open<P: AsRef<Path>>(path: P, buffer_size: usize) -> Result<Self> {
        Ok(Self::from_reader(LineSource::open(path, buffer_size)?))
    }
}

impl<R: Read> MgfStream<R> {
    /// Create an MGF stream from an already-constructed line source
    pub fn from_reader(source: LineSource<R>) -> Self {
        Self {
            source,
            finished: false,
        }
    }

    /// Read a single spectrum block
    fn read_spectrum(&mut self) -> Result<Option<MgfSpectrum>> {
        if self.finished {
            return Ok(None);
        }

        // Scan for the opening delimiter; anything before it is ignored
        loop {
            match self.source.next_line()? {
                None => {
                    self.finished = true;
                    return Ok(None);
                }
                Some(line) => {
                    if line.text.trim() == "BEGIN IONS" {
                        break;
                    }
                }
            }
        }

        let mut metadata: Vec<(String, String)> = Vec::new();
        let mut peaks: Vec<Peak> = Vec::new();

        loop {
            let line = match self.source.next_line()? {
                None => {
                    self.finished = true;
                    return Err(MzStreamError::UnterminatedSpectrum {
                        line: self.source.line_number(),
                    });
                }
                Some(line) => line,
            };

            let text = line.text.trim();
            if text.is_empty() {
                continue;
            }
            if text == "END IONS" {
                return Ok(Some(MgfSpectrum::new(metadata, peaks)));
            }

            let first = text.as_bytes()[0];
            if first.is_ascii_digit() || first == b'-' || first == b'+' || first == b'.' {
                peaks.push(self.parse_peak(text)?);
            } else if let Some((key, value)) = text.split_once('=') {
                metadata.push((key.to_string(), value.to_string()));
            } else {
                return Err(MzStreamError::MalformedPeak {
                    line: self.source.line_number(),
                    msg: format!("expected 'KEY=VALUE' or 'mz intensity', got: {}", text),
                });
            }
        }
    }

    /// Parse a `mz intensity` peak line
    fn parse_peak(&self, text: &str) -> Result<Peak> {
        let line = self.source.line_number();
        let mut tokens = text.split_ascii_whitespace();

        let mz_token = tokens.next().unwrap_or("");
        let intensity_token = tokens.next().ok_or_else(|| MzStreamError::MalformedPeak {
            line,
            msg: format!("intensity value is missing: {}", text),
        })?;

        let mz: f64 = mz_token.parse().map_err(|_| MzStreamError::MalformedPeak {
            line,
            msg: format!("m/z token is not a number: {}", mz_token),
        })?;
        let intensity: f64 = intensity_token
            .parse()
            .map_err(|_| MzStreamError::MalformedPeak {
                line,
                msg: format!("intensity token is not a number: {}", intensity_token),
            })?;

        Ok(Peak::new(mz, intensity))
    }
}

impl<R: Read> Iterator for MgfStream<R> {
    type Item = Result<MgfSpectrum>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_spectrum() {
            Ok(Some(spectrum)) => Some(Ok(spectrum)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
