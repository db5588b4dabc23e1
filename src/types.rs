//! Common record types used throughout mzstream
//!
//! All records are plain value types: once a reader yields one, the caller
//! owns it outright and the reader keeps no reference to it.

use std::fmt;

/// Header dialect for FASTA files, selected at reader construction
///
/// The codec never auto-detects; the caller states which grammar the
/// headers follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastaDialect {
    /// Header text after `>` is kept verbatim, unparsed
    Plain,
    /// `db|accession|entry_name description KEY=value ...` headers as
    /// distributed by UniProt (<https://uniprot.org>)
    UniProt,
}

/// A parsed UniProt-style FASTA header
///
/// Keyword attributes (`OS`, `OX`, `GN`, `PE`, `SV`, ...) are kept as
/// `(key, value)` pairs in encounter order. Order is preserved on a round
/// trip but carries no semantic weight; compare attribute sets when
/// comparing headers from different producers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniProtHeader {
    /// Database short code before the first `|` (e.g. `sp`, `tr`)
    pub database: String,
    /// Accession between the two `|` separators
    pub accession: String,
    /// Entry name following the second `|`, up to the first space
    pub entry_name: String,
    /// Free-text description before the first keyword attribute
    pub description: String,
    /// Keyword attributes in encounter order
    pub attributes: Vec<(String, String)>,
}

impl UniProtHeader {
    /// Look up a keyword attribute by key (first occurrence)
    ///
    /// # Examples
    ///
    /// ```
    /// use mzstream::UniProtHeader;
    ///
    /// let header = UniProtHeader {
    ///     database: "sp".to_string(),
    ///     accession: "P27748".to_string(),
    ///     entry_name: "ACOX_CUPNH".to_string(),
    ///     description: "Acetoin catabolism protein X".to_string(),
    ///     attributes: vec![("GN".to_string(), "acoX".to_string())],
    /// };
    /// assert_eq!(header.attribute("GN"), Some("acoX"));
    /// assert_eq!(header.attribute("OS"), None);
    /// ```
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A FASTA header in one of the supported dialects
///
/// `Display` reconstructs the full header line including the leading `>`.
/// For UniProt headers, attributes are emitted in stored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FastaHeader {
    /// Raw header text after `>`, unparsed
    Plain(String),
    /// Structured UniProt header
    UniProt(UniProtHeader),
}

impl fmt::Display for FastaHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(header) => write!(f, ">{}", header),
            Self::UniProt(h) => {
                write!(f, ">{}|{}|{}", h.database, h.accession, h.entry_name)?;
                if !h.description.is_empty() {
                    write!(f, " {}", h.description)?;
                }
                for (key, value) in &h.attributes {
                    write!(f, " {}={}", key, value)?;
                }
                Ok(())
            }
        }
    }
}

/// A FASTA entry: one header plus its amino acid sequence
///
/// The sequence is the concatenation of all sequence lines with
/// terminators stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaEntry {
    /// Entry header
    pub header: FastaHeader,
    /// Amino acid sequence, newlines stripped
    pub sequence: String,
}

impl FastaEntry {
    /// Create a new FASTA entry
    pub fn new(header: FastaHeader, sequence: String) -> Self {
        Self { header, sequence }
    }

    /// Accession for UniProt entries, `None` for plain entries
    pub fn accession(&self) -> Option<&str> {
        match &self.header {
            FastaHeader::UniProt(h) => Some(h.accession.as_str()),
            FastaHeader::Plain(_) => None,
        }
    }
}

/// One (m/z, intensity) pair within a spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Mass-to-charge ratio
    pub mz: f64,
    /// Signal intensity
    pub intensity: f64,
}

impl Peak {
    /// Create a new peak
    pub fn new(mz: f64, intensity: f64) -> Self {
        Self { mz, intensity }
    }
}

/// A tandem mass spectrum parsed from one `BEGIN IONS`/`END IONS` block
///
/// Metadata pairs are kept in encounter order and repeated keys are not
/// deduplicated; peak order is preserved exactly as read.
#[derive(Debug, Clone, PartialEq)]
pub struct MgfSpectrum {
    /// `KEY=VALUE` metadata lines in encounter order
    pub metadata: Vec<(String, String)>,
    /// Peak list in file order
    pub peaks: Vec<Peak>,
}

impl MgfSpectrum {
    /// Create a new spectrum
    pub fn new(metadata: Vec<(String, String)>, peaks: Vec<Peak>) -> Self {
        Self { metadata, peaks }
    }

    /// Look up a metadata value by key (first occurrence)
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Spectrum title (`TITLE`), if present
    pub fn title(&self) -> Option<&str> {
        self.metadata("TITLE")
    }

    /// Precursor m/z: first numeric token of `PEPMASS`, if parseable
    ///
    /// `PEPMASS` may carry a second intensity token, which is ignored here
    /// but preserved verbatim in [`MgfSpectrum::metadata`].
    pub fn precursor_mz(&self) -> Option<f64> {
        self.metadata("PEPMASS")?
            .split_ascii_whitespace()
            .next()?
            .parse()
            .ok()
    }

    /// Raw precursor charge text (`CHARGE`, e.g. `2+`), if present
    pub fn charge(&self) -> Option<&str> {
        self.metadata("CHARGE")
    }

    /// Retention time in seconds (`RTINSECONDS`), if parseable
    pub fn retention_time(&self) -> Option<f64> {
        self.metadata("RTINSECONDS")?.parse().ok()
    }
}
