//! FASTA streaming parser with dialect-aware header handling
//!
//! # Format
//!
//! FASTA format consists of:
//! - Header line starting with '>' followed by identifier text
//! - One or more sequence lines (can be wrapped)
//!
//! Example:
//! ```text
//! >sp|P27748|ACOX_CUPNH Acetoin catabolism protein X OS=Cupriavidus necator OX=381666
//! MGHAAGASAQIAPVVGIIANPISARDIRRVIANANSLQLADRVNIVLRLLAALASCGVER
//! VLMMPDREGLRVMLARHLARRQGPDSGLPAVDYLDMPVTARVDDTLRAARCMADAGVAAI
//! ```
//!
//! # Dialects
//!
//! The caller selects the header grammar at construction via
//! [`FastaDialect`]: `Plain` keeps the header text verbatim, `UniProt`
//! parses the `db|accession|entry_name description KEY=value ...`
//! convention. Attribute boundaries are located at `KEY=` tokens (a run of
//! uppercase letters immediately followed by `=`), so attribute values may
//! contain spaces and parentheses, as organism names routinely do.

use crate::error::{MzStreamError, Result};
use crate::io::line_source::LineSource;
use crate::types::{FastaDialect, FastaEntry, FastaHeader, UniProtHeader};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// FASTA streaming parser
///
/// Yields one [`FastaEntry`] per header, lazily and in file order. The
/// stream is forward-only and non-restartable; after an error, iteration
/// must not continue.
///
/// # Example
///
/// ```no_run
/// use mzstream::{FastaDialect, FastaStream};
///
/// # fn main() -> mzstream::Result<()> {
/// let stream = FastaStream::open("uniprot_sprot.fasta", 4096, FastaDialect::UniProt)?;
/// for entry in stream {
///     let entry = entry?;
///     println!("{}: {} aa", entry.header, entry.sequence.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct FastaStream<R: Read> {
    source: LineSource<R>,
    dialect: FastaDialect,
    /// Peek buffer holding the next entry's header line
    next_header: Option<String>,
    finished: bool,
}

impl FastaStream<File> {
    /// Open a FASTA file
    ///
    /// `buffer_size` is the byte capacity of the underlying
    /// [`LineSource`] arena; it affects I/O chunking only, never parse
    /// results. Fails with [`MzStreamError::NotFound`] if the path cannot
    /// be opened.
    pub fn open<P: AsRef<Path>>(path: P, buffer_size: usize, dialect: FastaDialect) -> Result<Self> {
        Ok(Self::from_reader(
            LineSource::open(path, buffer_size)?,
            dialect,
        ))
    }
}

impl<R: Read> FastaStream<R> {
    /// Create a FASTA stream from an already-constructed line source
    pub fn from_reader(source: LineSource<R>, dialect: FastaDialect) -> Self {
        Self {
            source,
            dialect,
            next_header: None,
            finished: false,
        }
    }

    /// Read a single FASTA entry
    fn read_entry(&mut self) -> Result<Option<FastaEntry>> {
        if self.finished {
            return Ok(None);
        }

        // Get header line (either from peek buffer or read new,
        // skipping blank lines between entries)
        let header_line = match self.next_header.take() {
            Some(peeked) => peeked,
            None => loop {
                match self.source.next_line()? {
                    None => {
                        self.finished = true;
                        return Ok(None);
                    }
                    Some(line) => {
                        let text = line.text.trim();
                        if !text.is_empty() {
                            break text.to_string();
                        }
                    }
                }
            },
        };

        if !header_line.starts_with('>') {
            return Err(MzStreamError::MalformedHeader {
                line: self.source.line_number(),
                msg: format!("expected '>' at start of header, got: {}", header_line),
            });
        }

        let header = match self.dialect {
            FastaDialect::Plain => FastaHeader::Plain(header_line[1..].to_string()),
            FastaDialect::UniProt => FastaHeader::UniProt(parse_uniprot_header(
                &header_line[1..],
                self.source.line_number(),
            )?),
        };

        // Accumulate sequence lines until the next header or end of stream
        let mut sequence = String::new();
        loop {
            match self.source.next_line()? {
                None => {
                    self.finished = true;
                    break;
                }
                Some(line) => {
                    let text = line.text.trim();
                    if text.is_empty() {
                        continue;
                    }
                    if text.starts_with('>') {
                        // Start of next entry - save for next iteration
                        self.next_header = Some(text.to_string());
                        break;
                    }
                    sequence.push_str(text);
                }
            }
        }

        Ok(Some(FastaEntry::new(header, sequence)))
    }
}

impl<R: Read> Iterator for FastaStream<R> {
    type Item = Result<FastaEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_entry() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Parse a UniProt header (text after '>')
///
/// Grammar: `db|accession|entry_name description KEY1=val1 KEY2=val2 ...`
/// The `|`-delimited triple is required; everything between the entry name
/// and the first `KEY=` token is the free-text description.
fn parse_uniprot_header(text: &str, line: usize) -> Result<UniProtHeader> {
    let mut parts = text.splitn(3, '|');
    let database = parts.next().unwrap_or("");
    let (accession, rest) = match (parts.next(), parts.next()) {
        (Some(accession), Some(rest)) => (accession, rest),
        _ => {
            return Err(MzStreamError::MalformedHeader {
                line,
                msg: format!("expected 'db|accession|entry_name', got: {}", text),
            })
        }
    };

    let (entry_name, remainder) = match rest.split_once(' ') {
        Some((name, remainder)) => (name, remainder),
        None => (rest, ""),
    };

    let starts = attribute_starts(remainder);
    let description_end = starts.first().copied().unwrap_or(remainder.len());
    let description = remainder[..description_end].trim().to_string();

    let mut attributes = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(remainder.len());
        let segment = remainder[start..end].trim_end();
        if let Some((key, value)) = segment.split_once('=') {
            attributes.push((key.to_string(), value.to_string()));
        }
    }

    Ok(UniProtHeader {
        database: database.to_string(),
        accession: accession.to_string(),
        entry_name: entry_name.to_string(),
        description,
        attributes,
    })
}

/// Byte offsets where a `KEY=` token begins: a run of ASCII uppercase
/// letters immediately followed by '=', at the start of the text or
/// preceded by a space
fn attribute_starts(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut starts = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_uppercase() && (i == 0 || bytes[i - 1] == b' ') {
            let mut j = i;
            while j < bytes.len() && bytes[j].is_ascii_uppercase() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'=' {
                starts.push(i);
                i = j + 1;
                continue;
            }
            i = j;
        } else {
            i += 1;
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TEST_HEADER: &str = "sp|P27748|ACOX_CUPNH Acetoin catabolism protein X OS=Cupriavidus necator (strain ATCC 17699 / H16 / DSM 428 / Stanier 337) OX=381666 GN=acoX PE=4 SV=2";

    fn stream_from(data: &str, dialect: FastaDialect) -> FastaStream<Cursor<Vec<u8>>> {
        FastaStream::from_reader(
            LineSource::from_reader(Cursor::new(data.as_bytes().to_vec()), 1024),
            dialect,
        )
    }

    #[test]
    fn test_parse_single_plain_entry() {
        let mut stream = stream_from(">seq1 description one\nACDEFG\n", FastaDialect::Plain);

        let entry = stream.next().unwrap().unwrap();
        assert_eq!(
            entry.header,
            FastaHeader::Plain("seq1 description one".to_string())
        );
        assert_eq!(entry.sequence, "ACDEFG");

        assert!(stream.next().is_none());
    }

    #[test]
    fn test_parse_two_plain_entries() {
        let fasta = ">seq1 description one\nACDEFG\n>seq2 description two\nHIKLMN\n";
        let stream = stream_from(fasta, FastaDialect::Plain);

        let entries: Vec<_> = stream.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].header,
            FastaHeader::Plain("seq1 description one".to_string())
        );
        assert_eq!(entries[0].sequence, "ACDEFG");
        assert_eq!(
            entries[1].header,
            FastaHeader::Plain("seq2 description two".to_string())
        );
        assert_eq!(entries[1].sequence, "HIKLMN");
    }

    #[test]
    fn test_multiline_sequence_concatenated() {
        let fasta = ">seq1\nACDE\nFGHI\nKLMN\n>seq2\nPQRS\n";
        let stream = stream_from(fasta, FastaDialect::Plain);

        let entries: Vec<_> = stream.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].sequence, "ACDEFGHIKLMN");
        assert_eq!(entries[1].sequence, "PQRS");
    }

    #[test]
    fn test_final_entry_without_trailing_newline() {
        let mut stream = stream_from(">seq1\nACDEFG", FastaDialect::Plain);
        let entry = stream.next().unwrap().unwrap();
        assert_eq!(entry.sequence, "ACDEFG");
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_blank_lines_between_entries() {
        let fasta = "\n>seq1\nACDE\n\n>seq2\nFGHI\n\n";
        let stream = stream_from(fasta, FastaDialect::Plain);

        let entries: Vec<_> = stream.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].sequence, "ACDE");
        assert_eq!(entries[1].sequence, "FGHI");
    }

    #[test]
    fn test_uniprot_header_parsing() {
        let uniprot = parse_uniprot_header(TEST_HEADER, 1).unwrap();

        assert_eq!(uniprot.database, "sp");
        assert_eq!(uniprot.accession, "P27748");
        assert_eq!(uniprot.entry_name, "ACOX_CUPNH");
        assert_eq!(uniprot.description, "Acetoin catabolism protein X");
        assert_eq!(
            uniprot.attributes,
            vec![
                (
                    "OS".to_string(),
                    "Cupriavidus necator (strain ATCC 17699 / H16 / DSM 428 / Stanier 337)"
                        .to_string()
                ),
                ("OX".to_string(), "381666".to_string()),
                ("GN".to_string(), "acoX".to_string()),
                ("PE".to_string(), "4".to_string()),
                ("SV".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_uniprot_header_without_attributes() {
        let uniprot = parse_uniprot_header("tr|A0A024R161|A0A024R161_HUMAN Guanine nucleotide-binding protein", 1).unwrap();
        assert_eq!(uniprot.database, "tr");
        assert_eq!(uniprot.description, "Guanine nucleotide-binding protein");
        assert!(uniprot.attributes.is_empty());
    }

    #[test]
    fn test_uniprot_header_without_description() {
        let uniprot = parse_uniprot_header("sp|P12345|NAME_HUMAN OS=Homo sapiens OX=9606", 1).unwrap();
        assert_eq!(uniprot.entry_name, "NAME_HUMAN");
        assert_eq!(uniprot.description, "");
        assert_eq!(uniprot.attribute("OS"), Some("Homo sapiens"));
        assert_eq!(uniprot.attribute("OX"), Some("9606"));
    }

    #[test]
    fn test_uniprot_header_missing_separators() {
        let stream = stream_from(">sp P12345 no pipes here\nACDE\n", FastaDialect::UniProt);
        let result: Result<Vec<_>> = stream.collect();
        assert!(matches!(
            result,
            Err(MzStreamError::MalformedHeader { line: 1, .. })
        ));
    }

    #[test]
    fn test_uniprot_header_single_separator() {
        let stream = stream_from(">sp|P12345\nACDE\n", FastaDialect::UniProt);
        let result: Result<Vec<_>> = stream.collect();
        assert!(matches!(result, Err(MzStreamError::MalformedHeader { .. })));
    }

    #[test]
    fn test_missing_header_rejected() {
        let mut stream = stream_from("ACDEFG\n", FastaDialect::Plain);
        let result = stream.next().unwrap();
        assert!(matches!(result, Err(MzStreamError::MalformedHeader { .. })));
    }

    #[test]
    fn test_empty_file() {
        let mut stream = stream_from("", FastaDialect::Plain);
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_attribute_starts_ignores_mid_word_uppercase() {
        // "H16" and "X" are uppercase but not followed by '='
        let starts = attribute_starts("protein X OS=name with H16 token OX=1");
        assert_eq!(starts.len(), 2);
        assert_eq!(&"protein X OS=name with H16 token OX=1"[starts[0]..starts[0] + 3], "OS=");
    }

    // Property-based tests
    use proptest::prelude::*;

    proptest! {
        /// Valid plain entries parse back to their components
        #[test]
        fn test_plain_entry_roundtrip(
            header in "[A-Za-z0-9_]([A-Za-z0-9_ ]{0,48}[A-Za-z0-9_])?",
            seq in "[ACDEFGHIKLMNPQRSTVWY]{1,500}",
        ) {
            let fasta = format!(">{}\n{}\n", header, seq);
            let stream = stream_from(&fasta, FastaDialect::Plain);
            let entries: Vec<_> = stream.collect::<Result<Vec<_>>>().unwrap();

            prop_assert_eq!(entries.len(), 1);
            prop_assert_eq!(&entries[0].header, &FastaHeader::Plain(header.clone()));
            prop_assert_eq!(&entries[0].sequence, &seq);
        }

        /// Entry count matches header count
        #[test]
        fn test_entry_count(count in 1..10usize) {
            let mut fasta = String::new();
            for i in 0..count {
                fasta.push_str(&format!(">entry_{}\nACDEFGHIKL\n", i));
            }
            let stream = stream_from(&fasta, FastaDialect::Plain);
            let entries: Vec<_> = stream.collect::<Result<Vec<_>>>().unwrap();

            prop_assert_eq!(entries.len(), count);
        }

        /// UniProt attribute values survive spaces and parentheses
        #[test]
        fn test_uniprot_attribute_values_with_spaces(
            organism in "[A-Z][a-z]{2,10} [a-z]{2,10}( \\([a-z]{2,8}\\))?",
        ) {
            let header = format!("sp|Q00001|TEST_ORG Test protein OS={} OX=1", organism);
            let uniprot = parse_uniprot_header(&header, 1).unwrap();

            prop_assert_eq!(uniprot.attribute("OS"), Some(organism.as_str()));
            prop_assert_eq!(uniprot.attribute("OX"), Some("1"));
        }
    }
}
