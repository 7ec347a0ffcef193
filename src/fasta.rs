//! FASTA ingestion. Records start with a `>` definition line, followed by any number of sequence
//! lines which are concatenated.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::sequence::Sequence;

/// Open a file for reading, decompressing `.gz` files. `-` and `stdin` read from standard input.
pub fn reader(input: impl AsRef<Path>) -> Result<Box<dyn BufRead>> {
    let path = input.as_ref();
    if path == Path::new("-") || path == Path::new("stdin") {
        return Ok(Box::new(BufReader::new(std::io::stdin())));
    }

    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(
            file,
        ))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Every record in the input. The label is the whole definition line without the `>`.
pub fn read_sequences<R: BufRead>(reader: R) -> Result<Vec<Sequence>> {
    let mut fa_in = noodles_fasta::io::Reader::new(reader);

    let mut sequences = Vec::new();
    for result in fa_in.records() {
        let record = result?;

        let mut label = String::from_utf8_lossy(record.name()).into_owned();
        if let Some(description) = record.description() {
            label.push(' ');
            label.push_str(&String::from_utf8_lossy(description));
        }
        let symbols = record.sequence().get(..).unwrap_or_default();

        sequences.push(Sequence::new(label, symbols));
    }

    Ok(sequences)
}

/// The first two records of a FASTA file, any further records are ignored
pub fn read_pair(input: impl AsRef<Path>) -> Result<(Sequence, Sequence)> {
    let path = input.as_ref();
    let sequences = read_sequences(reader(path)?)?;
    debug!("read {} records from {}", sequences.len(), path.display());

    let found = sequences.len();
    let mut sequences = sequences.into_iter();
    match (sequences.next(), sequences.next()) {
        (Some(seq1), Some(seq2)) => Ok((seq1, seq2)),
        _ => Err(Error::MissingRecord { expected: 2, found }),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    const PAIR: &str = ">seq1 first sequence\nACACAC\nTA\n>seq2\nAGCACACA\n";

    #[test]
    fn test_read_sequences() {
        let sequences = read_sequences(Cursor::new(PAIR)).unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].label(), "seq1 first sequence");
        assert_eq!(sequences[0].symbols(), b"ACACACTA");
        assert_eq!(sequences[1].label(), "seq2");
        assert_eq!(sequences[1].symbols(), b"AGCACACA");
    }

    #[test]
    fn test_missing_definition_line() {
        let result = read_sequences(Cursor::new("ACGT\n>seq\nACGT\n"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_read_pair_from_file() {
        let path = std::env::temp_dir().join(format!("swalign-pair-{}.fa", std::process::id()));
        File::create(&path)
            .unwrap()
            .write_all(format!("{PAIR}>seq3\nTTTT\n").as_bytes())
            .unwrap();

        let (seq1, seq2) = read_pair(&path).unwrap();
        assert_eq!(seq1.len(), 8);
        assert_eq!(seq2.label(), "seq2");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_pair_gz() {
        use flate2::{Compression, write::GzEncoder};

        let path = std::env::temp_dir().join(format!("swalign-pair-{}.fa.gz", std::process::id()));
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(PAIR.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let (seq1, _) = read_pair(&path).unwrap();
        assert_eq!(seq1.symbols(), b"ACACACTA");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_pair_single_record() {
        let path = std::env::temp_dir().join(format!("swalign-single-{}.fa", std::process::id()));
        std::fs::write(&path, ">only\nACGT\n").unwrap();

        match read_pair(&path) {
            Err(Error::MissingRecord { expected, found }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected missing record, got {:?}", other.map(|_| ())),
        }
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_pair("/nonexistent/swalign.fa"),
            Err(Error::Io(_))
        ));
    }
}
