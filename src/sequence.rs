use crate::error::{Error, Result};

/// Nucleotides accepted by the vector lane engine, in query profile order
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Index of the nucleotide in [`NUCLEOTIDES`], or `None` if the byte isn't one
#[inline(always)]
pub fn nucleotide_index(symbol: u8) -> Option<usize> {
    match symbol {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// A named nucleotide sequence. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    label: String,
    symbols: Vec<u8>,
}

impl Sequence {
    pub fn new(label: impl Into<String>, symbols: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            symbols: symbols.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Fails on the first symbol outside of `ACGT`
    pub fn validate_nucleotides(&self) -> Result<()> {
        match self
            .symbols
            .iter()
            .position(|&symbol| nucleotide_index(symbol).is_none())
        {
            Some(position) => Err(Error::InvalidSymbol {
                label: self.label.clone(),
                position,
                symbol: self.symbols[position] as char,
            }),
            None => Ok(()),
        }
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_matches_symbols() {
        let seq = Sequence::new("seq", "ACGT");
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.label(), "seq");
        assert!(Sequence::new("empty", "").is_empty());
    }

    #[test]
    fn test_validate_nucleotides() {
        assert!(Sequence::new("ok", "ACGTTGCA").validate_nucleotides().is_ok());

        match Sequence::new("bad", "ACNGT").validate_nucleotides() {
            Err(Error::InvalidSymbol {
                label,
                position,
                symbol,
            }) => {
                assert_eq!(label, "bad");
                assert_eq!(position, 2);
                assert_eq!(symbol, 'N');
            }
            other => panic!("expected invalid symbol, got {:?}", other),
        }

        // Lowercase isn't part of the alphabet
        assert!(Sequence::new("lower", "acgt").validate_nucleotides().is_err());
    }

    #[test]
    fn test_nucleotide_index_order() {
        for (i, nucleotide) in NUCLEOTIDES.iter().enumerate() {
            assert_eq!(nucleotide_index(*nucleotide), Some(i));
        }
        assert_eq!(nucleotide_index(b'N'), None);
    }
}
