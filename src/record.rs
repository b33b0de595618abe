use crate::complement;
use crate::error::FastxError;
use std::str::FromStr;

/// One FASTA or FASTQ record. `qual` is present only for FASTQ provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastxRecord {
    pub id: String,
    pub name: String,
    pub seq: String,
    pub qual: Option<String>,
}

impl FastxRecord {
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
    #[inline]
    pub fn is_fastq(&self) -> bool {
        self.qual.is_some()
    }

    /// New record with the sequence reverse-complemented and the quality
    /// reversed so it stays aligned.
    pub fn reverse_complement(&self) -> FastxRecord {
        FastxRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            seq: complement::reverse_complement(&self.seq),
            qual: self.qual.as_ref().map(|q| q.chars().rev().collect()),
        }
    }

    /// Estimated serialized size, with the format given as a tag.
    pub fn size_as(&self, tag: &str) -> Result<usize, FastxError> {
        Ok(record_size(self, tag.parse()?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Fasta,
    Fastq,
}

impl FromStr for RecordFormat {
    type Err = FastxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fasta" => Ok(Self::Fasta),
            "fastq" => Ok(Self::Fastq),
            other => Err(FastxError::UnknownFormat(other.to_string())),
        }
    }
}

/// Size in bytes the record takes once written in `format`.
///
/// Records without quality are always sized as FASTA.
pub fn record_size(rec: &FastxRecord, format: RecordFormat) -> usize {
    let format = if rec.qual.is_none() {
        RecordFormat::Fasta
    } else {
        format
    };
    let dl = rec.name.len();
    let sl = rec.seq.len();
    match format {
        RecordFormat::Fastq => dl + 2 * sl + 6,
        RecordFormat::Fasta => dl + sl + 3,
    }
}
