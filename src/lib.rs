//! Core utilities for FASTA/FASTQ sequence data.
//!
//! - Streaming `readfq`-style scanner over FASTA and FASTQ (mixed freely).
//! - Probabilistic downsampling and mean-quality filtering, with rejected reads
//!   optionally written to a side FASTQ file.
//! - Reverse-complement, Phred error-probability averaging, primer loading and
//!   header metadata extraction.

pub mod complement;
pub mod error;
pub mod header;
pub mod policy;
pub mod primers;
pub mod quality;
pub mod reader;
pub mod record;
pub mod writer;
mod util;

pub use crate::complement::{complement, reverse_complement};
pub use crate::error::{FastxError, IoContext, QualityError};
pub use crate::header::get_runid;
pub use crate::policy::{Counters, ScanOptions, SinkConfig};
pub use crate::primers::load_primers;
pub use crate::quality::{MAX_PHRED, error_probabilities, mean_quality};
pub use crate::reader::FastxReader;
pub use crate::record::{FastxRecord, RecordFormat, record_size};
pub use crate::writer::write_fastq;
