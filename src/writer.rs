use crate::record::FastxRecord;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write one record as FASTQ. A missing quality becomes a run of `!` (Phred 0).
pub fn write_fastq<W: Write + ?Sized>(rec: &FastxRecord, out: &mut W) -> io::Result<()> {
    match &rec.qual {
        Some(q) => write!(out, "@{}\n{}\n+\n{}\n", rec.name, rec.seq, q),
        None => {
            let q = "!".repeat(rec.seq.chars().count());
            write!(out, "@{}\n{}\n+\n{}\n", rec.name, rec.seq, q)
        }
    }
}

/// Side-channel FASTQ file for records rejected by the quality filter.
pub(crate) struct FastqSink {
    path: PathBuf,
    out: BufWriter<File>,
    written: u64,
}

impl FastqSink {
    pub(crate) fn create(path: &Path) -> io::Result<Self> {
        let f = File::create(path)?;
        log::debug!("opened rejected-read sink {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            out: BufWriter::with_capacity(64 * 1024, f),
            written: 0,
        })
    }

    pub(crate) fn write(&mut self, rec: &FastxRecord) -> io::Result<()> {
        write_fastq(rec, &mut self.out)?;
        self.written += 1;
        Ok(())
    }

    #[inline]
    pub(crate) fn written(&self) -> u64 {
        self.written
    }

    #[inline]
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and close the file.
    pub(crate) fn finish(mut self) -> io::Result<u64> {
        self.out.flush()?;
        Ok(self.written)
    }
}
