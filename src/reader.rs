use crate::error::{FastxError, IoContext};
use crate::header::split_header;
use crate::policy::{Counters, ScanOptions};
use crate::quality::mean_quality;
use crate::record::FastxRecord;
use crate::util::open_file;
use crate::writer::FastqSink;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug)]
enum Source {
    Path(PathBuf),
    Reader,
}

/// Streaming FASTA/FASTQ scanner with optional sampling and quality filtering.
///
/// Records are produced one at a time. The only state carried between records
/// is a single pending header line, kept because a FASTA record only ends when
/// the next header is seen.
pub struct FastxReader<'c> {
    src: Source,
    rdr: Box<dyn BufRead + Send + 'c>,
    opts: ScanOptions,
    rng: StdRng,
    line_num: u64,
    byte_pos: u64,
    pending_header: Option<String>,
    sink: Option<FastqSink>,
    rejected: u64,
    counters: Option<&'c mut Counters>,
    // set once the input is exhausted or a record failed
    done: bool,
}

impl<'c> FastxReader<'c> {
    /// Open from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P, opts: ScanOptions) -> Result<Self, FastxError> {
        let path = path.as_ref();
        let f = open_file(path).map_err(|e| FastxError::io_err(e, IoContext::default()))?;
        let rdr = Box::new(BufReader::with_capacity(256 * 1024, f));
        Self::build(Source::Path(path.to_path_buf()), rdr, opts)
    }

    /// Wrap an arbitrary `BufRead` (stdin, in-memory data, ...).
    pub fn from_bufread<R: BufRead + Send + 'c>(
        reader: R,
        opts: ScanOptions,
    ) -> Result<Self, FastxError> {
        Self::build(Source::Reader, Box::new(reader), opts)
    }

    fn build(
        src: Source,
        rdr: Box<dyn BufRead + Send + 'c>,
        opts: ScanOptions,
    ) -> Result<Self, FastxError> {
        opts.validate()?;
        let sink = match &opts.sink {
            Some(cfg) => Some(
                FastqSink::create(&cfg.path).map_err(|e| FastxError::sink_err(e, &cfg.path))?,
            ),
            None => None,
        };
        let rng = match opts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            src,
            rdr,
            opts,
            rng,
            line_num: 0,
            byte_pos: 0,
            pending_header: None,
            sink,
            rejected: 0,
            counters: None,
            done: false,
        })
    }

    /// Report `total`/`pass` into caller-owned counters for the whole scan.
    pub fn with_counters(mut self, counters: &'c mut Counters) -> Self {
        self.counters = Some(counters);
        self
    }

    /// Records written to the side-channel sink so far.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Iterator-style `next` record.
    ///
    /// Any error ends the scan: it is returned once, the sink is closed and
    /// every later call yields `None`.
    pub fn next(&mut self) -> Option<Result<FastxRecord, FastxError>> {
        if self.done {
            return None;
        }
        match self.read_one() {
            Ok(Some(rec)) => Some(Ok(rec)),
            Ok(None) => {
                self.done = true;
                self.finish().err().map(Err)
            }
            Err(err) => {
                self.done = true;
                if let Err(sink_err) = self.finish() {
                    log::warn!("{sink_err}");
                }
                Some(Err(err))
            }
        }
    }

    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        buf.clear();
        let n = self.rdr.read_line(buf)?;
        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
            if buf.ends_with('\n') {
                buf.pop();
            }
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(n)
    }

    #[inline]
    fn next_line(&mut self, buf: &mut String) -> Result<bool, FastxError> {
        self.read_line(buf)
            .map(|n| n > 0)
            .map_err(|e| FastxError::io_err(e, self.ctx()))
    }

    /// Skip lines until a `>` or `@` header. `None` at end of input.
    fn seek_header(&mut self) -> Result<Option<String>, FastxError> {
        let mut line = String::with_capacity(128);
        while self.next_line(&mut line)? {
            if line.starts_with(['>', '@']) {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    fn read_one(&mut self) -> Result<Option<FastxRecord>, FastxError> {
        loop {
            let header = match self.pending_header.take() {
                Some(h) => h,
                None => match self.seek_header()? {
                    Some(h) => h,
                    None => return Ok(None),
                },
            };
            let (id, name) = split_header(&header[1..]);

            // sequence lines up to the next '@', '+' or '>'
            let mut seq = String::with_capacity(256);
            let mut line = String::with_capacity(256);
            let mut boundary = None;
            while self.next_line(&mut line)? {
                if line.starts_with(['@', '+', '>']) {
                    boundary = Some(std::mem::take(&mut line));
                    break;
                }
                seq.push_str(&line);
            }

            if !boundary.as_deref().is_some_and(|b| b.starts_with('+')) {
                self.pending_header = boundary;
                let rec = FastxRecord {
                    id,
                    name,
                    seq,
                    qual: None,
                };
                if let Some(rec) = self.offer(rec) {
                    return Ok(Some(rec));
                }
                continue;
            }

            // quality lines until they cover the sequence
            let seq_len = seq.chars().count();
            let mut qual = String::with_capacity(seq.len());
            let mut qual_len = 0usize;
            let mut complete = false;
            while self.next_line(&mut line)? {
                qual.push_str(&line);
                qual_len += line.chars().count();
                if qual_len >= seq_len {
                    complete = true;
                    break;
                }
            }

            if !complete {
                log::warn!(
                    "record {id} truncated at {:?}: {qual_len} quality values for {seq_len} bases, keeping sequence only",
                    self.ctx()
                );
                let rec = FastxRecord {
                    id,
                    name,
                    seq,
                    qual: None,
                };
                return Ok(self.offer(rec));
            }

            let rec = FastxRecord {
                id,
                name,
                seq,
                qual: Some(qual),
            };
            if let Some(rec) = self.offer_fastq(rec)? {
                return Ok(Some(rec));
            }
        }
    }

    /// Count a candidate and run the sampling draw; yields it if kept.
    fn offer(&mut self, rec: FastxRecord) -> Option<FastxRecord> {
        self.count(|c| c.total += 1);
        if !self.keep() {
            return None;
        }
        self.count(|c| c.pass += 1);
        Some(rec)
    }

    /// Same as [`offer`](Self::offer), with the quality filter applied after sampling.
    fn offer_fastq(&mut self, rec: FastxRecord) -> Result<Option<FastxRecord>, FastxError> {
        self.count(|c| c.total += 1);
        if !self.keep() {
            return Ok(None);
        }
        if let (Some(min_qual), Some(qual)) = (self.opts.quality_threshold(), rec.qual.as_deref()) {
            let mq =
                mean_quality(qual, false).map_err(|e| FastxError::qual_err(e, self.ctx()))?;
            if mq < min_qual {
                if let Some(sink) = self.sink.as_mut() {
                    sink.write(&rec)
                        .map_err(|e| FastxError::sink_err(e, sink.path()))?;
                    self.rejected = sink.written();
                }
                return Ok(None);
            }
        }
        self.count(|c| c.pass += 1);
        Ok(Some(rec))
    }

    #[inline]
    fn keep(&mut self) -> bool {
        match self.opts.sample {
            None => true,
            Some(p) => self.rng.random::<f64>() < p,
        }
    }

    #[inline]
    fn count(&mut self, f: impl FnOnce(&mut Counters)) {
        if let Some(c) = self.counters.as_deref_mut() {
            f(c);
        }
    }

    /// Flush and close the sink once the input is exhausted.
    fn finish(&mut self) -> Result<(), FastxError> {
        if let Some(sink) = self.sink.take() {
            let path = sink.path().to_path_buf();
            let written = sink.finish().map_err(|e| FastxError::sink_err(e, path))?;
            log::debug!("scan of {:?} done, {written} records rejected", self.src);
        }
        Ok(())
    }

    #[inline]
    fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}

impl Iterator for FastxReader<'_> {
    type Item = Result<FastxRecord, FastxError>;
    fn next(&mut self) -> Option<Self::Item> {
        FastxReader::next(self)
    }
}

impl Drop for FastxReader<'_> {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            let path = sink.path().to_path_buf();
            if let Err(err) = sink.finish() {
                log::warn!("failed to flush sink {}: {err}", path.display());
            }
        }
    }
}
