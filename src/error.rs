use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

#[derive(Debug, Error)]
pub enum QualityError {
    #[error("quality character {ch:?} at offset {offset} is outside the Phred+33 range [0, 128]")]
    OutOfRange { ch: char, offset: usize },
}

#[derive(Debug, Error)]
pub enum FastxError {
    #[error("I/O error at {ctx:?}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("quality error at {ctx:?}: {source}")]
    Quality {
        #[source]
        source: QualityError,
        ctx: IoContext,
    },
    #[error("side-channel sink {path:?}: {source}")]
    Sink {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
    #[error("sample probability {0} is outside (0, 1]")]
    InvalidSample(f64),
    #[error("unknown record format {0:?}")]
    UnknownFormat(String),
}

impl FastxError {
    pub(crate) fn io_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Io { source, ctx }
    }
    pub(crate) fn qual_err(source: QualityError, ctx: IoContext) -> Self {
        Self::Quality { source, ctx }
    }
    pub(crate) fn sink_err(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Sink {
            source,
            path: path.into(),
        }
    }
}
