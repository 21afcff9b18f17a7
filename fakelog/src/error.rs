use chrono::{DateTime, FixedOffset};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Rejected command line value.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// The output file exists and --overwrite was not given.
    #[error("{} already exists, use --overwrite to replace it", .0.display())]
    OutputExists(PathBuf),

    /// Output file could not be created.
    #[error("can't create {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("write failed: {0}")]
    Write(#[from] io::Error),

    #[error("can't close {}: {source}", path.display())]
    Close { path: PathBuf, source: io::Error },

    /// Advancing the record timestamp left chrono's representable range.
    #[error("record timestamp overflowed after {0}")]
    TimestampOverflow(DateTime<FixedOffset>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
