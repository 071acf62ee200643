use thiserror::Error;

use crate::hue::Hue;

/// Errors raised while building values or conversion tables.
///
/// Lookups that can legitimately find nothing (a mix with no positive
/// weight, a hue missing from the table, …) return `None` instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid hue: {0}")]
    InvalidHue(String),

    #[error("total hue {0} not in [0, 100]")]
    OutOfRange(f32),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("no hue with the prefix of {0} in the table")]
    UnknownHue(Hue),

    #[error("{0} table is empty")]
    EmptyTable(&'static str),

    #[error("line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("csv error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
