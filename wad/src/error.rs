use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LumpError {
    /// The lump byte length is not an exact multiple of the record size
    #[error("{lump} lump is {size} bytes, not a multiple of the {record} byte record")]
    BadLumpSize {
        lump: &'static str,
        size: usize,
        record: usize,
    },

    #[error("{0} lump is missing")]
    MissingLump(&'static str),

    #[error("{lump} lump header is truncated ({size} bytes)")]
    ShortHeader { lump: &'static str, size: usize },

    #[error("couldn't read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
