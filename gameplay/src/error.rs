use thiserror::Error;
use wad::LumpError;

/// Anything that stops a level being built. There is no partial load, the
/// level either exists whole or not at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Lump(#[from] LumpError),

    /// A record references an index past the end of its target array
    #[error("{kind} {index} references {target} {value} but there are only {count}")]
    BadReference {
        kind: &'static str,
        index: usize,
        target: &'static str,
        value: usize,
        count: usize,
    },

    #[error("map has no {0}")]
    Empty(&'static str),
}
