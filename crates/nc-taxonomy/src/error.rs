use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("unknown taxonomy path {0:?}")]
    UnknownPath(String),

    #[error("empty taxonomy path")]
    EmptyPath,

    #[error("taxonomy path {path:?} has an empty or malformed segment")]
    BadSegment { path: String },

    #[error("taxonomy path {path:?} is deeper than {max} levels")]
    TooDeep { path: String, max: usize },

    #[error("taxonomy is full: at most {max} types")]
    Full { max: usize },

    #[error("taxonomy parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TaxonomyResult<T> = Result<T, TaxonomyError>;
