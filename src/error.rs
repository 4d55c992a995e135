use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A line-oriented input had a line that does not parse.
    #[error("line {line}: {reason}")]
    Line { line: usize, reason: String },

    /// A blank-line-separated record does not parse.
    #[error("record {record}: {reason}")]
    Record { record: usize, reason: String },

    #[error("bag `{0}` is contained somewhere but has no rule of its own")]
    UnknownBag(String),

    #[error("bag rules form a cycle through `{0}`")]
    Cycle(String),

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl Error {
    /// `ix` is the zero-based index as handed out by `enumerate`.
    pub(crate) fn line(ix: usize, reason: impl Into<String>) -> Self {
        Error::Line {line: ix + 1, reason: reason.into()}
    }

    pub(crate) fn record(ix: usize, reason: impl Into<String>) -> Self {
        Error::Record {record: ix + 1, reason: reason.into()}
    }
}
