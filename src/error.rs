use thiserror::Error;

/// Errors returned by the clustering pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// No vectors survived vectorization.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// An input line could not be parsed into a posting.
    #[error("malformed record on line {line}: {source}")]
    MalformedRecord {
        /// 1-based line number in the input stream.
        line: usize,
        /// What was wrong with the line.
        #[source]
        source: RecordError,
    },

    /// A tracked language has fewer points than the sampler needs for it.
    #[error("language {language} has {found} points, but {required} initial centers are required")]
    SamplingShortfall {
        /// Language index.
        language: usize,
        /// Points available for that language.
        found: usize,
        /// Centers required per language.
        required: usize,
    },

    /// The sampler produced the wrong number of initial centers.
    #[error("sampled {found} initial centers, expected {expected}")]
    SampleSizeMismatch {
        /// Configured number of centers.
        expected: usize,
        /// Number actually sampled.
        found: usize,
    },

    /// Reading input failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reasons a single line fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Fewer than the five mandatory fields.
    #[error("expected at least 5 fields, found {found}")]
    TooFewFields {
        /// Number of fields on the line.
        found: usize,
    },

    /// A field that must hold an integer does not.
    #[error("field {field} is not an integer: {value:?}")]
    InvalidInteger {
        /// Field name.
        field: &'static str,
        /// Raw field text.
        value: String,
    },

    /// Posting type is neither question (1) nor answer (2).
    #[error("unknown posting type {0}")]
    UnknownPostingType(i32),

    /// Answers must reference the question they answer.
    #[error("answer {id} has no parent id")]
    MissingParent {
        /// Answer id.
        id: i32,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
