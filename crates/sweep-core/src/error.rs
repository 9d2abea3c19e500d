use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("{curve} needs {required} control points, got {found}")]
    InsufficientControlPoints {
        curve: &'static str,
        required: &'static str,
        found: usize,
    },

    #[error("[{0}] already exists")]
    DuplicateName(String),

    #[error("[{0}] doesn't exist")]
    MissingReference(String),

    #[error("[{name}] isn't 2d (dimension {found})")]
    WrongDimension { name: String, found: u8 },

    #[error("type {0} unrecognized")]
    UnrecognizedType(String),

    #[error("Degenerate vector at sample {sample}: {what}")]
    DegenerateVector { sample: usize, what: &'static str },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Validation failed: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SweepError>;

impl SweepError {
    /// Attach the curve sample index to a degenerate-vector failure.
    pub fn at_sample(self, sample: usize) -> Self {
        match self {
            SweepError::DegenerateVector { what, .. } => SweepError::DegenerateVector { sample, what },
            other => other,
        }
    }
}
