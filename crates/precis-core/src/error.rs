/// Errors that can occur in precis operations.
#[derive(Debug, thiserror::Error)]
pub enum PrecisError {
    #[error("invalid ratio {0}: must be between 0 and 1")]
    InvalidRatio(f64),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for PrecisError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
