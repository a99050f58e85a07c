use thiserror::Error;

/// Terminal failure classes for one fetch-and-predict invocation.
///
/// `InvalidInput` and `ChainRead` are fatal to the request. `InsufficientData`
/// is fatal to prediction only; the series is still shown. `Predictor` never
/// appears in a `Failed` state at all: a predictor failure degrades to an
/// informational notice while the fetched series stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    ChainRead,
    InsufficientData,
    Predictor,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::ChainRead => "chain_read",
            ErrorKind::InsufficientData => "insufficient_data",
            ErrorKind::Predictor => "predictor",
        }
    }
}

#[derive(Debug, Error)]
pub enum ChainReadError {
    #[error("rpc transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("malformed return data: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prediction service returned HTTP {0}")]
    Status(reqwest::StatusCode),
}
