use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenElevError {
    #[error("invalid endpoint {0}")]
    Endpoint(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("lookup returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed lookup response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected {expected} results, got {got}")]
    ResultCount { expected: usize, got: usize },
}
