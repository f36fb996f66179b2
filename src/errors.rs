use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathPlannerError {
    #[error("no path found")]
    NoPathFound, // Frontier or recursion exhausted before reaching the goal

    #[error("unknown location `{0}`")]
    UnknownLocation(String),

    #[error("unsupported algorithm `{0}`")]
    UnknownAlgorithm(String),

    #[error("invalid search options: {0}")]
    InvalidOptions(String),

    #[error("inconsistent road map: {0}")]
    InvalidRoadMap(String),

    #[error("unable to read options: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed options: {0}")]
    Json(#[from] serde_json::Error),
}
