use pubg_domain::FatalDecodeFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("could not read API response: {0}")]
    Decode(#[from] FatalDecodeFailure),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
