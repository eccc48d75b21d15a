use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FatalDecodeFailure {
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("response body is not a JSON object")]
    NotAnObject,
    #[error("response has no primary `data`")]
    MissingData,
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl From<serde_json::Error> for FatalDecodeFailure {
    fn from(err: serde_json::Error) -> Self {
        FatalDecodeFailure::InvalidJson(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventDecodeError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("record has no `_T` discriminator")]
    MissingDiscriminator,
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),
    #[error("invalid timestamp `{value}`: {reason}")]
    InvalidTimestamp { value: String, reason: String },
    #[error("invalid field for {discriminator}: {reason}")]
    InvalidField {
        discriminator: String,
        reason: String,
    },
}
