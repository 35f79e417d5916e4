/// Failure talking to the metadata provider.
///
/// Every variant is the same kind of failure as far as callers are concerned: the
/// request did not produce a usable payload. Call sites log it and fall back.
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed provider response: {0}")]
    Malformed(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;
