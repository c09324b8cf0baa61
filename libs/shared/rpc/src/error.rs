use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Clinic service URL is not configured")]
    NotConfigured,

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Clinic service error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}
