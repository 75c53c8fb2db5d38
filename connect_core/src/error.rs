pub type ClientResult<T, E = ClientError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("User not logged in")]
    NotLoggedIn,

    #[error("No token found")]
    NoToken,

    #[error("Please enter a tag")]
    EmptyTag,

    #[error("No file selected")]
    NoFileSelected,

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("an internal client error occurred")]
    Anyhow(#[from] anyhow::Error),
}
