use std::sync::Arc;

/// Represents a result type for operations in the Goaffpro SDK.
///
/// This type alias is used throughout the SDK to indicate the result of operations that may return
/// errors specific to the Goaffpro SDK.
///
/// This `Result` type is a standard Rust `Result` type where the error variant is defined by the
/// Goaffpro-specific [`Error`] enum.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum representing possible errors that can occur in the Goaffpro SDK.
#[derive(thiserror::Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Initialization was attempted with an empty public token.
    #[error("public token is empty")]
    EmptyPublicToken,

    /// A tracking call was issued before a session was established with [`Client::init()`].
    ///
    /// [`Client::init()`]: crate::Client::init
    #[error("client is not initialized")]
    NotInitialized,

    /// Invalid base URL configuration.
    #[error("invalid base_url configuration")]
    InvalidBaseUrl(#[source] url::ParseError),

    /// The request was unauthorized, possibly due to an invalid public token.
    #[error("unauthorized, public token is likely invalid")]
    Unauthorized,

    /// An I/O error.
    #[error(transparent)]
    // std::io::Error is not clonable, so we're wrapping it in an Arc.
    Io(Arc<std::io::Error>),

    /// Network error.
    #[error(transparent)]
    Network(Arc<reqwest::Error>),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(Arc::new(value))
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Network(Arc::new(value.without_url()))
    }
}
