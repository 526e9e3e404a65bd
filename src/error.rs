use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur when interacting with the FreshBooks API.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("error making request: {0:?}")]
    #[diagnostic(
        code(freshbooks_rs::request_error),
        help("Check your network connection and FreshBooks API availability")
    )]
    Request(#[source] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("unexpected http status: {status}")]
    #[diagnostic(
        code(freshbooks_rs::http_status),
        help("The FreshBooks API rejected the request before processing it")
    )]
    Http {
        status: reqwest::StatusCode,
        response_body: Option<String>,
    },

    #[error("error encoding request: {0}")]
    #[diagnostic(
        code(freshbooks_rs::serialization_error),
        help("The request envelope could not be rendered as XML")
    )]
    Serialization(#[source] quick_xml::SeError),

    #[error("error decoding response: {0}")]
    #[diagnostic(
        code(freshbooks_rs::deserialization_error),
        help("The API returned data in an unexpected format")
    )]
    Deserialization(#[source] quick_xml::DeError, Option<String>),

    /// An error reported by the service inside an otherwise well-formed
    /// response envelope. Carries the `<error>` text verbatim.
    #[error("freshbooks error: {0}")]
    #[diagnostic(
        code(freshbooks_rs::api_error),
        help("Review the error message returned by the FreshBooks API")
    )]
    Api(String),

    #[error("endpoint could not be parsed as a URL")]
    #[diagnostic(
        code(freshbooks_rs::invalid_endpoint),
        help("Check that the account name forms a valid API hostname")
    )]
    InvalidEndpoint,
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

impl From<quick_xml::SeError> for Error {
    fn from(e: quick_xml::SeError) -> Self {
        Self::Serialization(e)
    }
}

impl From<quick_xml::DeError> for Error {
    fn from(e: quick_xml::DeError) -> Self {
        Self::Deserialization(e, None)
    }
}

/// Type alias for results from this crate.
pub type Result<O> = std::result::Result<O, Error>;
