use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

use crate::client::ClientConfigBuilderError;

#[derive(Debug, Error)]
pub enum GetError {
    #[error("the request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("the response body could not be read: {0}")]
    ResponseBodyError(#[source] reqwest::Error),
    #[error("the API returned error {code}: {message}")]
    ApiError { code: i64, message: String },
    /// The body did not match the expected schema. `body` keeps the raw
    /// payload for diagnosis.
    #[error("unable to parse the `{function}` response: {source}")]
    ParseError {
        function: &'static str,
        #[source]
        source: serde_json::Error,
        body: String,
    },
    #[error("unable to parse time field `{field}` ({value:?}): {source}")]
    TimeError {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum EndpointConfigError {
    #[error("the endpoint format is missing")]
    MissingEndpoint,
    #[error("the replace token is missing")]
    MissingReplaceToken,
    #[error("the replace token provided is not in the endpoint format")]
    ReplaceTokenNotInEndpoint,
}

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("invalid header name: {0}")]
    InvalidName(#[from] InvalidHeaderName),
    #[error("invalid header value: {0}")]
    InvalidValue(#[from] InvalidHeaderValue),
}

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("invalid endpoint configuration: {0}")]
    InvalidEndpointConfig(#[from] EndpointConfigError),
    #[error("invalid client configuration: {0}")]
    InvalidConfig(#[from] ClientConfigBuilderError),
    #[error("invalid custom header: {0}")]
    InvalidHeader(#[from] HeaderError),
    #[error("unable to build the HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
