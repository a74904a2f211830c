use std::{collections::HashMap, time::Duration};

use derive_builder::Builder;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::{
    api_interfaces::envelope::Envelope,
    constants::*,
    error::{ClientInitError, EndpointConfigError, GetError, HeaderError},
    signing,
    util::default_http_client,
};

/// URL template of the API, with a token standing in for the language
/// subdomain.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
    pub url: String,
    pub replace_token: String,
}

impl Endpoint {
    pub fn try_new(
        endpoint_format: String,
        replace_token: String,
    ) -> Result<Self, EndpointConfigError> {
        let endpoint = Self {
            url: endpoint_format,
            replace_token,
        };
        endpoint.validate()?;
        Ok(endpoint)
    }

    pub fn validate(&self) -> Result<(), EndpointConfigError> {
        if self.replace_token.is_empty() {
            return Err(EndpointConfigError::MissingReplaceToken);
        }
        if self.url.is_empty() {
            return Err(EndpointConfigError::MissingEndpoint);
        }
        if !self.url.contains(&self.replace_token) {
            return Err(EndpointConfigError::ReplaceTokenNotInEndpoint);
        }
        Ok(())
    }

    pub fn to_url(&self, language: &str) -> String {
        self.url.replace(&self.replace_token, language)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL_FORMAT.to_string(),
            replace_token: DEFAULT_ENDPOINT_REPLACE_TOKEN.to_string(),
        }
    }
}

/// Version strings the vendor expects on every call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolVersion {
    pub version: String,
    pub system_version: String,
    pub app_version: String,
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self {
            version: DEFAULT_PROTOCOL_VERSION.to_string(),
            system_version: DEFAULT_SYSTEM_VERSION.to_string(),
            app_version: DEFAULT_APP_VERSION.to_string(),
        }
    }
}

#[derive(Builder, Clone, Debug)]
#[builder(setter(into))]
pub struct ClientConfig {
    /// Language subdomain, also sent as the `language` field.
    #[builder(default = "DEFAULT_LANGUAGE.to_string()")]
    pub language: String,
    #[builder(default)]
    pub endpoint: Endpoint,
    #[builder(default = "DEFAULT_SECRET.to_string()")]
    pub secret: String,
    #[builder(default)]
    pub protocol: ProtocolVersion,
    /// Per-request timeout of the HTTP client built by [`Client::from_config`].
    #[builder(default = "DEFAULT_TIMEOUT")]
    pub timeout: Duration,
    /// Extra headers merged into every request.
    #[builder(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Clone, Debug)]
pub struct Client {
    http_client: reqwest::Client,
    base_url: String,
    language: String,
    secret: String,
    protocol: ProtocolVersion,
    headers: HeaderMap,
}

impl Client {
    /// Client for the given language subdomain with the default settings.
    pub fn new(language: &str) -> Result<Self, ClientInitError> {
        let config = ClientConfigBuilder::default().language(language).build()?;
        Self::from_config(config)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, ClientInitError> {
        let http_client =
            default_http_client(config.timeout).map_err(ClientInitError::HttpClient)?;
        Self::with_http_client(config, http_client)
    }

    /// Use a caller supplied HTTP client. `config.timeout` is not applied.
    pub fn with_http_client(
        config: ClientConfig,
        http_client: reqwest::Client,
    ) -> Result<Self, ClientInitError> {
        config.endpoint.validate()?;
        let mut client = Self {
            http_client,
            base_url: config.endpoint.to_url(&config.language),
            language: config.language,
            secret: config.secret,
            protocol: config.protocol,
            headers: HeaderMap::new(),
        };
        client.append_headers(&config.headers)?;
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn set_header(&mut self, key: &str, value: &str) -> Result<(), HeaderError> {
        let name = HeaderName::from_bytes(key.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.insert(name, value);
        Ok(())
    }

    /// Replace all custom headers. On error the previous headers are kept.
    pub fn set_headers(&mut self, headers: &HashMap<String, String>) -> Result<(), HeaderError> {
        let previous = std::mem::take(&mut self.headers);
        if let Err(e) = self.append_headers(headers) {
            self.headers = previous;
            return Err(e);
        }
        Ok(())
    }

    pub fn append_headers(&mut self, headers: &HashMap<String, String>) -> Result<(), HeaderError> {
        for (key, value) in headers {
            self.set_header(key, value)?;
        }
        Ok(())
    }

    fn default_fields(&self) -> [(&'static str, &str); 4] {
        [
            (LANGUAGE_FIELD, self.language.as_str()),
            (VERSION_FIELD, self.protocol.version.as_str()),
            (SYSTEM_VERSION_FIELD, self.protocol.system_version.as_str()),
            (APP_VERSION_FIELD, self.protocol.app_version.as_str()),
        ]
    }

    /// Sign and send one call, then decode its body.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        function: &'static str,
        params: &[String],
    ) -> Result<T, GetError> {
        let mut form = signing::form_fields(function, params, &self.secret);
        form.extend(
            self.default_fields()
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        debug!(function, params = params.len(), "sending request");
        let response = self
            .http_client
            .post(&self.base_url)
            .header(ACCEPT, "application/json")
            // Replaces, not appends, so custom headers win over the defaults.
            .headers(self.headers.clone())
            .form(&form)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            debug!(function, status = status.as_u16(), "response received");
        } else {
            warn!(function, status = status.as_u16(), "unexpected response status");
        }
        let body = response.text().await.map_err(GetError::ResponseBodyError)?;
        decode_response(function, body)
    }
}

/// Check the error envelope first, then decode the expected schema.
pub(crate) fn decode_response<T: DeserializeOwned>(
    function: &'static str,
    body: String,
) -> Result<T, GetError> {
    if let Some(error) = serde_json::from_str::<Envelope>(&body)
        .ok()
        .and_then(Envelope::into_error)
    {
        warn!(function, code = error.id, message = %error.text, "API error");
        return Err(GetError::ApiError {
            code: error.id,
            message: error.text,
        });
    }
    match serde_json::from_str(&body) {
        Ok(decoded) => Ok(decoded),
        Err(source) => {
            error!(function, error = %source, body = %body, "failed to parse response");
            Err(GetError::ParseError {
                function,
                source,
                body,
            })
        }
    }
}
