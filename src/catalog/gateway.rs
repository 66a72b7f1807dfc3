//! Outbound HTTP boundary for the movie-data provider.
//!
//! Every request carries the configured API key and goes to the configured
//! base endpoint; callers only supply the query-specific parameters. The
//! provider's `{"Response": "True"|"False"}` convention is decoded here into
//! an explicit [`Envelope`] so nothing downstream inspects raw fields.

use std::fmt;
use std::time::Duration;

use log::{debug, info, warn};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const SERVER_ERROR_MESSAGE: &str = "Erro no servidor. Tente novamente mais tarde.";
const CONNECTIVITY_ERROR_MESSAGE: &str = "Erro de conexão. Verifique sua internet.";

/// Endpoint, credential and timeout for the provider.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Transport-level failures, normalized.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The provider could not be reached at all.
    Connectivity,
    /// No complete response within the configured timeout.
    Timeout,
    /// The provider answered with a non-2xx status.
    Server { status: u16 },
    /// Any other transport failure, passed through.
    Transport(String),
    /// 2xx body that is not a valid envelope.
    Decode(String),
}

impl GatewayError {
    /// True for failures where the request never got an answer.
    pub fn is_network(&self) -> bool {
        matches!(self, GatewayError::Connectivity | GatewayError::Timeout)
    }

    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else if err.is_connect() || err.is_request() {
            GatewayError::Connectivity
        } else if let Some(status) = err.status() {
            GatewayError::Server {
                status: status.as_u16(),
            }
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Connectivity | GatewayError::Timeout => {
                write!(f, "{CONNECTIVITY_ERROR_MESSAGE}")
            }
            GatewayError::Server { .. } => write!(f, "{SERVER_ERROR_MESSAGE}"),
            GatewayError::Transport(msg) => write!(f, "{msg}"),
            GatewayError::Decode(msg) => write!(f, "Resposta inválida do servidor: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Decoded provider response.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success(T),
    Failure { message: Option<String> },
}

#[derive(Deserialize, Debug, PartialEq)]
enum ResponseFlag {
    True,
    False,
}

#[derive(Deserialize, Debug)]
struct RawEnvelope {
    #[serde(rename = "Response")]
    flag: ResponseFlag,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(flatten)]
    body: Map<String, Value>,
}

/// Splits a provider body on its status flag and decodes the success payload.
pub fn decode_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<Envelope<T>, GatewayError> {
    let raw: RawEnvelope =
        serde_json::from_slice(bytes).map_err(|e| GatewayError::Decode(e.to_string()))?;

    match raw.flag {
        ResponseFlag::True => T::deserialize(Value::Object(raw.body))
            .map(Envelope::Success)
            .map_err(|e| GatewayError::Decode(e.to_string())),
        ResponseFlag::False => Ok(Envelope::Failure {
            message: raw.error.filter(|m| !m.trim().is_empty()),
        }),
    }
}

/// Holds one pooled client. Stateless between calls.
pub struct HttpGateway {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// `GET <base>?apikey=<key>&<params>`, decoded into an [`Envelope`].
    pub async fn request<T: DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Envelope<T>, GatewayError> {
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        info!("Provider request: params={:?}", keys);

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("apikey", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                let err = GatewayError::from_reqwest(e);
                warn!(
                    "Provider request failed: {:?} (network={})",
                    err,
                    err.is_network()
                );
                err
            })?;

        let status = response.status();
        debug!("Provider response status: {}", status);

        if !status.is_success() {
            warn!("Provider returned HTTP {}", status.as_u16());
            return Err(GatewayError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            let err = GatewayError::from_reqwest(e);
            warn!("Provider body read failed: {:?}", err);
            err
        })?;
        debug!("Provider body: {} bytes", body.len());

        let envelope = decode_envelope(&body);
        if let Err(ref e) = envelope {
            warn!("Provider body rejected: {}", e);
        }
        envelope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::SearchPayload;

    #[test]
    fn test_decode_success_envelope() {
        let body = br#"{"Search":[{"imdbID":"tt0371746","Title":"Iron Man","Year":"2008","Poster":"http://x/y.jpg"}],"totalResults":"1","Response":"True"}"#;
        let envelope: Envelope<SearchPayload> = decode_envelope(body).unwrap();

        match envelope {
            Envelope::Success(payload) => {
                assert_eq!(payload.results.len(), 1);
                assert_eq!(payload.results[0].title, "Iron Man");
                assert_eq!(payload.total_results.as_deref(), Some("1"));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_failure_envelope_keeps_message() {
        let body = br#"{"Response":"False","Error":"Movie not found!"}"#;
        let envelope: Envelope<SearchPayload> = decode_envelope(body).unwrap();

        assert_eq!(
            envelope,
            Envelope::Failure {
                message: Some("Movie not found!".to_string())
            }
        );
    }

    #[test]
    fn test_decode_failure_without_message() {
        let body = br#"{"Response":"False","Error":""}"#;
        let envelope: Envelope<SearchPayload> = decode_envelope(body).unwrap();

        assert_eq!(envelope, Envelope::Failure { message: None });
    }

    #[test]
    fn test_decode_rejects_missing_flag() {
        let body = br#"{"Search":[]}"#;
        let result: Result<Envelope<SearchPayload>, _> = decode_envelope(body);

        assert!(matches!(result, Err(GatewayError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let result: Result<Envelope<SearchPayload>, _> = decode_envelope(b"<html>oops</html>");
        assert!(matches!(result, Err(GatewayError::Decode(_))));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GatewayError::Server { status: 503 }.to_string(),
            "Erro no servidor. Tente novamente mais tarde."
        );
        assert_eq!(
            GatewayError::Connectivity.to_string(),
            "Erro de conexão. Verifique sua internet."
        );
        assert_eq!(GatewayError::Timeout.to_string(), GatewayError::Connectivity.to_string());
        assert_eq!(GatewayError::Transport("boom".to_string()).to_string(), "boom");
    }

    #[test]
    fn test_timeout_is_network_error() {
        assert!(GatewayError::Timeout.is_network());
        assert!(GatewayError::Connectivity.is_network());
        assert!(!GatewayError::Server { status: 500 }.is_network());
    }

    #[test]
    fn test_config_defaults() {
        let config = GatewayConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
