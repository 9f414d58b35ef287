use futures_util::StreamExt;
use inspector_core::Mode;
use inspector_logging::{inspector_debug, inspector_info};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::{FailureKind, ServiceResponse, TransportError};

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8050";

#[derive(Debug, Clone)]
pub struct TransportSettings {
    pub service_url: String,
    pub max_bytes: u64,
}

impl TransportSettings {
    /// Settings for `service_url`, which must parse as an absolute URL.
    pub fn new(service_url: &str) -> Result<Self, TransportError> {
        parse_url(service_url)?;
        Ok(Self {
            service_url: service_url.to_string(),
            ..Self::default()
        })
    }

    /// Full URL of the endpoint serving `mode`.
    pub fn endpoint_url(&self, mode: Mode) -> Result<Url, TransportError> {
        let mut base = parse_url(&self.service_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(mode.endpoint())
            .map_err(|err| TransportError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            max_bytes: 64 * 1024 * 1024,
        }
    }
}

/// Sends one rendering request and returns the raw response. Non-success statuses
/// are returned as responses, not errors.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn submit(
        &self,
        mode: Mode,
        body: &serde_json::Value,
    ) -> Result<ServiceResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: TransportSettings,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(settings: TransportSettings) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| TransportError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &TransportSettings {
        &self.settings
    }

    fn too_large(&self, actual: u64) -> TransportError {
        TransportError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn submit(
        &self,
        mode: Mode,
        body: &serde_json::Value,
    ) -> Result<ServiceResponse, TransportError> {
        let endpoint = self.settings.endpoint_url(mode)?;
        let payload = serde_json::to_vec(body)
            .map_err(|err| TransportError::new(FailureKind::InvalidBody, err.to_string()))?;
        inspector_info!("POST {} ({} byte body)", endpoint, payload.len());

        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        inspector_debug!(
            "response status={} content_type={:?} bytes={}",
            status.as_u16(),
            content_type,
            bytes.len()
        );

        Ok(ServiceResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            content_type,
            bytes,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url, TransportError> {
    Url::parse(raw).map_err(|err| TransportError::new(FailureKind::InvalidUrl, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_builder() {
        return TransportError::new(FailureKind::InvalidUrl, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_onto_service_url() {
        let settings = TransportSettings::new("http://splash.local:8050").unwrap();
        assert_eq!(
            settings.endpoint_url(Mode::Script).unwrap().as_str(),
            "http://splash.local:8050/execute"
        );
        let nested = TransportSettings::new("http://proxy.local/splash").unwrap();
        assert_eq!(
            nested.endpoint_url(Mode::Render).unwrap().as_str(),
            "http://proxy.local/splash/render.json"
        );
    }

    #[test]
    fn bad_service_url_is_rejected() {
        let err = TransportSettings::new("not a url").unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }
}
