// Kroki HTTP client

use crate::classify::classify;
use crate::errors::{HttpError, RenderError};
use crate::transport::{HttpGet, ReqwestTransport};
use kroki_core::{encode_payload, Diagram, KrokiConfig};

/// Kroki client for rendering diagrams
///
/// Holds only immutable configuration and the transport, so one client can
/// serve any number of concurrent renders.
#[derive(Debug, Clone)]
pub struct KrokiClient<T = ReqwestTransport> {
    config: KrokiConfig,
    transport: T,
}

impl KrokiClient<ReqwestTransport> {
    /// Create a new Kroki client backed by reqwest
    ///
    /// # Arguments
    /// * `config` - Service endpoint and timeout
    pub fn new(config: KrokiConfig) -> Result<Self, HttpError> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client configured from `KROKI_ENDPOINT` / `KROKI_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, HttpError> {
        Self::new(KrokiConfig::from_env())
    }
}

impl<T: HttpGet> KrokiClient<T> {
    /// Create a client with a custom transport
    pub fn with_transport(config: KrokiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &KrokiConfig {
        &self.config
    }

    /// GET URL for a diagram: `{endpoint}/{kind}/{format}/{payload}`
    pub fn diagram_url(&self, diagram: &Diagram, output_format: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.endpoint(),
            diagram.kind_id(),
            output_format,
            encode_payload(diagram.specification())
        )
    }

    /// Render a diagram
    ///
    /// # Arguments
    /// * `diagram` - Diagram to render
    /// * `output_format` - Requested format, e.g. "svg" or [`kroki_core::OutputFormat::Png`]
    ///
    /// # Returns
    /// The response body, unchanged. Failures go through [`classify`].
    pub async fn render(
        &self,
        diagram: &Diagram,
        output_format: impl AsRef<str>,
    ) -> Result<Vec<u8>, RenderError> {
        let output_format = output_format.as_ref();
        let url = self.diagram_url(diagram, output_format);
        tracing::debug!("Requesting {} diagram as {}: {}", diagram.kind(), output_format, url);

        match self.transport.get(&url).await {
            Ok(data) => {
                tracing::debug!("Kroki returned {} bytes", data.len());
                Ok(data)
            }
            Err(failure) => {
                let error = classify(diagram, failure);
                tracing::warn!("Kroki render failed: {}", error);
                Err(error)
            }
        }
    }
}
