// HTTP transport used by the Kroki client

use crate::errors::HttpError;
use std::future::Future;
use std::time::Duration;

/// Single-capability HTTP collaborator
///
/// Performs a GET against a URI and returns the body of a successful
/// response. Any other response must be reported as [`HttpError::Status`]
/// with the status code and body intact. Timeouts, pooling and retries are
/// the implementor's business.
pub trait HttpGet: Send + Sync {
    fn get(&self, uri: &str) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport
    ///
    /// # Arguments
    /// * `timeout` - Total request timeout
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("kroki-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpGet for ReqwestTransport {
    fn get(&self, uri: &str) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send {
        let request = self.client.get(uri);

        async move {
            let response = request.send().await?;
            let status = response.status();
            let body = response.bytes().await?.to_vec();

            if status.is_success() {
                Ok(body)
            } else {
                Err(HttpError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}
