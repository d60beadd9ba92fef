//! HTTP implementation of the [`LlmGateway`] port
//!
//! A single `reqwest::Client` is shared across requests; the provider
//! strategy decides what goes on the wire and how the reply is read.

use crate::providers::{ProviderSettings, ProviderStrategy};
use async_trait::async_trait;
use qa_application::{GatewayError, GenerationRequest, LlmGateway};
use qa_domain::{ProviderKind, ProviderReply};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors raised while constructing a gateway
#[derive(Error, Debug)]
pub enum ProviderSetupError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

pub struct HttpLlmGateway {
    client: reqwest::Client,
    strategy: Box<dyn ProviderStrategy>,
}

impl HttpLlmGateway {
    /// Create a gateway for the provider described by `settings`
    pub fn new(settings: &ProviderSettings) -> Result<Self, ProviderSetupError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("llm-qa/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, settings.strategy()))
    }

    pub fn with_client(client: reqwest::Client, strategy: Box<dyn ProviderStrategy>) -> Self {
        Self { client, strategy }
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl LlmGateway for HttpLlmGateway {
    fn provider(&self) -> ProviderKind {
        self.strategy.kind()
    }

    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<ProviderReply, GatewayError> {
        let url = self.strategy.endpoint(request.model);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(request.credential.expose())
            .json(&self.strategy.build_body(request))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        trace!("{} responded {} ({} bytes)", url, status, body.len());

        self.strategy.decode(status, &body, request.question)
    }
}
