//! `reqwest`-backed link probe.

use std::time::Duration;

use async_trait::async_trait;

use super::{LinkProbe, ProbeOutcome};
use crate::github::WorkflowError;
use crate::github::gateway::map_reqwest_error;

/// Default per-request timeout for link probes.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = "evidence-link-checker";

/// Probes links with `HEAD` requests, following redirects.
#[derive(Debug, Clone)]
pub struct HttpLinkProbe {
    client: reqwest::Client,
}

impl HttpLinkProbe {
    /// Builds a probe with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Api`] when the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, WorkflowError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|error| map_reqwest_error("build link probe", &error))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl LinkProbe for HttpLinkProbe {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.head(url).send().await {
            Ok(response) => ProbeOutcome::from_status(response.status().as_u16()),
            Err(error) => {
                tracing::debug!(%url, %error, "link probe failed");
                error
                    .status()
                    .map_or(ProbeOutcome::Unreachable, |status| {
                        ProbeOutcome::from_status(status.as_u16())
                    })
            }
        }
    }
}
