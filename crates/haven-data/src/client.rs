//! HTTP fetch client with timeout and retry policy.

use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::retry::RetryPolicy;
use crate::timeout::TimeoutConfig;

/// Fetch policy combining timeout and retry configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchPolicy {
    /// Timeout configuration.
    pub timeout: TimeoutConfig,
    /// Retry policy.
    pub retry: RetryPolicy,
}

impl FetchPolicy {
    /// Create a new fetch policy.
    pub fn new(timeout: TimeoutConfig, retry: RetryPolicy) -> Self {
        Self { timeout, retry }
    }
}

/// JSON-over-HTTP client used by the catalog source.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    policy: FetchPolicy,
}

impl FetchClient {
    /// Build a client applying the policy's timeouts.
    pub fn new(policy: FetchPolicy) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("mindhaven/", env!("CARGO_PKG_VERSION")));

        if let Some(connect) = policy.timeout.connect {
            builder = builder.connect_timeout(connect);
        }
        if let Some(total) = policy.timeout.total {
            builder = builder.timeout(total);
        }

        let http = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { http, policy })
    }

    /// The policy this client was built with.
    pub fn policy(&self) -> &FetchPolicy {
        &self.policy
    }

    /// GET `url` with query parameters and decode the JSON body.
    ///
    /// Failed attempts are retried according to the retry policy.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let mut attempt = 0;
        loop {
            match self.get_once(url, query).await {
                Ok(value) => return Ok(value),
                Err(e) if self.policy.retry.should_retry(&e, attempt) => {
                    let delay = self.policy.retry.backoff.delay_for_attempt(attempt);
                    tracing::debug!(
                        url,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "retrying catalog request"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_once<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let bytes = response.bytes().await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_builds_with_timeouts() {
        let policy = FetchPolicy::new(
            TimeoutConfig::from_total(Duration::from_secs(4)),
            RetryPolicy::new(2),
        );
        let client = FetchClient::new(policy.clone()).unwrap();
        assert_eq!(client.policy(), &policy);
    }

    #[tokio::test]
    async fn test_invalid_url_is_an_error() {
        let client = FetchClient::new(FetchPolicy::default()).unwrap();
        let result: Result<serde_json::Value, _> = client.get_json("not a url", &[]).await;
        assert!(result.is_err());
    }
}
