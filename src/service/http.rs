use crate::model::{QueryError, QueryInput, QueryResult};
use crate::service::traits::PricingService;

use reqwest::Client;
use tracing::{info, warn};

/// Shown when a non-200 response carries no usable `detail` field.
const GENERIC_REMOTE_MESSAGE: &str = "the pricing service could not evaluate the product";

/// Talks to the remote pricing service over HTTP. One JSON POST per query;
/// no retries, no timeout beyond the transport's own.
pub struct HttpPricingService {
    client: Client,
    api_url: String,
}

impl HttpPricingService {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait::async_trait]
impl PricingService for HttpPricingService {
    async fn evaluate(&self, input: &QueryInput) -> Result<QueryResult, QueryError> {
        info!(
            "📤 Querying {} for '{}' ({})",
            self.api_url,
            input.product_name,
            input.condition.as_str()
        );

        let response = self
            .client
            .post(&self.api_url)
            .json(input)
            .send()
            .await
            .map_err(|e| {
                warn!("❌ Request failed: {}", e);
                QueryError::Connection(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("❌ Could not read response body: {}", e);
            QueryError::Connection(e.to_string())
        })?;

        if status.as_u16() != 200 {
            let message = extract_detail(&body)
                .unwrap_or_else(|| GENERIC_REMOTE_MESSAGE.to_string());
            warn!("❌ Service responded [{}]: {}", status, message);
            return Err(QueryError::Remote(message));
        }

        // A 200 body that is not a JSON object counts as a transport-level
        // failure; individual missing fields do not.
        let result: QueryResult = serde_json::from_str(&body).map_err(|e| {
            warn!("❌ Malformed 200 response: {}", e);
            QueryError::Connection(format!("malformed response: {e}"))
        })?;

        info!("✅ Estimate received [{}]", status);
        Ok(result)
    }
}

/// Pulls the human-readable `detail` message out of an error body, if the
/// body is JSON and has one.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_extracted_when_present() {
        assert_eq!(
            extract_detail(r#"{"detail":"service unavailable"}"#).as_deref(),
            Some("service unavailable")
        );
    }

    #[test]
    fn missing_or_malformed_detail_yields_none() {
        assert_eq!(extract_detail(r#"{"error":"boom"}"#), None);
        assert_eq!(extract_detail(r#"{"detail":42}"#), None);
        assert_eq!(extract_detail("<html>502</html>"), None);
        assert_eq!(extract_detail(""), None);
    }
}
