use async_trait::async_trait;
use reqwest::Client;

use crate::error::GatewayError;
use crate::traits::GatewayUrlResolver;

/// Default resolver: asks the REST API for the current gateway URL.
pub struct HttpGatewayResolver {
    client: Client,
    base_url: String,
    authorization: String,
}

impl HttpGatewayResolver {
    pub fn new(base_url: impl Into<String>, authorization: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            authorization: authorization.into(),
        }
    }
}

#[async_trait]
impl GatewayUrlResolver for HttpGatewayResolver {
    async fn gateway_url(&self) -> Result<String, GatewayError> {
        let url = format!("{}/gateway", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header("Authorization", &self.authorization)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(GatewayError::Server { status, body });
        }

        let body: serde_json::Value = resp.json().await?;
        body.get("url")
            .and_then(|u| u.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                GatewayError::UnexpectedResponse("gateway response missing url".to_string())
            })
    }
}
