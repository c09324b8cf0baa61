use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION},
    Method,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::error::RpcError;

#[derive(Debug, Deserialize)]
struct Envelope {
    result: EnvelopeResult,
}

#[derive(Debug, Deserialize)]
struct EnvelopeResult {
    #[serde(default)]
    data: Value,
}

#[derive(Clone)]
pub struct ClinicRpcClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ClinicRpcClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.rpc_base_url.trim_end_matches('/').to_string(),
            api_key: config.rpc_api_key.clone(),
        }
    }

    fn get_headers(&self, auth_token: Option<&str>) -> Result<HeaderMap, RpcError> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if !self.api_key.is_empty() {
            let value = HeaderValue::from_str(&self.api_key)
                .map_err(|_| RpcError::InvalidHeader("x-api-key".to_string()))?;
            headers.insert("x-api-key", value);
        }

        if let Some(token) = auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| RpcError::InvalidHeader("authorization".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Run a read-only procedure.
    pub async fn query<T>(&self, procedure: &str, auth_token: Option<&str>) -> Result<T, RpcError>
    where
        T: DeserializeOwned,
    {
        self.call(Method::GET, procedure, auth_token, None).await
    }

    /// Run a state-changing procedure with a JSON input.
    pub async fn mutate<I, T>(
        &self,
        procedure: &str,
        auth_token: Option<&str>,
        input: &I,
    ) -> Result<T, RpcError>
    where
        I: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(input).map_err(|e| RpcError::Decode(e.to_string()))?;
        self.call(Method::POST, procedure, auth_token, Some(body)).await
    }

    async fn call<T>(
        &self,
        method: Method,
        procedure: &str,
        auth_token: Option<&str>,
        body: Option<Value>,
    ) -> Result<T, RpcError>
    where
        T: DeserializeOwned,
    {
        if self.base_url.is_empty() {
            return Err(RpcError::NotConfigured);
        }

        let url = format!("{}/trpc/{}", self.base_url, procedure);
        debug!("Calling {} {}", method, url);

        let headers = self.get_headers(auth_token)?;

        let mut req = self.client.request(method, &url).headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Procedure {} failed ({}): {}", procedure, status, error_text);

            return Err(RpcError::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let envelope = response
            .json::<Envelope>()
            .await
            .map_err(|e| RpcError::Decode(format!("{}: {}", procedure, e)))?;

        serde_json::from_value(envelope.result.data)
            .map_err(|e| RpcError::Decode(format!("{}: {}", procedure, e)))
    }
}
