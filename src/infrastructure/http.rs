use crate::domain::environment::EnvironmentConfig;
use crate::domain::ports::PaymentApi;
use crate::domain::session::{SessionRequest, SessionResponse};
use crate::error::{AppError, Result};
use crate::infrastructure::device::DeviceInfo;
use crate::infrastructure::error_map::map_api_error;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

const IP_LOOKUP_ENDPOINT: &str = "https://api.ipify.org?format=json";

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    ip: String,
}

/// `reqwest`-backed implementation of the [`PaymentApi`] boundary.
pub struct HttpPaymentApi {
    client: reqwest::Client,
    device: DeviceInfo,
}

impl HttpPaymentApi {
    pub fn new(device: DeviceInfo) -> Self {
        Self {
            client: reqwest::Client::new(),
            device,
        }
    }
}

#[async_trait]
impl PaymentApi for HttpPaymentApi {
    async fn create_session(
        &self,
        request: &SessionRequest,
        config: &EnvironmentConfig,
    ) -> Result<Vec<SessionResponse>> {
        let endpoint = Url::parse(&config.api_endpoint).map_err(|_| AppError::InvalidEndpoint)?;

        let mut outbound = self
            .client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("client {}", config.api_key))
            .header("Source", "ExternalApp")
            .header("Device-OS", self.device.os.as_str())
            .header("Correlation-ID", Uuid::new_v4().to_string())
            .header("Device-Model", self.device.model.as_str())
            .header("Device-OS-Version", self.device.os_version.as_str())
            .json(request);
        if let Some(identifier) = &self.device.identifier {
            outbound = outbound.header("Device-Identifier", identifier.as_str());
        }

        debug!(endpoint = %config.api_endpoint, "creating payment session");

        let response = outbound
            .send()
            .await
            .map_err(|err| AppError::transport(Some(err.to_string())))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| AppError::transport(Some(err.to_string())))?;

        if status.is_success() {
            serde_json::from_slice::<Vec<SessionResponse>>(&body)
                .map_err(|err| AppError::transport(Some(err.to_string())))
        } else {
            Err(map_api_error(status.as_u16(), &body))
        }
    }

    async fn fetch_external_ip(&self) -> Option<String> {
        let response = match self.client.get(IP_LOOKUP_ENDPOINT).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "public IP lookup failed");
                return None;
            }
        };

        match response.json::<IpLookupResponse>().await {
            Ok(body) => {
                debug!(ip = %body.ip, "resolved public IP address");
                Some(body.ip)
            }
            Err(err) => {
                warn!(error = %err, "public IP lookup returned an unreadable body");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_lookup_response_decoding() {
        let body: IpLookupResponse = serde_json::from_str(r#"{"ip":"203.0.113.7"}"#).unwrap();
        assert_eq!(body.ip, "203.0.113.7");
    }

    #[test]
    fn test_unparseable_endpoint_detected_before_io() {
        assert!(Url::parse("not a url").is_err());
    }
}
