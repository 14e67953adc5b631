use serde::{Deserialize, Serialize};

/// Body of the session-creation call. Built fresh for every submission.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    pub client_ip_address: String,
}

/// A server-issued payment session. Only `key` and `store_id` feed the
/// launch link; the remaining fields are decoded and carried as-is.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub r#type: String,
    pub merchant_id: i64,
    pub store_id: i64,
    pub payment_location_id: String,
    pub client_ip_address: String,
    pub key: String,
    pub validated: bool,
    pub payment_method: String,
}

/// Error body the backend returns on non-2xx responses.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ApiErrorEnvelope {
    pub errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ApiErrorEntry {
    pub code: String,
    pub message: String,
}
