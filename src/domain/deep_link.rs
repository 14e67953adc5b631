use std::collections::HashMap;
use url::Url;

/// Outcome code carried by the callback's `result` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    BadRequest,
    UserCanceled,
    SystemCanceled,
    Failed,
    Unknown,
}

impl ResultCode {
    /// The closed set of defined values; anything else is `Unknown`.
    pub fn from_query(value: &str) -> Self {
        match value {
            "success" => ResultCode::Success,
            "bad_request" => ResultCode::BadRequest,
            "user_canceled" => ResultCode::UserCanceled,
            "system_canceled" => ResultCode::SystemCanceled,
            "failed" => ResultCode::Failed,
            _ => ResultCode::Unknown,
        }
    }

    /// Canonical query value for defined codes. `Unknown` has none.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            ResultCode::Success => Some("success"),
            ResultCode::BadRequest => Some("bad_request"),
            ResultCode::UserCanceled => Some("user_canceled"),
            ResultCode::SystemCanceled => Some("system_canceled"),
            ResultCode::Failed => Some("failed"),
            ResultCode::Unknown => None,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            ResultCode::Success => "Success",
            ResultCode::BadRequest => "Bad Request",
            ResultCode::UserCanceled => "User Canceled",
            ResultCode::SystemCanceled => "System Canceled. Possibly network issues",
            ResultCode::Failed => "Card transaction failed",
            ResultCode::Unknown => "Unknown",
        }
    }
}

/// Structured outcome of a handoff, derived purely from the callback URL.
#[derive(Debug, Clone, PartialEq)]
pub struct DeepLinkResult {
    pub result_code: ResultCode,
    pub response_code: Option<String>,
    pub response_message: Option<String>,
    pub gateway_transaction_id: Option<String>,
    pub client_transaction_id: Option<String>,
}

impl DeepLinkResult {
    pub fn is_error(&self) -> bool {
        self.result_code != ResultCode::Success
    }

    /// Human-readable rendering: result line first, then one line per
    /// present field, each newline-terminated.
    pub fn render(&self) -> String {
        let mut out = format!("Result: {}\n", self.result_code.describe());
        if let Some(code) = &self.response_code {
            out.push_str(&format!("Response Code: {code}\n"));
        }
        if let Some(message) = &self.response_message {
            out.push_str(&format!("Response Message: {message}\n"));
        }
        if let Some(id) = &self.gateway_transaction_id {
            out.push_str(&format!("Gateway Transaction ID: {id}\n"));
        }
        if let Some(id) = &self.client_transaction_id {
            out.push_str(&format!("Client Transaction ID: {id}\n"));
        }
        out
    }
}

/// Parses a callback URL into a [`DeepLinkResult`].
///
/// Total: malformed or missing parameters degrade to `Unknown`/absent
/// fields. Duplicate query keys resolve last-wins.
pub fn parse_callback(url: &Url) -> DeepLinkResult {
    let mut query: HashMap<String, String> = HashMap::new();
    for (key, value) in url.query_pairs() {
        query.insert(key.into_owned(), value.into_owned());
    }

    DeepLinkResult {
        result_code: query
            .get("result")
            .map(|value| ResultCode::from_query(value))
            .unwrap_or(ResultCode::Unknown),
        response_code: query.get("responseCode").cloned(),
        response_message: query.get("responseMessage").cloned(),
        gateway_transaction_id: query.get("gatewayTransactionId").cloned(),
        client_transaction_id: query.get("clientTransactionId").cloned(),
    }
}
