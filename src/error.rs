use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Terminal failures of a single handoff attempt.
///
/// Every variant renders as the message shown in the result pane. None of
/// these abort the process; the workflow accepts a fresh submission after
/// any of them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Invalid return URL")]
    InvalidReturnUrl,
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Store ID is required")]
    MissingStoreId,
    #[error("Failed to get IP address")]
    AddressUnavailable,
    #[error("Authorization failed. Please check your API key.")]
    Unauthorized,
    #[error("{}", .0.join("\n"))]
    Server(Vec<String>),
    #[error("Invalid API endpoint.")]
    InvalidEndpoint,
    #[error("An unexpected error occurred.")]
    Unknown,
    #[error("Unexpected server response")]
    EmptyServerResponse,
    #[error("Invalid universal link")]
    InvalidLink,
    #[error("Failed to open universal link")]
    LaunchFailed,
    #[error("{0}")]
    TransportFailure(String),
}

impl AppError {
    /// Transport-level failure, falling back to a generic message when the
    /// underlying error carries no description.
    pub fn transport(description: Option<String>) -> Self {
        Self::TransportFailure(
            description.unwrap_or_else(|| "There was an error! Please try again.".to_string()),
        )
    }
}
