use crate::domain::environment::EnvironmentConfig;
use crate::domain::session::{SessionRequest, SessionResponse};
use crate::error::Result;
use async_trait::async_trait;
use url::Url;

/// Boundary to the payment backend.
#[async_trait]
pub trait PaymentApi: Send + Sync {
    /// Creates a payment session. Fails loudly: any non-2xx status, decode
    /// failure, or transport error surfaces as an [`crate::error::AppError`].
    async fn create_session(
        &self,
        request: &SessionRequest,
        config: &EnvironmentConfig,
    ) -> Result<Vec<SessionResponse>>;

    /// Best-effort public IP lookup. Returns `None` on any failure rather
    /// than propagating; the workflow decides whether that is fatal.
    async fn fetch_external_ip(&self) -> Option<String>;
}

/// Boundary to the OS mechanism that routes a universal link to the
/// external app. The boolean reports whether a handler took the link.
#[async_trait]
pub trait LinkOpener: Send + Sync {
    async fn open(&self, url: &Url) -> bool;
}

pub type PaymentApiBox = Box<dyn PaymentApi>;
pub type LinkOpenerBox = Box<dyn LinkOpener>;
