use crate::domain::deep_link::{parse_callback, DeepLinkResult};
use crate::domain::environment::{DeepLinkConfig, Environment, Environments};
use crate::domain::link::build_launch_link;
use crate::domain::ports::{LinkOpenerBox, PaymentApiBox};
use crate::domain::session::SessionRequest;
use crate::domain::validation::{validate_amount, validate_return_url, validate_store_id};
use crate::error::AppError;
use tracing::debug;
use url::Url;

/// Externally observable phase of the handoff workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Idle,
    Validating,
    ResolvingAddress,
    CreatingSession,
    LaunchingExternalApp,
    AwaitingCallback,
    Completed(DeepLinkResult),
    Failed(AppError),
}

/// One submission's worth of user input, taken as typed.
#[derive(Debug, Clone)]
pub struct SubmissionInput {
    pub amount: String,
    pub store_id: String,
    pub order_id: String,
    pub environment: Environment,
}

/// Sequences validation, address resolution, session creation, link
/// construction, and the launch boundary into the end-to-end handoff.
///
/// Precondition: at most one submission is in flight at a time. The
/// `&mut self` receivers make a second `submit` impossible while one is
/// suspended; callers polling [`HandoffWorkflow::is_loading`] across
/// tasks must not start another submission until it clears.
///
/// The cached public IP address is the only state that outlives a
/// submission: set at most once on a successful lookup and reused until
/// the process exits. A deliberate simplification, not a cache with an
/// invalidation policy.
pub struct HandoffWorkflow {
    api: PaymentApiBox,
    opener: LinkOpenerBox,
    environments: Environments,
    deep_link: DeepLinkConfig,
    ip_address: Option<String>,
    state: WorkflowState,
    result_text: String,
    is_result_error: bool,
    is_loading: bool,
}

impl HandoffWorkflow {
    pub fn new(
        api: PaymentApiBox,
        opener: LinkOpenerBox,
        environments: Environments,
        deep_link: DeepLinkConfig,
    ) -> Self {
        Self {
            api,
            opener,
            environments,
            deep_link,
            ip_address: None,
            state: WorkflowState::Idle,
            result_text: String::new(),
            is_result_error: true,
            is_loading: false,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn is_result_error(&self) -> bool {
        self.is_result_error
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Fires the best-effort IP lookup ahead of the first submission. A
    /// failure here is silent; `submit` retries the lookup itself.
    pub async fn prefetch_ip(&mut self) {
        self.fetch_ip_address().await;
    }

    /// Runs one handoff attempt to completion or failure.
    pub async fn submit(&mut self, input: &SubmissionInput) {
        self.state = WorkflowState::Validating;

        let return_url = self.deep_link.return_url();
        if !validate_return_url(&self.deep_link.scheme, &self.deep_link.host) {
            self.fail(AppError::InvalidReturnUrl);
            return;
        }
        if !validate_amount(&input.amount) {
            self.fail(AppError::InvalidAmount);
            return;
        }
        if !validate_store_id(&input.store_id) {
            self.fail(AppError::MissingStoreId);
            return;
        }

        self.is_loading = true;
        self.result_text.clear();

        // Resolve the public address once; later submissions reuse it.
        if self.ip_address.is_none() {
            self.state = WorkflowState::ResolvingAddress;
            self.fetch_ip_address().await;
        }
        let Some(ip_address) = self.ip_address.clone() else {
            self.fail(AppError::AddressUnavailable);
            return;
        };

        let config = self.environments.get(input.environment).clone();
        let request = SessionRequest {
            store_id: Some(input.store_id.clone()),
            client_ip_address: ip_address,
        };

        self.state = WorkflowState::CreatingSession;
        let sessions = match self.api.create_session(&request, &config).await {
            Ok(sessions) => sessions,
            Err(err) => {
                self.fail(err);
                return;
            }
        };
        let Some(session) = sessions.first() else {
            self.fail(AppError::EmptyServerResponse);
            return;
        };

        let link = match build_launch_link(&config, session, &input.amount, &return_url, &input.order_id)
        {
            Ok(link) => link,
            Err(err) => {
                self.fail(err);
                return;
            }
        };

        self.state = WorkflowState::LaunchingExternalApp;
        debug!(link = %link, "handing off to external app");
        if !self.opener.open(&link).await {
            self.fail(AppError::LaunchFailed);
            return;
        }

        self.state = WorkflowState::AwaitingCallback;
        self.is_loading = false;
    }

    /// Reconciles an inbound callback URL.
    ///
    /// Accepted in any state: a stale or duplicate callback still renders,
    /// unconditionally overwriting the displayed result.
    pub fn on_deep_link(&mut self, url: &Url) {
        let result = parse_callback(url);
        debug!(state = ?self.state, code = ?result.result_code, "deep link received");
        self.is_result_error = result.is_error();
        self.result_text = result.render();
        self.state = WorkflowState::Completed(result);
    }

    async fn fetch_ip_address(&mut self) {
        if let Some(ip) = self.api.fetch_external_ip().await
            && !ip.is_empty()
        {
            self.ip_address = Some(ip);
        }
    }

    fn fail(&mut self, err: AppError) {
        self.result_text = err.to_string();
        self.is_result_error = true;
        self.is_loading = false;
        self.state = WorkflowState::Failed(err);
    }
}
