use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tap_handoff::application::workflow::{HandoffWorkflow, SubmissionInput, WorkflowState};
use tap_handoff::domain::environment::{
    DeepLinkConfig, Environment, EnvironmentConfig, Environments,
};
use tap_handoff::domain::ports::{LinkOpener, PaymentApi};
use tap_handoff::domain::session::{SessionRequest, SessionResponse};
use tap_handoff::error::Result;
use url::Url;

struct RecordingApi {
    last_request: Arc<Mutex<Option<SessionRequest>>>,
    response: Vec<SessionResponse>,
}

#[async_trait]
impl PaymentApi for RecordingApi {
    async fn create_session(
        &self,
        request: &SessionRequest,
        _config: &EnvironmentConfig,
    ) -> Result<Vec<SessionResponse>> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        Ok(self.response.clone())
    }

    async fn fetch_external_ip(&self) -> Option<String> {
        Some("203.0.113.7".to_string())
    }
}

struct RecordingOpener {
    last_link: Arc<Mutex<Option<Url>>>,
}

#[async_trait]
impl LinkOpener for RecordingOpener {
    async fn open(&self, url: &Url) -> bool {
        *self.last_link.lock().unwrap() = Some(url.clone());
        true
    }
}

fn session_response() -> SessionResponse {
    SessionResponse {
        r#type: "tap-to-pay".to_string(),
        merchant_id: 12,
        store_id: 5,
        payment_location_id: "loc-1".to_string(),
        client_ip_address: "203.0.113.7".to_string(),
        key: "abc".to_string(),
        validated: true,
        payment_method: "card".to_string(),
    }
}

#[tokio::test]
async fn test_full_handoff_through_trait_objects() {
    let last_request = Arc::new(Mutex::new(None));
    let last_link = Arc::new(Mutex::new(None));

    let api = RecordingApi {
        last_request: last_request.clone(),
        response: vec![session_response()],
    };
    let opener = RecordingOpener {
        last_link: last_link.clone(),
    };

    let mut workflow = HandoffWorkflow::new(
        Box::new(api),
        Box::new(opener),
        Environments::from_env(),
        DeepLinkConfig {
            scheme: "app".to_string(),
            host: "host".to_string(),
        },
    );

    // Verify Send by driving the workflow inside a spawned task.
    let handle = tokio::spawn(async move {
        let input = SubmissionInput {
            amount: "10.00".to_string(),
            store_id: "42".to_string(),
            order_id: "99".to_string(),
            environment: Environment::Development,
        };
        workflow.submit(&input).await;
        workflow
    });
    let workflow = handle.await.unwrap();

    assert_eq!(workflow.state(), &WorkflowState::AwaitingCallback);

    let request = last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request.store_id.as_deref(), Some("42"));
    assert_eq!(request.client_ip_address, "203.0.113.7");

    let link = last_link.lock().unwrap().clone().unwrap();
    assert_eq!(
        link.as_str(),
        "https://dev-mobile.cardfree.net/pay/tap-to-pay?paymentSessionId=abc&storeId=5&amount=10.00&returnUrl=app://host&orderId=99"
    );
}

#[tokio::test]
async fn test_callback_reconciles_after_handoff() {
    let api = RecordingApi {
        last_request: Arc::new(Mutex::new(None)),
        response: vec![session_response()],
    };
    let opener = RecordingOpener {
        last_link: Arc::new(Mutex::new(None)),
    };

    let mut workflow = HandoffWorkflow::new(
        Box::new(api),
        Box::new(opener),
        Environments::from_env(),
        DeepLinkConfig {
            scheme: "app".to_string(),
            host: "host".to_string(),
        },
    );

    let input = SubmissionInput {
        amount: "10.00".to_string(),
        store_id: "42".to_string(),
        order_id: String::new(),
        environment: Environment::Uat,
    };
    workflow.submit(&input).await;
    assert_eq!(workflow.state(), &WorkflowState::AwaitingCallback);

    let callback =
        Url::parse("app://host?result=failed&responseCode=05&responseMessage=Declined").unwrap();
    workflow.on_deep_link(&callback);

    assert!(workflow.is_result_error());
    assert_eq!(
        workflow.result_text(),
        "Result: Card transaction failed\nResponse Code: 05\nResponse Message: Declined\n"
    );
}
