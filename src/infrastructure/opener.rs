use crate::domain::ports::LinkOpener;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;
use url::Url;

/// Hands the universal link to the platform's URL handler.
pub struct SystemLinkOpener;

#[async_trait]
impl LinkOpener for SystemLinkOpener {
    async fn open(&self, url: &Url) -> bool {
        debug!(link = %url, "opening universal link");
        let status = Command::new(open_command()).arg(url.as_str()).status().await;
        matches!(status, Ok(code) if code.success())
    }
}

fn open_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Prints the link instead of launching a handler. Used when no external
/// app is installed on the host; always reports success.
pub struct PrintLinkOpener;

#[async_trait]
impl LinkOpener for PrintLinkOpener {
    async fn open(&self, url: &Url) -> bool {
        println!("{url}");
        true
    }
}
