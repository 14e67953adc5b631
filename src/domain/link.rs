use crate::domain::environment::EnvironmentConfig;
use crate::domain::session::SessionResponse;
use crate::error::{AppError, Result};
use url::Url;

/// Assembles the universal link that launches the external Tap-to-Pay app.
///
/// Query parameter order is fixed (`paymentSessionId`, `storeId`,
/// `amount`, `returnUrl`, then `orderId` when present) and the amount is
/// carried exactly as the user typed it.
pub fn build_launch_link(
    config: &EnvironmentConfig,
    session: &SessionResponse,
    amount: &str,
    return_url: &str,
    order_id: &str,
) -> Result<Url> {
    let mut link = format!(
        "{}?paymentSessionId={}&storeId={}&amount={}&returnUrl={}",
        config.universal_link_base, session.key, session.store_id, amount, return_url
    );
    if !order_id.is_empty() {
        link.push_str("&orderId=");
        link.push_str(order_id);
    }
    Url::parse(&link).map_err(|_| AppError::InvalidLink)
}
