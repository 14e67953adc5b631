use crate::domain::session::ApiErrorEnvelope;
use crate::error::AppError;

/// Classifies a non-2xx backend response into the error taxonomy.
///
/// Order matters: the 401 shortcut wins before the body is looked at,
/// then a decodable envelope is scanned for `unauthorized-error` in array
/// order, and only then do the server messages fall through verbatim.
pub fn map_api_error(status: u16, body: &[u8]) -> AppError {
    if status == 401 {
        return AppError::Unauthorized;
    }

    let envelope = match serde_json::from_slice::<ApiErrorEnvelope>(body) {
        Ok(envelope) if !envelope.errors.is_empty() => envelope,
        _ => return AppError::Unknown,
    };

    if envelope.errors.iter().any(|entry| entry.code == "unauthorized-error") {
        return AppError::Unauthorized;
    }

    AppError::Server(envelope.errors.into_iter().map(|entry| entry.message).collect())
}
