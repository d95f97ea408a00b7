pub mod auth_api;
pub mod points_api;
pub mod system_api;
pub mod users_api;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::storage::{KvStore, LocalStorage, TOKEN_KEY};

/// Base path of the gateway REST API, overridable at build time.
pub const API_ENDPOINT: &str = match option_env!("XBACNET_API_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "/api",
};

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

pub(crate) fn endpoint(path: &str) -> String {
    format!("{API_ENDPOINT}{path}")
}

// The token is read from storage on every request, never cached in the
// client, so a login or forced logout in another tab takes effect on the
// very next call.
fn decorate(builder: RequestBuilder) -> RequestBuilder {
    match LocalStorage.read(TOKEN_KEY) {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

fn transport(error: gloo_net::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = decorate(Request::get(&endpoint(path)))
        .send()
        .await
        .map_err(transport)?;
    decode(admit(response).await?).await
}

pub(crate) async fn post_json<T: DeserializeOwned>(
    path: &str,
    body: &impl Serialize,
) -> Result<T, ApiError> {
    let request_body = serde_json::to_string(body).expect("Serialize should not fail");
    let response = decorate(Request::post(&endpoint(path)))
        .header("Content-Type", "application/json")
        .body(request_body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    decode(admit(response).await?).await
}

pub(crate) async fn put_json<T: DeserializeOwned>(
    path: &str,
    body: &impl Serialize,
) -> Result<T, ApiError> {
    let request_body = serde_json::to_string(body).expect("Serialize should not fail");
    let response = decorate(Request::put(&endpoint(path)))
        .header("Content-Type", "application/json")
        .body(request_body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    decode(admit(response).await?).await
}

pub(crate) async fn delete_empty(path: &str) -> Result<(), ApiError> {
    let response = decorate(Request::delete(&endpoint(path)))
        .send()
        .await
        .map_err(transport)?;
    admit(response).await.map(|_| ())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|error| ApiError::Decode(error.to_string()))
}

/// Map a non-success status to the error taxonomy. Kept pure so the
/// mapping is testable off the browser; the 401 side effects live in
/// `expire_session`.
pub(crate) fn classify(status: u16, error: Option<String>) -> ApiError {
    if status == 401 {
        ApiError::SessionExpired
    } else if status >= 500 {
        ApiError::Server(status)
    } else {
        match error {
            Some(message) => ApiError::Api(message),
            None => ApiError::Transport(format!("request failed with status {status}")),
        }
    }
}

async fn admit(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error);
    let error = classify(status, message);
    log::warn!("Api request rejected, status={status}, error={error}");
    if matches!(error, ApiError::SessionExpired) {
        expire_session();
    }
    Err(error)
}

// A 401 can arrive from any in-flight request, not only login/logout, so
// the stale credential is dropped here and the whole app is sent back to
// the login screen with a hard navigation.
fn expire_session() {
    LocalStorage.delete(TOKEN_KEY);
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_session_expired() {
        assert_eq!(classify(401, None), ApiError::SessionExpired);
        assert_eq!(
            classify(401, Some("ignored".to_string())),
            ApiError::SessionExpired
        );
    }

    #[test]
    fn server_errors_are_generic_and_not_retried() {
        assert_eq!(classify(500, None), ApiError::Server(500));
        assert_eq!(
            classify(503, Some("detail".to_string())),
            ApiError::Server(503)
        );
    }

    #[test]
    fn structured_error_message_is_surfaced() {
        assert_eq!(
            classify(404, Some("analog_input with ID 9 not found".to_string())),
            ApiError::Api("analog_input with ID 9 not found".to_string())
        );
    }

    #[test]
    fn bodiless_failure_reads_as_connectivity_problem() {
        assert!(matches!(classify(400, None), ApiError::Transport(_)));
    }

    #[test]
    fn default_endpoint_is_api_prefix() {
        assert_eq!(endpoint("/login"), format!("{API_ENDPOINT}/login"));
    }
}
