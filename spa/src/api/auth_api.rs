use gloo_net::http::Request;
use shared::{Acknowledgement, LoginResponse, LogoutRequest};

use crate::api::{self, endpoint};
use crate::error::ApiError;

/// Sign in against the gateway. A 401 here is a rejected credential, not
/// an expired session, so the body (which carries `success:false` and the
/// reason) is returned to the caller instead of going through the
/// forced-logout path.
pub async fn login(name: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = serde_json::json!({ "name": name, "password": password });
    let request_body = serde_json::to_string(&body).expect("Serialize should not fail");
    let response = Request::post(&endpoint("/login"))
        .header("Content-Type", "application/json")
        .body(request_body)
        .map_err(|error| ApiError::Transport(error.to_string()))?
        .send()
        .await
        .map_err(|error| ApiError::Transport(error.to_string()))?;
    log::info!("Api login, name={name}");
    match response.status() {
        200 | 401 => response
            .json::<LoginResponse>()
            .await
            .map_err(|error| ApiError::Decode(error.to_string())),
        status if status >= 500 => Err(ApiError::Server(status)),
        status => {
            let response_body = response.text().await.unwrap_or_default();
            log::warn!("Api login, unexpected response, status={status}, response={response_body}");
            Err(ApiError::Auth("Login failed".to_string()))
        }
    }
}

pub async fn logout(user_id: i64) -> Result<Acknowledgement, ApiError> {
    let response = api::post_json::<Acknowledgement>("/logout", &LogoutRequest { user_id }).await?;
    log::info!("Api logout, user_id={user_id}");
    Ok(response)
}
