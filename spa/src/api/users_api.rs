use shared::{NewUserRequest, Page, Principal, UpdateUserRequest};

use crate::api;
use crate::error::ApiError;

pub async fn list(page: u32, page_size: u32) -> Result<Page<Principal>, ApiError> {
    api::get_json(&format!("/users?page={page}&page_size={page_size}")).await
}

#[allow(dead_code)]
pub async fn get(id: i64) -> Result<Principal, ApiError> {
    api::get_json(&format!("/users/{id}")).await
}

pub async fn create(request: &NewUserRequest) -> Result<Principal, ApiError> {
    let created = api::post_json("/users", request).await?;
    log::info!("Api create user, name={}", request.name);
    Ok(created)
}

pub async fn update(id: i64, request: &UpdateUserRequest) -> Result<Principal, ApiError> {
    let updated = api::put_json(&format!("/users/{id}"), request).await?;
    log::info!("Api update user, id={id}");
    Ok(updated)
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    api::delete_empty(&format!("/users/{id}")).await?;
    log::info!("Api delete user, id={id}");
    Ok(())
}
