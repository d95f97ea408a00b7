use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{ObjectType, Page};

use crate::api;
use crate::error::ApiError;

pub async fn list<T: DeserializeOwned>(
    object_type: ObjectType,
    page: u32,
    page_size: u32,
) -> Result<Page<T>, ApiError> {
    let path = format!("/{}?page={page}&page_size={page_size}", object_type.as_ref());
    let response = api::get_json(&path).await?;
    log::info!("Api list {}, page={page}", object_type.as_ref());
    Ok(response)
}

#[allow(dead_code)]
pub async fn get<T: DeserializeOwned>(object_type: ObjectType, id: i64) -> Result<T, ApiError> {
    api::get_json(&format!("/{}/{id}", object_type.as_ref())).await
}

#[allow(dead_code)]
pub async fn create<T: DeserializeOwned>(
    object_type: ObjectType,
    payload: &impl Serialize,
) -> Result<T, ApiError> {
    let created = api::post_json(&format!("/{}", object_type.as_ref()), payload).await?;
    log::info!("Api create {}", object_type.as_ref());
    Ok(created)
}

#[allow(dead_code)]
pub async fn update<T: DeserializeOwned>(
    object_type: ObjectType,
    id: i64,
    payload: &impl Serialize,
) -> Result<T, ApiError> {
    let updated = api::put_json(&format!("/{}/{id}", object_type.as_ref()), payload).await?;
    log::info!("Api update {}, id={id}", object_type.as_ref());
    Ok(updated)
}

pub async fn delete(object_type: ObjectType, id: i64) -> Result<(), ApiError> {
    api::delete_empty(&format!("/{}/{id}", object_type.as_ref())).await?;
    log::info!("Api delete {}, id={id}", object_type.as_ref());
    Ok(())
}
