use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::api::{envelope, Envelope};
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use tallyfolio_core::tags::{NewTag, Tag};

type TagsResponse = Json<Envelope<Vec<Tag>>>;

#[derive(Debug, Deserialize)]
struct DeleteTagRequest {
    name: String,
}

fn decode<T: serde::de::DeserializeOwned>(body: Value) -> ApiResult<T> {
    serde_json::from_value(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

async fn get_tags(State(state): State<Arc<AppState>>) -> ApiResult<TagsResponse> {
    let tags = state.tag_service.get_tags()?;
    Ok(envelope(tags))
}

async fn add_tag(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<TagsResponse> {
    let Json(body) = payload?;
    let new_tag: NewTag = decode(body)?;
    let tags = state.tag_service.add_tag(new_tag).await?;
    Ok(envelope(tags))
}

/// Balances still carrying the tag keep it.
async fn delete_tag(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<TagsResponse> {
    let Json(body) = payload?;
    let request: DeleteTagRequest = decode(body)?;
    let tags = state.tag_service.delete_tag(&request.name).await?;
    Ok(envelope(tags))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/tags", get(get_tags).put(add_tag).delete(delete_tag))
}
