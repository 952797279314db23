use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use super::dto::BalancesResult;
use super::schema::{parse_add_request, parse_delete_request, parse_edit_request};
use crate::api::{envelope, Envelope};
use crate::error::ApiResult;
use crate::main_lib::AppState;
use tallyfolio_core::balances::ManualBalance;

type BalancesResponse = Json<Envelope<BalancesResult>>;

fn respond(state: &AppState, balances: Vec<ManualBalance>) -> BalancesResponse {
    envelope(BalancesResult::valued(
        balances,
        state.price_provider.as_ref(),
    ))
}

pub async fn get_manual_balances(State(state): State<Arc<AppState>>) -> ApiResult<BalancesResponse> {
    let balances = state.balance_service.get_manual_balances()?;
    Ok(respond(&state, balances))
}

pub async fn add_manual_balances(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<BalancesResponse> {
    let Json(body) = payload?;
    let items = parse_add_request(&body)?;
    let balances = state.balance_service.add_manual_balances(items).await?;
    Ok(respond(&state, balances))
}

pub async fn edit_manual_balances(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<BalancesResponse> {
    let Json(body) = payload?;
    let updates = parse_edit_request(&body)?;
    let balances = state.balance_service.edit_manual_balances(updates).await?;
    Ok(respond(&state, balances))
}

pub async fn delete_manual_balances(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<BalancesResponse> {
    let Json(body) = payload?;
    let labels = parse_delete_request(&body)?;
    let balances = state.balance_service.remove_manual_balances(labels).await?;
    Ok(respond(&state, balances))
}
