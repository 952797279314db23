mod dto;
mod handlers;
mod schema;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::main_lib::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/balances/manual",
        get(handlers::get_manual_balances)
            .put(handlers::add_manual_balances)
            .patch(handlers::edit_manual_balances)
            .delete(handlers::delete_manual_balances),
    )
}
