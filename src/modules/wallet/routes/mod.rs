mod create;
mod delete_by_owner;
mod get_by_owner;
mod list;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(create::get_router())
        .merge(update::get_router())
        .merge(get_by_owner::get_router())
        .merge(delete_by_owner::get_router())
}
