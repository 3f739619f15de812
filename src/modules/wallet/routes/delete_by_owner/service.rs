use super::types::{request, response};
use crate::{modules::wallet::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let deleted_rows = repository::delete_by_user_id(&ctx.db_conn.pool, payload.user_id)
        .await
        .map_err(|_| response::Error::FailedToDeleteWallets)?;

    if deleted_rows == 0 {
        tracing::warn!("Delete affected no rows for user_id {}", payload.user_id);
        return Err(response::Error::NoWalletsDeleted);
    }

    Ok(response::Success::WalletsDeleted(deleted_rows))
}
