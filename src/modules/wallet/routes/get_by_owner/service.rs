use super::types::{request, response};
use crate::{modules::wallet::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let wallets = repository::find_by_user_id(&ctx.db_conn.pool, payload.user_id)
        .await
        .map_err(|_| response::Error::FailedToFetchWallets)?;

    if wallets.is_empty() {
        return Err(response::Error::WalletsNotFound);
    }

    Ok(response::Success::Wallets(wallets))
}
