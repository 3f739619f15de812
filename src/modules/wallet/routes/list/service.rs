use super::types::{request, response};
use crate::{modules::wallet::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let wallets = match payload.filters.wallet_type {
        Some(wallet_type) => {
            repository::find_by_wallet_type(&ctx.db_conn.pool, wallet_type).await
        }
        None => repository::find_all(&ctx.db_conn.pool).await,
    }
    .map_err(|_| response::Error::FailedToFetchWallets)?;

    if wallets.is_empty() {
        return Err(response::Error::WalletsNotFound);
    }

    Ok(response::Success::Wallets(wallets))
}
