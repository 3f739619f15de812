use super::types::{request, response};
use crate::{modules::wallet::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let changes = repository::WalletFields {
        user_id: payload.body.user_id,
        user_name: payload.body.user_name,
        wallet_name: payload.body.wallet_name,
        wallet_type: payload.body.wallet_type,
        balance: payload.body.balance,
    };

    let updated_rows = repository::update_by_id(&ctx.db_conn.pool, payload.id, &changes)
        .await
        .map_err(|err| match err {
            repository::Error::NoUpdatableFields => response::Error::NoFieldsToUpdate,
            _ => response::Error::WalletUpdateFailed,
        })?;

    if updated_rows == 0 {
        tracing::warn!("Update affected no rows for wallet id {}", payload.id);
        return Err(response::Error::WalletUnchanged);
    }

    repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::WalletUpdateFailed)?
        .ok_or(response::Error::WalletUpdateFailed)
        .map(response::Success::WalletUpdated)
}
