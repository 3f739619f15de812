use super::types::{request, response};
use crate::{modules::wallet::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    // The duplicate check and the insert share one transaction so two
    // identical creates cannot both pass the check.
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let criteria = repository::WalletFields {
        user_id: Some(payload.user_id),
        user_name: Some(payload.user_name.clone()),
        wallet_name: Some(payload.wallet_name.clone()),
        wallet_type: Some(payload.wallet_type.clone()),
        balance: Some(payload.balance),
    };

    let duplicates = repository::count_by_criteria(&mut *tx, &criteria)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    if duplicates > 0 {
        tracing::warn!(
            "Duplicated wallet user_id={} user_name={} wallet_name={} wallet_type={}",
            payload.user_id,
            payload.user_name,
            payload.wallet_name,
            payload.wallet_type
        );
        return Err(response::Error::DuplicatedWallets);
    }

    let wallet = repository::create(
        &mut *tx,
        repository::CreateWalletPayload {
            user_id: payload.user_id,
            user_name: payload.user_name,
            wallet_name: payload.wallet_name,
            wallet_type: payload.wallet_type,
            balance: payload.balance,
        },
    )
    .await
    .map_err(|_| response::Error::WalletCreationFailed)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::WalletCreated(wallet))
}
