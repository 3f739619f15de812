use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, Postgres, QueryBuilder};

type Result<T> = std::result::Result<T, Error>;

pub const WALLET_TYPES: [&str; 3] = ["Savings", "Credit Card", "Crypto Wallet"];

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Wallet {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub wallet_name: String,
    pub wallet_type: String,
    pub balance: f64,
    pub created_at: NaiveDateTime,
}

pub struct CreateWalletPayload {
    pub user_id: i32,
    pub user_name: String,
    pub wallet_name: String,
    pub wallet_type: String,
    pub balance: f64,
}

/// Partially-populated wallet fields, used both as match criteria and as an
/// update changeset. `None` means "not supplied" and is skipped by the
/// clause builders, so `Some(0.0)` remains an expressible balance.
#[derive(Clone, Debug, Default)]
pub struct WalletFields {
    pub user_id: Option<i32>,
    pub user_name: Option<String>,
    pub wallet_name: Option<String>,
    pub wallet_type: Option<String>,
    pub balance: Option<f64>,
}

enum Bind {
    Int(i32),
    Text(String),
    Float(f64),
}

impl WalletFields {
    // The field -> column mapping, in declared column order.
    fn entries(&self) -> Vec<(&'static str, Bind)> {
        let mut entries = Vec::new();
        if let Some(user_id) = self.user_id {
            entries.push(("user_id", Bind::Int(user_id)));
        }
        if let Some(user_name) = &self.user_name {
            entries.push(("user_name", Bind::Text(user_name.clone())));
        }
        if let Some(wallet_name) = &self.wallet_name {
            entries.push(("wallet_name", Bind::Text(wallet_name.clone())));
        }
        if let Some(wallet_type) = &self.wallet_type {
            entries.push(("wallet_type", Bind::Text(wallet_type.clone())));
        }
        if let Some(balance) = self.balance {
            entries.push(("balance", Bind::Float(balance)));
        }
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

fn push_clauses(qb: &mut QueryBuilder<'_, Postgres>, fields: &WalletFields, separator: &str) {
    let mut clauses = qb.separated(separator);
    for (column, value) in fields.entries() {
        clauses.push(column);
        clauses.push_unseparated(" = ");
        match value {
            Bind::Int(v) => clauses.push_bind_unseparated(v),
            Bind::Text(v) => clauses.push_bind_unseparated(v),
            Bind::Float(v) => clauses.push_bind_unseparated(v),
        };
    }
}

fn push_criteria(qb: &mut QueryBuilder<'_, Postgres>, criteria: &WalletFields) {
    push_clauses(qb, criteria, " AND ");
}

fn push_assignments(qb: &mut QueryBuilder<'_, Postgres>, changes: &WalletFields) {
    push_clauses(qb, changes, ", ");
}

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    EmptyCriteria,
    NoUpdatableFields,
}

pub async fn find_all<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Wallet>> {
    sqlx::query_as::<_, Wallet>("SELECT * FROM wallets")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch all wallets: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_wallet_type<'e, E: PgExecutor<'e>>(
    e: E,
    wallet_type: String,
) -> Result<Vec<Wallet>> {
    sqlx::query_as::<_, Wallet>("SELECT * FROM wallets WHERE wallet_type = $1")
        .bind(wallet_type.clone())
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch wallets by wallet_type {}: {}",
                wallet_type,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_user_id<'e, E: PgExecutor<'e>>(e: E, user_id: i32) -> Result<Vec<Wallet>> {
    sqlx::query_as::<_, Wallet>("SELECT * FROM wallets WHERE user_id = $1")
        .bind(user_id)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch wallets by user_id {}: {}",
                user_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<Option<Wallet>> {
    sqlx::query_as::<_, Wallet>("SELECT * FROM wallets WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch a wallet by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateWalletPayload) -> Result<Wallet> {
    sqlx::query_as::<_, Wallet>(
        "
        INSERT INTO wallets (user_id, user_name, wallet_name, wallet_type, balance)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(payload.user_id)
    .bind(payload.user_name)
    .bind(payload.wallet_name)
    .bind(payload.wallet_type)
    .bind(payload.balance)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a wallet: {}", err);
        Error::UnexpectedError
    })
}

/// Counts the rows matching every supplied field of `criteria`. An empty
/// criteria is rejected rather than counting the entire table.
pub async fn count_by_criteria<'e, E: PgExecutor<'e>>(
    e: E,
    criteria: &WalletFields,
) -> Result<i64> {
    if criteria.is_empty() {
        return Err(Error::EmptyCriteria);
    }

    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT count(id) FROM wallets WHERE ");
    push_criteria(&mut qb, criteria);

    qb.build_query_scalar::<i64>()
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to count wallets by criteria: {}",
                err
            );
            Error::UnexpectedError
        })
}

/// Returns the number of rows removed; 0 means nothing matched.
pub async fn delete_by_user_id<'e, E: PgExecutor<'e>>(e: E, user_id: i32) -> Result<u64> {
    sqlx::query("DELETE FROM wallets WHERE user_id = $1")
        .bind(user_id)
        .execute(e)
        .await
        .map(|res| res.rows_affected())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete wallets by user_id {}: {}",
                user_id,
                err
            );
            Error::UnexpectedError
        })
}

/// Applies the supplied fields of `changes` to the row with the given id and
/// returns the number of rows affected; 0 means no such row.
pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
    changes: &WalletFields,
) -> Result<u64> {
    if changes.is_empty() {
        return Err(Error::NoUpdatableFields);
    }

    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE wallets SET ");
    push_assignments(&mut qb, changes);
    qb.push(" WHERE id = ");
    qb.push_bind(id);

    qb.build()
        .execute(e)
        .await
        .map(|res| res.rows_affected())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update a wallet by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_fields() -> WalletFields {
        WalletFields {
            user_id: Some(1),
            user_name: Some("User1".to_string()),
            wallet_name: Some("Wallet1".to_string()),
            wallet_type: Some("Savings".to_string()),
            balance: Some(1000.0),
        }
    }

    #[test]
    fn criteria_includes_supplied_fields_in_column_order() {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT count(id) FROM wallets WHERE ");
        push_criteria(&mut qb, &full_fields());

        assert_eq!(
            qb.sql(),
            "SELECT count(id) FROM wallets WHERE user_id = $1 AND user_name = $2 \
             AND wallet_name = $3 AND wallet_type = $4 AND balance = $5"
        );
    }

    #[test]
    fn criteria_skips_unsupplied_fields() {
        let criteria = WalletFields {
            user_id: Some(1),
            balance: Some(650.0),
            ..Default::default()
        };

        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT count(id) FROM wallets WHERE ");
        push_criteria(&mut qb, &criteria);

        assert_eq!(
            qb.sql(),
            "SELECT count(id) FROM wallets WHERE user_id = $1 AND balance = $2"
        );
    }

    #[test]
    fn zero_valued_fields_are_still_expressible() {
        let changes = WalletFields {
            balance: Some(0.0),
            ..Default::default()
        };

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE wallets SET ");
        push_assignments(&mut qb, &changes);

        assert_eq!(qb.sql(), "UPDATE wallets SET balance = $1");
    }

    #[test]
    fn assignments_join_with_commas() {
        let changes = WalletFields {
            wallet_name: Some("Renamed".to_string()),
            balance: Some(650.0),
            ..Default::default()
        };

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE wallets SET ");
        push_assignments(&mut qb, &changes);
        qb.push(" WHERE id = ");
        qb.push_bind(123);

        assert_eq!(
            qb.sql(),
            "UPDATE wallets SET wallet_name = $1, balance = $2 WHERE id = $3"
        );
    }

    #[test]
    fn empty_fields_are_reported_empty() {
        assert!(WalletFields::default().is_empty());
        assert!(!full_fields().is_empty());
    }

    // connect_lazy never opens a connection, so the guard paths below are
    // exercised without a running database.
    fn lazy_pool() -> sqlx::PgPool {
        sqlx::PgPool::connect_lazy("postgres://localhost/wallets").unwrap()
    }

    #[tokio::test]
    async fn update_with_no_supplied_fields_is_rejected() {
        let err = update_by_id(&lazy_pool(), 1, &WalletFields::default())
            .await
            .unwrap_err();
        assert_eq!(err, Error::NoUpdatableFields);
    }

    #[tokio::test]
    async fn counting_with_an_empty_criteria_is_rejected() {
        let err = count_by_criteria(&lazy_pool(), &WalletFields::default())
            .await
            .unwrap_err();
        assert_eq!(err, Error::EmptyCriteria);
    }
}
