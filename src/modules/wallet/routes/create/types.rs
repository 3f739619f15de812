pub mod request {
    use std::borrow::Cow;

    use serde::Deserialize;
    use validator::{Validate, ValidationError};

    use crate::modules::wallet::repository::WALLET_TYPES;

    fn validate_wallet_type(wallet_type: &str) -> Result<(), ValidationError> {
        match WALLET_TYPES.contains(&wallet_type) {
            true => Ok(()),
            false => Err(
                ValidationError::new("INVALID_WALLET_TYPE").with_message(Cow::from(format!(
                    "WalletType must be one of: {}",
                    WALLET_TYPES.join(", ")
                ))),
            ),
        }
    }

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(range(
            min = 1,
            code = "INVALID_USER_ID",
            message = "UserID must be greater than 0"
        ))]
        pub user_id: i32,
        #[validate(length(
            min = 3,
            max = 255,
            code = "INVALID_USER_NAME",
            message = "UserName must be between 3 and 255 characters"
        ))]
        pub user_name: String,
        #[validate(length(
            min = 3,
            max = 255,
            code = "INVALID_WALLET_NAME",
            message = "WalletName must be between 3 and 255 characters"
        ))]
        pub wallet_name: String,
        #[validate(custom(code = "INVALID_WALLET_TYPE", function = "validate_wallet_type"))]
        pub wallet_type: String,
        #[validate(range(
            min = 500.0,
            max = 10000.0,
            code = "INVALID_BALANCE",
            message = "Balance must be greater than 0 and between 500 and 10000"
        ))]
        pub balance: f64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::wallet::repository::Wallet, utils};

    pub enum Success {
        WalletCreated(Wallet),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::WalletCreated(wallet) => {
                    (StatusCode::CREATED, Json(json!(wallet))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        DuplicatedWallets,
        WalletCreationFailed,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    utils::validation::into_response(errors).into_response()
                }
                Self::DuplicatedWallets => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Duplicated wallets" })),
                )
                    .into_response(),
                Self::WalletCreationFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Create wallet failed" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create wallet" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::{request, response};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::Validate;

    fn valid_payload() -> request::Payload {
        serde_json::from_value(json!({
            "user_id": 1,
            "user_name": "User1",
            "wallet_name": "Wallet1",
            "wallet_type": "Savings",
            "balance": 1000.0
        }))
        .unwrap()
    }

    #[test]
    fn accepts_a_valid_payload() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn aggregates_every_violated_rule() {
        let payload: request::Payload = serde_json::from_value(json!({
            "user_id": 0,
            "user_name": "ab",
            "wallet_name": "x",
            "wallet_type": "Checking",
            "balance": 100.0
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("user_id"));
        assert!(fields.contains_key("user_name"));
        assert!(fields.contains_key("wallet_name"));
        assert!(fields.contains_key("wallet_type"));
        assert!(fields.contains_key("balance"));
    }

    #[test]
    fn rejects_balance_outside_the_create_band() {
        let mut payload = valid_payload();

        payload.balance = 499.0;
        assert!(payload.validate().is_err());

        payload.balance = 10001.0;
        assert!(payload.validate().is_err());

        payload.balance = 0.0;
        assert!(payload.validate().is_err());

        payload.balance = 500.0;
        assert!(payload.validate().is_ok());

        payload.balance = 10000.0;
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn duplicate_and_store_failures_surface_as_internal() {
        assert_eq!(
            response::Error::DuplicatedWallets.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            response::Error::WalletCreationFailed
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_failure_surfaces_as_bad_request() {
        let errors = serde_json::from_value::<request::Payload>(json!({
            "user_id": 0,
            "user_name": "User1",
            "wallet_name": "Wallet1",
            "wallet_type": "Savings",
            "balance": 1000.0
        }))
        .unwrap()
        .validate()
        .unwrap_err();

        assert_eq!(
            response::Error::FailedToValidate(errors)
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
