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

    /// Every field is optional: an omitted field is left untouched, while an
    /// explicit value is applied even when it is the type's zero value.
    /// Balance only has to be non-negative here, unlike the create rules.
    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(range(
            min = 1,
            code = "INVALID_USER_ID",
            message = "UserID must be greater than 0"
        ))]
        pub user_id: Option<i32>,
        #[validate(length(
            min = 3,
            max = 255,
            code = "INVALID_USER_NAME",
            message = "UserName must be between 3 and 255 characters"
        ))]
        pub user_name: Option<String>,
        #[validate(length(
            min = 3,
            max = 255,
            code = "INVALID_WALLET_NAME",
            message = "WalletName must be between 3 and 255 characters"
        ))]
        pub wallet_name: Option<String>,
        #[validate(custom(code = "INVALID_WALLET_TYPE", function = "validate_wallet_type"))]
        pub wallet_type: Option<String>,
        #[validate(range(
            min = 0.0,
            code = "INVALID_BALANCE",
            message = "Balance must be equal to or greater than 0"
        ))]
        pub balance: Option<f64>,
    }

    pub struct Payload {
        pub id: i32,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::wallet::repository::Wallet, utils};

    pub enum Success {
        WalletUpdated(Wallet),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::WalletUpdated(wallet) => {
                    (StatusCode::OK, Json(json!(wallet))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        NoFieldsToUpdate,
        WalletUnchanged,
        WalletUpdateFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    utils::validation::into_response(errors).into_response()
                }
                Self::NoFieldsToUpdate => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": "No fields to update" })),
                )
                    .into_response(),
                Self::WalletUnchanged => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": "Update wallet failed" })),
                )
                    .into_response(),
                Self::WalletUpdateFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Update wallet failed" })),
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

    #[test]
    fn omitted_fields_are_deserialized_as_unsupplied() {
        let body: request::Body = serde_json::from_value(json!({ "balance": 650.0 })).unwrap();

        assert_eq!(body.balance, Some(650.0));
        assert!(body.user_id.is_none());
        assert!(body.user_name.is_none());
        assert!(body.wallet_name.is_none());
        assert!(body.wallet_type.is_none());
        assert!(body.validate().is_ok());
    }

    #[test]
    fn accepts_a_zero_balance_unlike_create() {
        let body: request::Body = serde_json::from_value(json!({ "balance": 0.0 })).unwrap();
        assert!(body.validate().is_ok());
    }

    #[test]
    fn rejects_a_negative_balance() {
        let body: request::Body = serde_json::from_value(json!({ "balance": -1.0 })).unwrap();
        assert!(body.validate().is_err());
    }

    #[test]
    fn validates_only_supplied_fields() {
        let body: request::Body =
            serde_json::from_value(json!({ "wallet_type": "Checking" })).unwrap();

        let errors = body.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("wallet_type"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn zero_affected_rows_surface_as_unprocessable() {
        assert_eq!(
            response::Error::WalletUnchanged.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            response::Error::NoFieldsToUpdate.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            response::Error::WalletUpdateFailed.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
