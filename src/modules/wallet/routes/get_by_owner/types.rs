pub mod request {
    pub struct Payload {
        pub user_id: i32,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::wallet::repository::Wallet;

    pub enum Success {
        Wallets(Vec<Wallet>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Wallets(wallets) => (StatusCode::OK, Json(json!(wallets))).into_response(),
            }
        }
    }

    pub enum Error {
        WalletsNotFound,
        FailedToFetchWallets,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::WalletsNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Wallet not found" })),
                )
                    .into_response(),
                Self::FailedToFetchWallets => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch wallets" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
