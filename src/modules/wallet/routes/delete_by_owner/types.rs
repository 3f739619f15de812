pub mod request {
    pub struct Payload {
        pub user_id: i32,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        WalletsDeleted(u64),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::WalletsDeleted(deleted_rows) => {
                    (StatusCode::OK, Json(json!(deleted_rows))).into_response()
                }
            }
        }
    }

    pub enum Error {
        NoWalletsDeleted,
        FailedToDeleteWallets,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NoWalletsDeleted => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": "Delete wallet failed" })),
                )
                    .into_response(),
                Self::FailedToDeleteWallets => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Delete wallet failed" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::response;
    use axum::{http::StatusCode, response::IntoResponse};

    #[test]
    fn deleting_nothing_surfaces_as_unprocessable() {
        assert_eq!(
            response::Error::NoWalletsDeleted.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn responds_with_the_deleted_row_count() {
        assert_eq!(
            response::Success::WalletsDeleted(2).into_response().status(),
            StatusCode::OK
        );
    }
}
