use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::Debug;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(_: reqwest::Error) -> Self {
        provider_unavailable_error()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            4 => (StatusCode::BAD_GATEWAY, self.message.as_str()),
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            110..=119 => (StatusCode::NOT_FOUND, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn database_error<T: Debug>(_: T) -> Error {
    Error {
        code: 2,
        message: "database error".into(),
    }
}

pub fn provider_unavailable_error() -> Error {
    Error {
        code: 4,
        message: "distance provider unavailable".into(),
    }
}

pub fn empty_destination_set_error() -> Error {
    Error {
        code: 102,
        message: "empty destination set".into(),
    }
}

pub fn duplicate_place_error() -> Error {
    Error {
        code: 103,
        message: "duplicate place id in destination set".into(),
    }
}

pub fn no_route_found_error() -> Error {
    Error {
        code: 104,
        message: "no route found between destinations".into(),
    }
}

pub fn session_not_found_error() -> Error {
    Error {
        code: 110,
        message: "session not found".into(),
    }
}

pub fn place_not_found_error() -> Error {
    Error {
        code: 111,
        message: "place not found in session".into(),
    }
}

pub fn no_active_session_error() -> Error {
    Error {
        code: 112,
        message: "no incomplete session found for the user".into(),
    }
}
