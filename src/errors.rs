use crate::clinics::ClinicError;
use crate::users::UserError;
use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        let status = match err {
            UserError::UnknownEmail => StatusCode::NOT_FOUND,
            UserError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            UserError::DuplicateEmail => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<ClinicError> for AppError {
    fn from(err: ClinicError) -> Self {
        let status = match err {
            ClinicError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            ClinicError::LocationNotFound => StatusCode::NOT_FOUND,
            ClinicError::UnexpectedStatus(_) | ClinicError::Http(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
