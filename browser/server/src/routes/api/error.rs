use std::error::Error as StdError;

use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use bauplan_browser_api_model::ApiErrorBody;
use bauplan_browser_backend_service::catalog::CatalogError;
use thiserror::Error;
use tracing::{debug, warn};

type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum ApiError {
	/// Catalog errors reported as is: declared errors become 400, the rest 500.
	#[error(transparent)]
	Catalog(#[from] CatalogError),

	/// Unexpected failure while fetching `operation`.
	#[error("Failed to fetch {operation}: {source}")]
	Fetch {
		operation: &'static str,
		source: BoxError,
	},

	#[error("{0}")]
	Validation(String),

	#[error("{1}")]
	CustomString(StatusCode, String),

	#[error("Not Found")]
	NotFound,

	#[error("Method Not Allowed")]
	MethodNotAllowed,
}

impl ApiError {
	pub fn fetch(operation: &'static str, source: impl Into<BoxError>) -> Self {
		Self::Fetch {
			operation,
			source: source.into(),
		}
	}

	pub fn status(&self) -> StatusCode {
		match self {
			ApiError::Catalog(error) if error.is_declared() => StatusCode::BAD_REQUEST,
			ApiError::Catalog(_) | ApiError::Fetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
			ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
			ApiError::CustomString(status, _) => *status,
			ApiError::NotFound => StatusCode::NOT_FOUND,
			ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let status = self.status();
		let detail = self.to_string();
		if status.is_server_error() {
			warn!(%status, error = %detail, "request failed");
		} else {
			debug!(%status, error = %detail, "request rejected");
		}
		(status, Json(ApiErrorBody { detail })).into_response()
	}
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

pub(crate) trait FetchResultExt<T> {
	/// Keeps declared catalog errors, wraps everything else as a failure to
	/// fetch `operation`.
	fn or_fetch_error(self, operation: &'static str) -> ApiResult<T>;
}

impl<T> FetchResultExt<T> for Result<T, CatalogError> {
	fn or_fetch_error(self, operation: &'static str) -> ApiResult<T> {
		self.map_err(|error| {
			if error.is_declared() {
				ApiError::Catalog(error)
			} else {
				ApiError::fetch(operation, error)
			}
		})
	}
}

pub async fn not_found() -> ApiError {
	ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
	ApiError::MethodNotAllowed
}
