use axum::{
	extract::{FromRequestParts, Path, Query},
	http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// [`Query`] with rejections reported as [`ApiError::Validation`].
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
	T: DeserializeOwned + Send,
	S: Send + Sync,
{
	type Rejection = ApiError;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		let Query(value) = Query::<T>::from_request_parts(parts, state)
			.await
			.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
		Ok(Self(value))
	}
}

/// [`Path`] with rejections rendered as JSON, keeping axum's status code.
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
	T: DeserializeOwned + Send,
	S: Send + Sync,
{
	type Rejection = ApiError;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		let Path(value) = Path::<T>::from_request_parts(parts, state)
			.await
			.map_err(|rejection| ApiError::CustomString(rejection.status(), rejection.body_text()))?;
		Ok(Self(value))
	}
}
