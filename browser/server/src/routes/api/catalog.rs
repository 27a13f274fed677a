use axum::{extract::FromRequestParts, http::request::Parts};
use bauplan_browser_backend_service::catalog::BoxedCatalogClient;

use super::error::ApiError;
use crate::BrowserServices;

/// A catalog client built for the current request.
///
/// Rejects with a server error when the API key is missing or the client
/// cannot be constructed.
pub struct Catalog(pub BoxedCatalogClient);

impl FromRequestParts<BrowserServices> for Catalog {
	type Rejection = ApiError;

	async fn from_request_parts(
		_parts: &mut Parts,
		state: &BrowserServices,
	) -> Result<Self, Self::Rejection> {
		Ok(Self(state.backend.catalog.client()?))
	}
}
