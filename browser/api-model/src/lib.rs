//! JSON shapes served by the commit browser API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod branch;
pub mod commit;

/// Body of the root endpoint.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiStatus {
	pub status: String,
	pub message: String,
}

/// Body of every error response.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorBody {
	pub detail: String,
}
