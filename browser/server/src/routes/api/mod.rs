use axum::{Router, routing::get};

use crate::BrowserServices;

pub(crate) mod branch;
pub mod catalog;
pub mod error;
pub mod extract;

pub fn api_router() -> Router<BrowserServices> {
	Router::new()
		.route("/branches", get(branch::list_branches))
		.route("/branches/{branch_id}/commits", get(branch::list_commits))
		.method_not_allowed_fallback(error::method_not_allowed)
}
