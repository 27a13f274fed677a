use anyhow::Result;
use axum::{Json, Router, routing::get};
use bauplan_browser_api_model::ApiStatus;
use tower_http::{
	cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
	trace::TraceLayer,
};

use crate::BrowserServices;

pub mod api;
pub mod openapi;


pub fn make_router(services: BrowserServices) -> Result<Router> {
	// credentials are allowed, so wildcards must be mirrored instead of `*`
	let cors = CorsLayer::new()
		.allow_origin(AllowOrigin::mirror_request())
		.allow_methods(AllowMethods::mirror_request())
		.allow_headers(AllowHeaders::mirror_request())
		.allow_credentials(true);

	let router = Router::new()
		.route("/", get(handler))
		.route("/openapi.json", get(openapi::openapi_json))
		.route("/docs", get(openapi::docs))
		.nest("/api", api::api_router())
		.fallback(api::error::not_found)
		.method_not_allowed_fallback(api::error::method_not_allowed)
		.layer(cors)
		.layer(TraceLayer::new_for_http())
		.with_state(services);

	Ok(router)
}

#[utoipa::path(
	get,
	path = "/",
	responses((status = 200, description = "Service is up", body = ApiStatus))
)]
async fn handler() -> Json<ApiStatus> {
	Json(ApiStatus {
		status: "ok".to_string(),
		message: "Bauplan Commit Browser API".to_string(),
	})
}
