//! OpenAPI document and Swagger UI.

use axum::{Json, response::Html};
use bauplan_browser_api_model::{
	ApiErrorBody, ApiStatus,
	branch::ApiBranch,
	commit::{ApiAuthor, ApiCommit},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
	info(
		title = "Bauplan Commit Browser API",
		description = "API for browsing branches and commits from Bauplan"
	),
	paths(
		super::handler,
		super::api::branch::list_branches,
		super::api::branch::list_commits
	),
	components(schemas(ApiStatus, ApiBranch, ApiCommit, ApiAuthor, ApiErrorBody))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
	Json(ApiDoc::openapi())
}

pub async fn docs() -> Html<&'static str> {
	Html(
		r##"<!DOCTYPE html>
<html>
<head>
	<meta charset="utf-8">
	<title>Bauplan Commit Browser API</title>
	<link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
	<div id="swagger-ui"></div>
	<script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
	<script>
		window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
	</script>
</body>
</html>"##,
	)
}
