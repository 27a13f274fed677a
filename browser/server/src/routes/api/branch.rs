use axum::Json;
use bauplan_browser_api_model::{
	ApiErrorBody,
	branch::ApiBranch,
	commit::{ApiAuthor, ApiCommit, CommitListQuery},
};
use bauplan_browser_backend_model::{
	branch::CatalogBranch,
	commit::{CatalogCommit, CommitFilter},
};
use time::format_description::well_known::Rfc3339;

use super::{
	catalog::Catalog,
	error::{ApiError, ApiResult, FetchResultExt},
	extract::{ApiPath, ApiQuery},
};

#[utoipa::path(
	get,
	path = "/api/branches",
	responses(
		(status = 200, description = "Branches in catalog order", body = [ApiBranch]),
		(status = 400, description = "Rejected by the catalog", body = ApiErrorBody),
		(status = 500, description = "Missing API key or catalog failure", body = ApiErrorBody)
	)
)]
pub async fn list_branches(Catalog(catalog): Catalog) -> ApiResult<Json<Vec<ApiBranch>>> {
	let branches = catalog.get_branches().await.or_fetch_error("branches")?;
	Ok(Json(branches.into_iter().map(into_api_branch).collect()))
}

fn into_api_branch(branch: CatalogBranch) -> ApiBranch {
	ApiBranch::from_name(branch.name)
}

#[utoipa::path(
	get,
	path = "/api/branches/{branch_id}/commits",
	params(
		("branch_id" = String, Path, description = "Branch or ref name"),
		CommitListQuery
	),
	responses(
		(status = 200, description = "Commits in catalog order", body = [ApiCommit]),
		(status = 400, description = "Rejected by the catalog", body = ApiErrorBody),
		(status = 422, description = "Malformed query parameters", body = ApiErrorBody),
		(status = 500, description = "Missing API key or catalog failure", body = ApiErrorBody)
	)
)]
pub async fn list_commits(
	ApiPath(branch_id): ApiPath<String>,
	ApiQuery(query): ApiQuery<CommitListQuery>,
	Catalog(catalog): Catalog,
) -> ApiResult<Json<Vec<ApiCommit>>> {
	let filter = CommitFilter {
		limit: query.limit,
		authored_date_start_at: query.start_date,
		authored_date_end_at: query.end_date,
		message: query.message_filter,
	};
	let commits = catalog
		.get_commits(&branch_id, &filter)
		.await
		.or_fetch_error("commits")?;

	let commits = commits
		.into_iter()
		.map(into_api_commit)
		.collect::<Result<Vec<_>, _>>()
		.map_err(|error| ApiError::fetch("commits", error))?;
	Ok(Json(commits))
}

/// Only the first author is kept.
fn into_api_commit(commit: CatalogCommit) -> Result<ApiCommit, time::error::Format> {
	let author = commit.authors.into_iter().next().map(|author| ApiAuthor {
		name: author.name,
		email: author.email,
	});
	Ok(ApiCommit {
		id: commit.reference.hash,
		message: commit.message,
		timestamp: commit.committed_date.format(&Rfc3339)?,
		branch_id: commit.reference.name,
		parent_ids: commit.parent_hashes,
		author,
	})
}

#[cfg(test)]
mod test {
	use axum::http::StatusCode;
	use bauplan_browser_backend_model::commit::CatalogActor;
	use serde_json::json;
	use time::macros::datetime;

	use super::*;
	use crate::routes::test::*;

	fn actor(name: Option<&str>, email: Option<&str>) -> CatalogActor {
		CatalogActor {
			name: name.map(str::to_string),
			email: email.map(str::to_string),
		}
	}

	#[test]
	fn test_commit_keeps_first_author_only() {
		let mut source = commit("main", "abc123", &["p1", "p2"]);
		source.authors = vec![
			actor(Some("Ada"), None),
			actor(Some("Bob"), Some("bob@example.com")),
		];
		let commit = into_api_commit(source).unwrap();
		assert_eq!(
			commit.author,
			Some(ApiAuthor {
				name: Some("Ada".to_string()),
				email: None,
			})
		);
		assert_eq!(commit.parent_ids, vec!["p1", "p2"]);
		assert_eq!(commit.timestamp, "2024-03-01T10:15:00Z");
	}

	#[test]
	fn test_commit_timestamp_keeps_offset() {
		let mut source = commit("dev", "def456", &[]);
		source.committed_date = datetime!(2024-03-01 12:15:00 +02:00);
		let commit = into_api_commit(source).unwrap();
		assert_eq!(commit.timestamp, "2024-03-01T12:15:00+02:00");
		assert_eq!(commit.branch_id, "dev");
		assert!(commit.parent_ids.is_empty());
		assert_eq!(commit.author, None);
	}

	#[tokio::test]
	async fn test_list_branches() {
		let env = TestEnv::new(Script::Branches(vec![branch("main"), branch("dev")]));
		let (status, body) = env.get("/api/branches").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(
			body,
			json!([
				{"id": "main", "name": "main", "last_commit_id": null},
				{"id": "dev", "name": "dev", "last_commit_id": null},
			])
		);
		assert_eq!(env.calls(), vec![Call::Branches]);
	}

	#[tokio::test]
	async fn test_list_branches_empty() {
		let env = TestEnv::new(Script::Branches(vec![]));
		let (status, body) = env.get("/api/branches").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, json!([]));
	}

	#[tokio::test]
	async fn test_list_branches_declared_error() {
		let env = TestEnv::new(Script::Declared("permission denied"));
		let (status, body) = env.get("/api/branches").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body, json!({"detail": "permission denied"}));
	}

	#[tokio::test]
	async fn test_list_branches_unexpected_error() {
		let env = TestEnv::new(Script::Unexpected(502, "bad gateway"));
		let (status, body) = env.get("/api/branches").await;
		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(
			body,
			json!({"detail": "Failed to fetch branches: catalog responded with status 502: bad gateway"})
		);
	}

	#[tokio::test]
	async fn test_list_commits() {
		let env = TestEnv::new(Script::Commits(vec![
			commit("main", "abc123", &["def456"]),
			commit("main", "def456", &[]),
		]));
		let (status, body) = env.get("/api/branches/main/commits?limit=2").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(
			body,
			json!([
				{
					"id": "abc123",
					"message": "commit abc123",
					"timestamp": "2024-03-01T10:15:00Z",
					"branch_id": "main",
					"parent_ids": ["def456"],
					"author": null,
				},
				{
					"id": "def456",
					"message": "commit def456",
					"timestamp": "2024-03-01T10:15:00Z",
					"branch_id": "main",
					"parent_ids": [],
					"author": null,
				},
			])
		);
		assert_eq!(
			env.calls(),
			vec![Call::Commits("main".to_string(), CommitFilter::with_limit(2))]
		);
	}

	#[tokio::test]
	async fn test_list_commits_forwards_filters() {
		let env = TestEnv::new(Script::Commits(vec![]));
		let (status, body) = env
			.get("/api/branches/dev/commits?start_date=2024-01-01&end_date=2024-02-01&message_filter=fix%20bug")
			.await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, json!([]));
		assert_eq!(
			env.calls(),
			vec![Call::Commits(
				"dev".to_string(),
				CommitFilter {
					limit: 10,
					authored_date_start_at: Some("2024-01-01".to_string()),
					authored_date_end_at: Some("2024-02-01".to_string()),
					message: Some("fix bug".to_string()),
				}
			)]
		);
	}

	#[tokio::test]
	async fn test_list_commits_passes_limit_through() {
		let env = TestEnv::new(Script::Commits(vec![]));
		env.get("/api/branches/main/commits?limit=0").await;
		env.get("/api/branches/main/commits?limit=100000").await;
		env.get("/api/branches/main/commits?limit=-1").await;
		assert_eq!(
			env.calls(),
			vec![
				Call::Commits("main".to_string(), CommitFilter::with_limit(0)),
				Call::Commits("main".to_string(), CommitFilter::with_limit(100000)),
				Call::Commits("main".to_string(), CommitFilter::with_limit(-1)),
			]
		);
	}

	#[tokio::test]
	async fn test_list_commits_rejects_malformed_limit() {
		let env = TestEnv::new(Script::Commits(vec![]));
		let (status, body) = env.get("/api/branches/main/commits?limit=ten").await;
		assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
		assert!(
			body["detail"]
				.as_str()
				.unwrap()
				.starts_with("Failed to deserialize query string")
		);
		assert!(env.calls().is_empty());
		assert_eq!(env.connects(), 0);
	}

	#[tokio::test]
	async fn test_list_commits_rejects_invalid_branch_encoding() {
		let env = TestEnv::new(Script::Commits(vec![]));
		let (status, body) = env.get("/api/branches/%FF/commits").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(
			body["detail"]
				.as_str()
				.unwrap()
				.starts_with("Invalid URL")
		);
		assert_eq!(env.connects(), 0);
	}

	#[tokio::test]
	async fn test_list_commits_declared_error() {
		let env = TestEnv::new(Script::Declared("branch not found"));
		let (status, body) = env.get("/api/branches/missing/commits").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body, json!({"detail": "branch not found"}));
	}

	#[tokio::test]
	async fn test_list_commits_unexpected_error() {
		let env = TestEnv::new(Script::Unexpected(504, "timeout"));
		let (status, body) = env.get("/api/branches/main/commits").await;
		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(
			body,
			json!({"detail": "Failed to fetch commits: catalog responded with status 504: timeout"})
		);
	}

	#[tokio::test]
	async fn test_missing_key_fails_without_catalog_call() {
		let env = TestEnv::without_key(Script::Branches(vec![branch("main")]));
		for uri in ["/api/branches", "/api/branches/main/commits"] {
			let (status, body) = env.get(uri).await;
			assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
			assert_eq!(body, json!({"detail": "Bauplan API key not configured"}));
		}
		assert_eq!(env.connects(), 0);
		assert!(env.calls().is_empty());
	}
}
