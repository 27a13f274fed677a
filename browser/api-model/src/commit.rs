use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiAuthor {
	pub name: Option<String>,
	pub email: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiCommit {
	/// Commit hash.
	pub id: String,
	pub message: String,
	/// RFC 3339 timestamp of the commit.
	pub timestamp: String,
	/// Name of the ref the commit was listed under.
	pub branch_id: String,
	pub parent_ids: Vec<String>,
	/// First author of the commit, if any.
	pub author: Option<ApiAuthor>,
}

fn default_limit() -> i64 {
	10
}

/// Query parameters of the commit listing endpoint.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommitListQuery {
	/// Maximum number of commits. Forwarded to the catalog as is.
	#[serde(default = "default_limit")]
	pub limit: i64,
	/// Lower bound on the authored date, in the catalog's format.
	pub start_date: Option<String>,
	/// Upper bound on the authored date, in the catalog's format.
	pub end_date: Option<String>,
	/// Free-text filter on commit messages.
	pub message_filter: Option<String>,
}

impl Default for CommitListQuery {
	fn default() -> Self {
		Self {
			limit: default_limit(),
			start_date: None,
			end_date: None,
			message_filter: None,
		}
	}
}
