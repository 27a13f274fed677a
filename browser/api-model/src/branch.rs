use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiBranch {
	/// Same as [`ApiBranch::name`]; the catalog has no separate identifier.
	pub id: String,
	pub name: String,
	/// Reserved. Always `null` for now.
	pub last_commit_id: Option<String>,
}

impl ApiBranch {
	pub fn from_name(name: String) -> Self {
		Self {
			id: name.clone(),
			name,
			last_commit_id: None,
		}
	}
}
