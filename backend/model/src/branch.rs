use serde::{Deserialize, Serialize};

/// A branch as listed by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogBranch {
	pub name: String,
	/// Hash of the branch head, when the catalog reports one.
	#[serde(default)]
	pub hash: Option<String>,
}

/// Envelope of the branch listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogBranchList {
	pub branches: Vec<CatalogBranch>,
}
