use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A resolved reference: the name a commit was looked up under and its hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogRef {
	pub name: String,
	pub hash: String,
}

/// Author or committer of a commit.
///
/// The catalog may omit either field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CatalogActor {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCommit {
	#[serde(rename = "ref")]
	pub reference: CatalogRef,
	pub message: String,
	#[serde(default)]
	pub authors: Vec<CatalogActor>,
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub authored_date: Option<OffsetDateTime>,
	#[serde(with = "time::serde::rfc3339")]
	pub committed_date: OffsetDateTime,
	/// Parent hashes in catalog order. Empty for root commits.
	#[serde(default)]
	pub parent_hashes: Vec<String>,
}

/// Envelope of the commit listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCommitList {
	pub commits: Vec<CatalogCommit>,
}

/// Server-side filters for commit listing.
///
/// Serializes into the catalog's query parameters. Values are passed through
/// untouched; the catalog decides their format and matching rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitFilter {
	pub limit: i64,
	#[serde(
		rename = "filter_by_authored_date_start_at",
		skip_serializing_if = "Option::is_none"
	)]
	pub authored_date_start_at: Option<String>,
	#[serde(
		rename = "filter_by_authored_date_end_at",
		skip_serializing_if = "Option::is_none"
	)]
	pub authored_date_end_at: Option<String>,
	#[serde(rename = "filter_by_message", skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

impl CommitFilter {
	pub fn with_limit(limit: i64) -> Self {
		Self {
			limit,
			authored_date_start_at: None,
			authored_date_end_at: None,
			message: None,
		}
	}
}
