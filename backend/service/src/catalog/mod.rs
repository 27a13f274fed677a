//! Access to the Bauplan catalog.
//!
//! A fresh [`CatalogClient`] is built for every request by [`CatalogService::client`],
//! which asks its [`ApiKeySource`] for the key at call time.

use std::{env, error::Error as StdError, fmt::Debug};

use bauplan_browser_backend_model::{
	branch::CatalogBranch,
	commit::{CatalogCommit, CommitFilter},
};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::Result;

pub mod http;

/// Configuration for [`CatalogService`].
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogConfig {
	/// Base URL of the catalog API.
	///
	/// For example:
	/// - `https://catalog.example.com/api`
	/// - `http://127.0.0.1:9000`
	pub url: String,
	/// Name of the environment variable holding the API key.
	///
	/// The variable is read on every request, so the key can be rotated
	/// without restarting.
	#[serde(default = "default_api_key_env")]
	pub api_key_env: String,
	/// Timeout in seconds applied to every catalog request.
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs: u64,
	#[serde(default = "default_user_agent")]
	pub user_agent: String,
}

fn default_api_key_env() -> String {
	"BPLN_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
	30
}

fn default_user_agent() -> String {
	concat!("bauplan-browser/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Catalog errors.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("Bauplan API key not configured")]
	NotConfigured,
	#[error("Failed to initialize Bauplan client: {0}")]
	ClientInit(String),
	/// An error the catalog itself reported.
	///
	/// The message is passed to callers verbatim.
	#[error("{message}")]
	Declared {
		status: u16,
		code: Option<String>,
		message: String,
	},
	#[error("catalog request failed: {}", error_chain(.0))]
	Http(#[from] reqwest::Error),
	#[error("catalog responded with status {status}: {body}")]
	UnexpectedStatus { status: u16, body: String },
	#[error("invalid catalog url: {0}")]
	InvalidUrl(String),
}

impl CatalogError {
	/// Whether the catalog rejected the request with its own error.
	pub fn is_declared(&self) -> bool {
		matches!(self, Self::Declared { .. })
	}
}

/// Renders an error followed by its `source()` chain.
///
/// `reqwest` keeps the actual cause (timeouts, refused connections) in the
/// source, not in its own message.
fn error_chain(error: &dyn StdError) -> String {
	let mut message = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		let cause_message = cause.to_string();
		if !message.ends_with(&cause_message) {
			message.push_str(": ");
			message.push_str(&cause_message);
		}
		source = cause.source();
	}
	message
}

/// Read-only operations on the catalog.
pub trait CatalogClient: Send + Sync + Debug {
	/// Lists all branches in catalog order.
	fn get_branches(&self) -> BoxFuture<'_, Result<Vec<CatalogBranch>, CatalogError>>;

	/// Lists commits reachable from `reference`, filtered by the catalog.
	fn get_commits<'a>(
		&'a self,
		reference: &'a str,
		filter: &'a CommitFilter,
	) -> BoxFuture<'a, Result<Vec<CatalogCommit>, CatalogError>>;
}

pub type BoxedCatalogClient = Box<dyn CatalogClient>;

/// Builds [`CatalogClient`]s bound to an API key.
pub trait CatalogConnector: Send + Sync + Debug {
	fn connect(&self, api_key: &str) -> Result<BoxedCatalogClient, CatalogError>;
}

/// Where the catalog API key comes from.
pub trait ApiKeySource: Send + Sync + Debug {
	/// Returns the current key, if any.
	fn api_key(&self) -> Option<String>;
}

/// Reads the API key from an environment variable on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvApiKey {
	variable: String,
}

impl EnvApiKey {
	pub fn new(variable: impl Into<String>) -> Self {
		Self {
			variable: variable.into(),
		}
	}
}

impl ApiKeySource for EnvApiKey {
	fn api_key(&self) -> Option<String> {
		env::var(&self.variable).ok()
	}
}

/// Per-request catalog client factory.
#[derive(Debug)]
pub struct CatalogService {
	api_key: Box<dyn ApiKeySource>,
	connector: Box<dyn CatalogConnector>,
}

impl CatalogService {
	pub fn new(config: &CatalogConfig) -> Result<Self> {
		let connector = http::HttpCatalogConnector::new(config)?;
		Ok(Self::with_connector(
			Box::new(EnvApiKey::new(&config.api_key_env)),
			Box::new(connector),
		))
	}

	pub fn with_connector(
		api_key: Box<dyn ApiKeySource>,
		connector: Box<dyn CatalogConnector>,
	) -> Self {
		Self { api_key, connector }
	}

	/// Builds a client with the current API key.
	///
	/// A missing or empty key fails with [`CatalogError::NotConfigured`]
	/// before the connector is touched.
	pub fn client(&self) -> Result<BoxedCatalogClient, CatalogError> {
		let api_key = match self.api_key.api_key() {
			Some(key) if !key.is_empty() => key,
			_ => {
				debug!(source = ?self.api_key, "catalog api key is not set");
				return Err(CatalogError::NotConfigured);
			}
		};
		self.connector.connect(&api_key).map_err(|error| match error {
			CatalogError::ClientInit(_) => error,
			other => CatalogError::ClientInit(other.to_string()),
		})
	}
}
