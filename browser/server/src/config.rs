use bauplan_browser_backend_service::{catalog::CatalogConfig, config::BackendConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Hash, Deserialize, Serialize)]
pub struct BrowserConfig {
	pub web: WebConfig,
	pub catalog: CatalogConfig,
}

impl TryFrom<BrowserConfig> for BackendConfig {
	type Error = anyhow::Error;

	fn try_from(config: BrowserConfig) -> Result<Self, Self::Error> {
		Ok(BackendConfig {
			catalog: config.catalog,
		})
	}
}

#[derive(Debug, PartialEq, Eq, Clone, Hash, Deserialize, Serialize)]
pub struct WebConfig {
	/// Address for the web server to listen on.
	///
	/// Examples:
	/// - `unix://browser.socket`
	/// - `tcp://127.0.0.1:8000`
	pub listen: String,
}
