use serde::{Deserialize, Serialize};

use crate::catalog::CatalogConfig;

#[derive(Debug, PartialEq, Eq, Clone, Hash, Deserialize, Serialize)]
pub struct BackendConfig {
	pub catalog: CatalogConfig,
}
