//! Bauplan commit browser backend services.

use std::sync::Arc;

use catalog::{CatalogError, CatalogService};
use config::BackendConfig;
use thiserror::Error;

pub mod catalog;
pub mod config;

/// Service container for the browser backend.
///
/// All services are wrapped with [`Arc`].
#[derive(Debug, Clone)]
pub struct BackendServices {
	pub catalog: Arc<CatalogService>,
}

impl BackendServices {
	#[tracing::instrument(skip(config))]
	pub fn new(config: BackendConfig) -> Result<Self> {
		let catalog = CatalogService::new(&config.catalog)?;
		Ok(Self::with_catalog(catalog))
	}

	/// Builds the container around an existing [`CatalogService`].
	pub fn with_catalog(catalog: CatalogService) -> Self {
		Self {
			catalog: Arc::new(catalog),
		}
	}
}

/// Backend errors.
#[derive(Debug, Error)]
pub enum BackendError {
	#[error(transparent)]
	CatalogError(#[from] CatalogError),
}

/// A specialized [`Result`] for backend errors.
pub type Result<T, E = BackendError> = std::result::Result<T, E>;
