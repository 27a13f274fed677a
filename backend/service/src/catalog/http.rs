//! HTTP implementation of [`CatalogClient`].

use std::time::Duration;

use bauplan_browser_backend_model::{
	branch::{CatalogBranch, CatalogBranchList},
	commit::{CatalogCommit, CatalogCommitList, CommitFilter},
};
use futures::{FutureExt, future::BoxFuture};
use reqwest::{
	Client, Request, Response,
	header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{Instrument, debug, info_span};
use url::Url;

use super::{BoxedCatalogClient, CatalogClient, CatalogConfig, CatalogConnector, CatalogError};

/// Connects to the catalog over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpCatalogConnector {
	base: Url,
	timeout: Duration,
	user_agent: String,
}

impl HttpCatalogConnector {
	pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
		let base =
			Url::parse(&config.url).map_err(|error| CatalogError::InvalidUrl(error.to_string()))?;
		if base.cannot_be_a_base() {
			return Err(CatalogError::InvalidUrl(format!(
				"{} cannot be used as a base url",
				config.url
			)));
		}
		Ok(Self {
			base,
			timeout: Duration::from_secs(config.timeout_secs),
			user_agent: config.user_agent.clone(),
		})
	}
}

impl CatalogConnector for HttpCatalogConnector {
	fn connect(&self, api_key: &str) -> Result<BoxedCatalogClient, CatalogError> {
		let mut authorization = HeaderValue::from_str(&format!("Bearer {api_key}"))
			.map_err(|error| CatalogError::ClientInit(error.to_string()))?;
		authorization.set_sensitive(true);
		let mut headers = HeaderMap::new();
		headers.insert(AUTHORIZATION, authorization);

		let http = Client::builder()
			.default_headers(headers)
			.user_agent(self.user_agent.as_str())
			.timeout(self.timeout)
			.build()
			.map_err(|error| CatalogError::ClientInit(error.to_string()))?;

		Ok(Box::new(HttpCatalogClient {
			http,
			base: self.base.clone(),
		}))
	}
}

#[derive(Debug)]
pub struct HttpCatalogClient {
	http: Client,
	base: Url,
}

impl HttpCatalogClient {
	fn endpoint<'s>(&self, segments: impl IntoIterator<Item = &'s str>) -> Result<Url, CatalogError> {
		let mut url = self.base.clone();
		url.path_segments_mut()
			.map_err(|_| CatalogError::InvalidUrl(self.base.to_string()))?
			.pop_if_empty()
			.extend(segments);
		Ok(url)
	}

	fn branches_request(&self) -> Result<Request, CatalogError> {
		let url = self.endpoint(["v0", "branches"])?;
		Ok(self.http.get(url).build()?)
	}

	fn commits_request(&self, reference: &str, filter: &CommitFilter) -> Result<Request, CatalogError> {
		let url = self.endpoint(["v0", "refs", reference, "commits"])?;
		Ok(self.http.get(url).query(filter).build()?)
	}

	async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, CatalogError> {
		debug!(url = %request.url(), "sending catalog request");
		let response = self.http.execute(request).await?;
		decode_response(response).await
	}
}

impl CatalogClient for HttpCatalogClient {
	fn get_branches(&self) -> BoxFuture<'_, Result<Vec<CatalogBranch>, CatalogError>> {
		async move {
			let request = self.branches_request()?;
			let list: CatalogBranchList = self.execute(request).await?;
			debug!(count = list.branches.len(), "fetched branches");
			Ok(list.branches)
		}
		.instrument(info_span!("get_branches"))
		.boxed()
	}

	fn get_commits<'a>(
		&'a self,
		reference: &'a str,
		filter: &'a CommitFilter,
	) -> BoxFuture<'a, Result<Vec<CatalogCommit>, CatalogError>> {
		async move {
			let request = self.commits_request(reference, filter)?;
			let list: CatalogCommitList = self.execute(request).await?;
			debug!(count = list.commits.len(), "fetched commits");
			Ok(list.commits)
		}
		.instrument(info_span!("get_commits", reference, limit = filter.limit))
		.boxed()
	}
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
	let status = response.status();
	if status.is_success() {
		return Ok(response.json::<T>().await?);
	}
	let body = response.text().await?;
	Err(decode_error(status.as_u16(), &body))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorEnvelope {
	Nested { error: ErrorDetail },
	Flat(ErrorDetail),
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
	message: String,
	#[serde(default)]
	code: Option<String>,
}

/// Classifies a non-success response body.
///
/// Bodies in the catalog's error envelope become [`CatalogError::Declared`],
/// anything else is reported as an unexpected status.
fn decode_error(status: u16, body: &str) -> CatalogError {
	match serde_json::from_str::<ErrorEnvelope>(body) {
		Ok(ErrorEnvelope::Nested { error: detail } | ErrorEnvelope::Flat(detail)) => {
			CatalogError::Declared {
				status,
				code: detail.code,
				message: detail.message,
			}
		}
		Err(_) => CatalogError::UnexpectedStatus {
			status,
			body: body.to_string(),
		},
	}
}
