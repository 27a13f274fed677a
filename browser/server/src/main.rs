use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Result, bail};
use bauplan_browser_backend_service::BackendServices;
use clap::Parser;
use config::BrowserConfig;
use tokio::net::{TcpListener, UnixListener};
use tracing::{Level, info};

mod config;
mod routes;

#[derive(clap::Parser)]
struct Args {
	#[arg(short, long, default_value = "browser.toml")]
	config: PathBuf,
	#[arg(long, env = "BROWSER_LOG_LEVEL", default_value_t = Level::INFO)]
	log_level: Level,
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(args.log_level)
			.finish(),
	)?;

	if let Ok(path) = dotenv::dotenv() {
		info!("loaded environment from file: {:?}", path);
	}

	let config_path = &args.config;
	let config = toml::from_str::<BrowserConfig>(&fs::read_to_string(config_path)?)?;
	info!("loaded configuration from file: {:?}", config_path);

	info!("initializing backend services ...");
	let backend_services = BackendServices::new(config.clone().try_into()?)?;
	info!("initialized backend services");

	let services = BrowserServices {
		config: Arc::new(config),
		backend: backend_services,
	};

	let listen_addr = services.config.web.listen.clone();
	let router = routes::make_router(services)?;
	if let Some(path) = listen_addr.strip_prefix("unix://") {
		let path = PathBuf::from(path);
		_ = fs::remove_file(&path);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)?;
		}

		let listener = UnixListener::bind(&path)?;
		info!("listening on UDS: {:?}", path);
		axum::serve(listener, router).await?;
	} else if let Some(addr) = listen_addr.strip_prefix("tcp://") {
		let listener = TcpListener::bind(addr).await?;
		info!("listening on TCP {}", listener.local_addr()?);
		axum::serve(listener, router).await?;
	} else {
		bail!("unsupported web.listen schema")
	}

	Ok(())
}

#[derive(Debug, Clone)]
pub struct BrowserServices {
	pub config: Arc<BrowserConfig>,
	pub backend: BackendServices,
}
