//! Storefront entry-point: loads settings, initialises logging and serves the
//! REST API.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use ortho_config::OrthoConfig;
use storefront::config::{LogFormat, StorefrontSettings};
use storefront::inbound::http::health::HealthState;

use server::{ServerConfig, create_server};

fn init_tracing(format: LogFormat) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Plain => builder.try_init(),
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = StorefrontSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let format = settings
        .log_format()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
    init_tracing(format);

    let config = ServerConfig::from_settings(&settings)?;
    info!(addr = %config.bind_addr, seed = config.seed_fixtures, "starting storefront");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).await?;
    server.await
}
