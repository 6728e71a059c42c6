use std::env;

use anyhow::Result;
use log::info;
use tokio::net::TcpListener;

use kenny_site::cli;
use kenny_site::server::{self, SiteConfig};

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "kenny_site=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {err}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let args = cli::parse(env::args().skip(1).collect());

    let router = server::router(SiteConfig {
        root: args.site_root,
    });

    let listener = TcpListener::bind(args.address).await?;
    info!("listening at http://{}", args.address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
