mod config;
mod error;
mod server;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use links_common::engine::LinkSearchEngine;
use links_common::provider::JsonDirProvider;
use server::UsefulLinksServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting useful-links MCP server");

    let config = Config::from_env()?;
    info!(
        config_dir = %config.config_dir,
        links_file = %config.links_file,
        translations = config.translations_path.is_some(),
        default_language = %config.default_language,
        "configuration loaded"
    );

    let translations = Arc::new(config.load_translations()?);
    info!(languages = ?translations.languages(), "label catalog ready");

    let provider = Arc::new(JsonDirProvider::new(config.config_dir()));
    let engine = Arc::new(
        LinkSearchEngine::new(provider, translations.clone()).with_links_path(config.links_file.clone()),
    );

    let server = UsefulLinksServer::new(engine, translations, config.default_language.clone());

    if let Ok(addr) = std::env::var("MCP_TCP_LISTEN_ADDR") {
        let listener = TcpListener::bind(&addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.clone();
            tokio::spawn(async move {
                tracing::info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                tracing::info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}
