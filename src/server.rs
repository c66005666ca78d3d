//! MCP server initialization for stdio and Streamable HTTP transports.
//!
//! [`serve`] picks the transport from configuration. Both paths build one
//! [`OmiClient`] up front, which validates credentials before anything is served.

use crate::config::OmiMcpConfig;
use crate::omi::OmiClient;
use crate::tools::OmiTools;
use anyhow::{bail, Result};
use rmcp::ServiceExt;
use std::sync::Arc;

/// Start the server on the configured transport (`stdio` or `http`).
pub async fn serve(config: OmiMcpConfig) -> Result<()> {
    match config.server.transport.as_str() {
        "stdio" => serve_stdio(config).await,
        "http" => serve_http(config).await,
        other => bail!("unknown transport: {other}. Supported: stdio, http"),
    }
}

fn setup_client(config: &OmiMcpConfig) -> Result<Arc<OmiClient>> {
    let client = OmiClient::new(&config.omi)?;
    tracing::info!(
        base_url = %config.omi.base_url,
        app_id = %config.omi.app_id,
        "Omi client ready"
    );
    Ok(Arc::new(client))
}

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(config: OmiMcpConfig) -> Result<()> {
    tracing::info!("starting Omi MCP server on stdio");

    let client = setup_client(&config)?;

    let tools = OmiTools::new(client);
    let transport = rmcp::transport::stdio();

    let server = tools.serve(transport).await?;
    tracing::info!("MCP server running, waiting for client");

    server.waiting().await?;
    tracing::info!("MCP server shut down");

    Ok(())
}

/// Start the MCP server over Streamable HTTP transport, mounted at `/mcp`.
pub async fn serve_http(config: OmiMcpConfig) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    tracing::info!(addr = %bind_addr, "starting Omi MCP server on HTTP");

    let client = setup_client(&config)?;

    let service = rmcp::transport::streamable_http_server::StreamableHttpService::new(
        move || Ok(OmiTools::new(client.clone())),
        rmcp::transport::streamable_http_server::session::local::LocalSessionManager::default()
            .into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "MCP server listening at http://{bind_addr}/mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("shutting down HTTP server");
        })
        .await?;

    Ok(())
}
