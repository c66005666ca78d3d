//! CLI `config` command: print the resolved configuration and whether it can start.

use anyhow::Result;
use omi_mcp::config::OmiMcpConfig;
use std::path::Path;

pub fn show_config(config: &OmiMcpConfig, path: &Path) -> Result<()> {
    println!("omi-mcp configuration");
    println!("=====================");
    println!();
    println!(
        "Config file:       {}{}",
        path.display(),
        if path.exists() { "" } else { " (not found, using defaults)" }
    );
    println!();
    println!("Server:");
    println!("  Transport:       {}", config.server.transport);
    println!("  Log level:       {}", config.server.log_level);
    println!("  HTTP bind:       {}:{}", config.server.host, config.server.port);
    println!();
    println!("Omi API:");
    println!("  Base URL:        {}", config.omi.base_url);
    println!(
        "  App ID:          {}",
        if config.omi.app_id.is_empty() { "(not set)" } else { config.omi.app_id.as_str() }
    );
    println!("  API key:         {}", config.omi.api_key_display());
    match config.omi.timeout_secs {
        Some(secs) => println!("  Timeout:         {secs}s"),
        None => println!("  Timeout:         none"),
    }
    println!();
    match config.omi.validate() {
        Ok(()) => println!("Status:            OK"),
        Err(e) => println!("Status:            NOT READY ({e})"),
    }
    Ok(())
}
