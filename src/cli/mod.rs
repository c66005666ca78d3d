pub mod conversations;
pub mod memories;
pub mod show_config;

use anyhow::{Context, Result};
use omi_mcp::config::OmiMcpConfig;
use omi_mcp::omi::OmiClient;
use serde_json::Value;

/// Build a client for a one-shot CLI command.
fn client(config: &OmiMcpConfig) -> Result<OmiClient> {
    OmiClient::new(&config.omi).context("cannot reach Omi without credentials")
}

/// Pull the record array out of a `{ key: [...] }` payload and decode each entry.
fn records<T: serde::de::DeserializeOwned>(payload: Value, key: &str) -> Result<Vec<T>> {
    let items = match payload {
        Value::Object(mut map) => map.remove(key).unwrap_or(Value::Array(Vec::new())),
        _ => Value::Array(Vec::new()),
    };
    serde_json::from_value(items).with_context(|| format!("unexpected shape for `{key}`"))
}

fn print_json(payload: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}
