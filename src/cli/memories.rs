//! CLI `memories` command: list a user's memories.

use anyhow::Result;
use omi_mcp::config::OmiMcpConfig;
use omi_mcp::omi::types::{truncate, MemoryRecord};
use omi_mcp::tools::read_memories::ReadMemoriesParams;

pub async fn memories(config: &OmiMcpConfig, params: ReadMemoriesParams, json: bool) -> Result<()> {
    let query = params.validate()?;
    let payload = super::client(config)?.read_memories(&query).await?;

    if json {
        return super::print_json(&payload);
    }

    let records: Vec<MemoryRecord> = super::records(payload, "memories")?;
    if records.is_empty() {
        println!("No memories found for {}.", query.user_id);
        return Ok(());
    }

    for mem in &records {
        let tags = if mem.tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", mem.tags.join(", "))
        };
        println!("{}  {}{}", mem.id, truncate(&mem.content, 80), tags);
    }
    println!();
    println!("{} memory(ies)", records.len());
    Ok(())
}
