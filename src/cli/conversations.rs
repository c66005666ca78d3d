//! CLI `conversations` command: list a user's conversations.

use anyhow::Result;
use omi_mcp::config::OmiMcpConfig;
use omi_mcp::omi::types::ConversationRecord;
use omi_mcp::tools::read_conversations::ReadConversationsParams;

pub async fn conversations(
    config: &OmiMcpConfig,
    params: ReadConversationsParams,
    json: bool,
) -> Result<()> {
    let query = params.validate()?;
    let payload = super::client(config)?.read_conversations(&query).await?;

    if json {
        return super::print_json(&payload);
    }

    let records: Vec<ConversationRecord> = super::records(payload, "conversations")?;
    if records.is_empty() {
        println!("No conversations found for {}.", query.user_id);
        return Ok(());
    }

    for conv in &records {
        let when = conv
            .started_at
            .as_deref()
            .or(conv.created_at.as_deref())
            .unwrap_or("-");
        println!("{}  {}  {}", conv.id, when, conv.headline());
    }
    println!();
    println!("{} conversation(s)", records.len());
    Ok(())
}
