mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use omi_mcp::config::{self, OmiMcpConfig};
use omi_mcp::server;
use omi_mcp::tools::read_conversations::ReadConversationsParams;
use omi_mcp::tools::read_memories::ReadMemoriesParams;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "omi-mcp", version, about = "MCP server for the Omi conversations and memories API")]
struct Cli {
    /// Path to the config file (default: ~/.omi-mcp/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the MCP server
    Serve {
        /// Transport to serve on: stdio or http (overrides config)
        #[arg(long)]
        transport: Option<String>,
    },
    /// List a user's conversations
    Conversations {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        limit: Option<u64>,
        #[arg(long)]
        offset: Option<u64>,
        /// Include conversations the user discarded
        #[arg(long)]
        include_discarded: bool,
        /// Comma-separated statuses to include
        #[arg(long)]
        statuses: Option<String>,
        /// Print the raw JSON payload
        #[arg(long)]
        json: bool,
    },
    /// List a user's memories
    Memories {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        limit: Option<u64>,
        #[arg(long)]
        offset: Option<u64>,
        /// Print the raw JSON payload
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    config::load_dotenv()?;

    let (config, config_path) = match &cli.config {
        Some(path) => (OmiMcpConfig::load_from(path)?, path.clone()),
        None => (OmiMcpConfig::load()?, config::default_config_path()),
    };

    // Log to stderr so stdout stays clean for MCP JSON-RPC.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { transport } => {
            let mut config = config;
            if let Some(transport) = transport {
                config.server.transport = transport;
            }
            server::serve(config).await?;
        }
        Command::Conversations {
            user_id,
            limit,
            offset,
            include_discarded,
            statuses,
            json,
        } => {
            let params = ReadConversationsParams {
                user_id,
                limit,
                offset,
                include_discarded: include_discarded.then_some(true),
                statuses,
            };
            cli::conversations::conversations(&config, params, json).await?;
        }
        Command::Memories {
            user_id,
            limit,
            offset,
            json,
        } => {
            let params = ReadMemoriesParams {
                user_id,
                limit,
                offset,
            };
            cli::memories::memories(&config, params, json).await?;
        }
        Command::Config => {
            cli::show_config::show_config(&config, &config_path)?;
        }
    }

    Ok(())
}
