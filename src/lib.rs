//! Omi tools over MCP.
//!
//! `omi-mcp` is an [MCP](https://modelcontextprotocol.io/) server that exposes four
//! operations of the Omi integrations API as tools:
//!
//! | Tool | Method | Path |
//! |------|--------|------|
//! | `read_conversations` | GET | `/v2/integrations/{app_id}/conversations` |
//! | `read_memories` | GET | `/v2/integrations/{app_id}/memories` |
//! | `create_conversation` | POST | `/v2/integrations/{app_id}/user/conversations` |
//! | `create_memories` | POST | `/v2/integrations/{app_id}/user/memories` |
//!
//! Every invocation runs one linear pipeline: validate parameters, build a single
//! request, send it, map the answer. Nothing is cached and nothing is retried.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from TOML files and environment variables
//! - [`omi`]: Request construction, response mapping, and the HTTP client
//! - [`tools`]: Tool parameter schemas, validation, and the rmcp tool router
//! - [`server`]: stdio and Streamable HTTP transports

pub mod config;
pub mod omi;
pub mod server;
pub mod tools;
