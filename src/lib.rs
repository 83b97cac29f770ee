pub mod cli;
pub mod config;
pub mod mcp;
pub mod todoist;
