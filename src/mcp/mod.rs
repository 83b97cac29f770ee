//! Model Context Protocol (MCP) server implementation
//!
//! This module exposes the Todoist client as MCP tools, served over stdio or
//! the Streamable HTTP transport.
//!
//! # Architecture
//!
//! - **catalog**: the closed set of tool names
//! - **server**: coordinator implementing `ServerHandler` and dispatch
//! - **tools**: tool structs per entity (tasks, projects, sections)
//! - **service**: Streamable HTTP service factory
//!
//! Every tool struct is generic over `A: TodoistApi`, so tests run the full
//! dispatch path against a mock client.

pub mod catalog;
pub mod server;
mod service;
pub mod tools;


pub use catalog::ToolName;
pub use server::McpServer;
pub use service::create_mcp_service;
