//! Expense MCP Library
//!
//! Personal expense tracking over MCP: add, list, summarize and remove
//! expense entries stored in SQLite, plus a read-only category list resource.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use expense_mcp::ExpenseMcpServer;
//!
//! let server = ExpenseMcpServer::new()?;
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! - Config is read from `EXPENSE_CONFIG_PATH` or `~/.binks/expense.toml`
//! - The expense table is created on startup if missing

pub mod config;
pub mod handlers;
pub mod params;
pub mod repository;
pub mod resources;
pub mod schema;
pub mod server;
pub mod types;
pub mod validation;

// Re-export main server type
pub use server::ExpenseMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
