//! Expense MCP - Personal expense tracking backed by SQLite
//!
//! Records, lists, summarizes and removes expenses, and serves the
//! category list as the `expense://categories` resource.

use expense_mcp::ExpenseMcpServer;

mcp_common::serve_stdio!(ExpenseMcpServer, "expense_mcp");
