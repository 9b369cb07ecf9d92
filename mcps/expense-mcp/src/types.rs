//! Type definitions for expense-mcp

use chrono::NaiveDate;
use mcp_common::{IntoMcpError, McpError};
use serde::{Deserialize, Serialize};
use serde_json::json;

// ============================================================================
// Errors
// ============================================================================

/// Failure of a single expense operation
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    /// Rejected input; raised before the store is touched
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// The store could not be reached (e.g. a poisoned connection lock)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read resource {path}: {source}")]
    ResourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type ExpenseResult<T> = Result<T, ExpenseError>;

impl IntoMcpError for ExpenseError {
    fn into_mcp_error(self) -> McpError {
        let message = self.to_string();
        match self {
            ExpenseError::Validation(msg) => McpError::invalid_params(msg, None),
            ExpenseError::ResourceRead { path, .. } => {
                McpError::resource_not_found(message, Some(json!({ "path": path })))
            }
            ExpenseError::Store(_) | ExpenseError::Unavailable(_) => {
                McpError::internal_error(message, None)
            }
        }
    }
}

impl From<ExpenseError> for McpError {
    fn from(e: ExpenseError) -> Self {
        e.into_mcp_error()
    }
}

// ============================================================================
// Records
// ============================================================================

/// One persisted expense row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: i64,
    pub category: String,
    pub subcategory: String,
    pub note: String,
    pub date: NaiveDate,
}

/// Validated input for a new expense row
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: i64,
    pub category: String,
    pub subcategory: String,
    pub note: String,
    pub date: NaiveDate,
}

/// Total spent in one category over a date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total_amount: i64,
}

// ============================================================================
// Responses
// ============================================================================

/// Response for add_expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddExpenseResponse {
    pub status: String,
    pub message: String,
    pub id: i64,
    pub date_used: NaiveDate,
}

/// Response for remove_expense
///
/// `rows_affected` is 0 when the id was already absent; the call still succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveExpenseResponse {
    pub status: String,
    pub message: String,
    pub id: i64,
    pub rows_affected: usize,
}
