//! Handler implementations for expense-mcp tools
//!
//! Each handler validates the tool params, calls the store, and converts the
//! result to a CallToolResult. `today` is supplied by the caller at invocation
//! time and is the only source of default dates.

use chrono::NaiveDate;
use mcp_common::{json_success, CallToolResult, McpError, ResultExt};

use crate::params::*;
use crate::repository::ExpenseStore;
use crate::types::{AddExpenseResponse, ExpenseError, RemoveExpenseResponse};
use crate::validation::{self, DateRange};

/// Log a rejected call before handing the error back to the caller
fn rejected(tool: &str, err: ExpenseError) -> ExpenseError {
    if let ExpenseError::Validation(msg) = &err {
        tracing::warn!(tool, "Rejected invalid arguments: {}", msg);
    }
    err
}

pub async fn add_expense(
    store: &dyn ExpenseStore,
    params: AddExpenseParams,
    today: NaiveDate,
) -> Result<CallToolResult, McpError> {
    let expense = validation::new_expense(params, today)
        .map_err(|e| rejected("add_expense", e))
        .to_mcp_err()?;

    let id = store.insert(&expense).to_mcp_err()?;

    tracing::info!(id, date = %expense.date, category = %expense.category, "Expense added");

    json_success(&AddExpenseResponse {
        status: "success".to_string(),
        message: "Expense added successfully.".to_string(),
        id,
        date_used: expense.date,
    })
}

pub async fn get_expense(
    store: &dyn ExpenseStore,
    params: GetExpenseParams,
    today: NaiveDate,
) -> Result<CallToolResult, McpError> {
    let range = DateRange::from_params(
        params.start_date.as_deref(),
        params.end_date.as_deref(),
        today,
    )
    .map_err(|e| rejected("get_expense", e))
    .to_mcp_err()?;

    let expenses = store.list_in_range(range).to_mcp_err()?;

    tracing::debug!(
        start = %range.start(),
        end = %range.end(),
        rows = expenses.len(),
        "Listed expenses"
    );

    json_success(&expenses)
}

pub async fn summarize_expense(
    store: &dyn ExpenseStore,
    params: SummarizeExpenseParams,
    today: NaiveDate,
) -> Result<CallToolResult, McpError> {
    let range = DateRange::from_params(
        params.start_date.as_deref(),
        params.end_date.as_deref(),
        today,
    )
    .map_err(|e| rejected("summarize_expense", e))
    .to_mcp_err()?;
    let category = validation::category_filter(params.category.as_deref());

    let summary = store
        .summarize(range, category.as_deref())
        .to_mcp_err()?;

    tracing::debug!(
        start = %range.start(),
        end = %range.end(),
        category = category.as_deref().unwrap_or("*"),
        groups = summary.len(),
        "Summarized expenses"
    );

    json_success(&summary)
}

pub async fn remove_expense(
    store: &dyn ExpenseStore,
    params: RemoveExpenseParams,
) -> Result<CallToolResult, McpError> {
    let id = params.expense_id;
    let rows_affected = store.remove(id).to_mcp_err()?;

    // A missing id is still a success; rows_affected tells the two apart
    if rows_affected == 0 {
        tracing::info!(id, "Remove requested for absent expense");
    } else {
        tracing::info!(id, "Expense removed");
    }

    json_success(&RemoveExpenseResponse {
        status: "success".to_string(),
        message: format!("Expense with id {} removed successfully.", id),
        id,
        rows_affected,
    })
}
