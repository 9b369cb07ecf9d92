//! Parameter definitions for expense-mcp tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddExpenseParams {
    #[schemars(description = "Amount spent as a non-negative integer (e.g. cents)")]
    pub amount: i64,

    #[schemars(description = "Expense category, e.g. 'food' or 'transport'")]
    pub category: String,

    #[schemars(description = "Optional subcategory, e.g. 'groceries'")]
    #[serde(default)]
    pub subcategory: Option<String>,

    #[schemars(description = "Optional free-form note")]
    #[serde(default)]
    pub note: Option<String>,

    #[schemars(description = "Date in YYYY-MM-DD format (default: today)")]
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetExpenseParams {
    #[schemars(description = "First day of the range, YYYY-MM-DD (default: today)")]
    #[serde(default)]
    pub start_date: Option<String>,

    #[schemars(description = "Last day of the range, inclusive, YYYY-MM-DD (default: today)")]
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SummarizeExpenseParams {
    #[schemars(description = "First day of the range, YYYY-MM-DD (default: today)")]
    #[serde(default)]
    pub start_date: Option<String>,

    #[schemars(description = "Last day of the range, inclusive, YYYY-MM-DD (default: today)")]
    #[serde(default)]
    pub end_date: Option<String>,

    #[schemars(description = "Only summarize this category")]
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RemoveExpenseParams {
    #[schemars(description = "ID of the expense to remove")]
    pub expense_id: i64,
}
