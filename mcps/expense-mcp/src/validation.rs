//! Input validation for expense tools
//!
//! Everything here runs before the store is touched, so a rejected call
//! never reaches SQLite.

use chrono::NaiveDate;

use crate::params::AddExpenseParams;
use crate::types::{ExpenseError, ExpenseResult, NewExpense};

/// ISO calendar date format accepted by every tool
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive date range with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> ExpenseResult<Self> {
        if start > end {
            return Err(ExpenseError::Validation(format!(
                "start_date {} is after end_date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Build a range from optional tool arguments, defaulting either end to `today`
    pub fn from_params(
        start: Option<&str>,
        end: Option<&str>,
        today: NaiveDate,
    ) -> ExpenseResult<Self> {
        let start = resolve_date("start_date", start, today)?;
        let end = resolve_date("end_date", end, today)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Parse a strict `YYYY-MM-DD` date
pub fn parse_date(field: &str, value: &str) -> ExpenseResult<NaiveDate> {
    let trimmed = value.trim();
    // chrono accepts unpadded fields and signed years; the wire format is fixed-width digits
    if !is_iso_shape(trimmed) {
        return Err(invalid_date(field, value));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid_date(field, value))
}

/// `DDDD-DD-DD` with ASCII digits only
fn is_iso_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse an optional date argument; absent or blank means `today`
pub fn resolve_date(field: &str, value: Option<&str>, today: NaiveDate) -> ExpenseResult<NaiveDate> {
    match value.map(str::trim) {
        None | Some("") => Ok(today),
        Some(s) => parse_date(field, s),
    }
}

fn invalid_date(field: &str, value: &str) -> ExpenseError {
    ExpenseError::Validation(format!(
        "{} must be a valid date in YYYY-MM-DD format, got '{}'",
        field, value
    ))
}

/// Validate add_expense arguments into a row ready for insertion
pub fn new_expense(params: AddExpenseParams, today: NaiveDate) -> ExpenseResult<NewExpense> {
    if params.amount < 0 {
        return Err(ExpenseError::Validation(format!(
            "amount must be a non-negative integer, got {}",
            params.amount
        )));
    }

    let category = params.category.trim();
    if category.is_empty() {
        return Err(ExpenseError::Validation(
            "category must not be empty".to_string(),
        ));
    }

    let date = resolve_date("date", params.date.as_deref(), today)?;

    Ok(NewExpense {
        amount: params.amount,
        category: category.to_string(),
        subcategory: params.subcategory.unwrap_or_default(),
        note: params.note.unwrap_or_default(),
        date,
    })
}

/// Normalize the optional summary filter; blank means no filter
pub fn category_filter(category: Option<&str>) -> Option<String> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn params(amount: i64, category: &str, date: Option<&str>) -> AddExpenseParams {
        AddExpenseParams {
            amount,
            category: category.to_string(),
            subcategory: None,
            note: None,
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(parse_date("date", "2024-02-29").unwrap(), day(2024, 2, 29));
        assert_eq!(parse_date("date", " 2024-01-05 ").unwrap(), day(2024, 1, 5));
    }

    #[test]
    fn test_parse_date_rejects_malformed() {
        for bad in [
            "2023-02-29",
            "2024-13-01",
            "05/01/2024",
            "2024-1-5",
            "yesterday",
            "2024-01-05T00:00",
            "-999-01-01",
            "+024-01-01",
            "2024-0a-01",
            "2024/01/01",
        ] {
            let err = parse_date("date", bad).unwrap_err();
            assert!(matches!(err, ExpenseError::Validation(_)), "accepted {bad}");
        }
    }

    #[test]
    fn test_resolve_date_defaults_to_today() {
        let today = day(2024, 6, 1);
        assert_eq!(resolve_date("date", None, today).unwrap(), today);
        assert_eq!(resolve_date("date", Some(""), today).unwrap(), today);
        assert_eq!(resolve_date("date", Some("  "), today).unwrap(), today);
        assert_eq!(
            resolve_date("date", Some("2024-01-05"), today).unwrap(),
            day(2024, 1, 5)
        );
    }

    #[test]
    fn test_date_range_rejects_inverted() {
        let err = DateRange::new(day(2024, 2, 1), day(2024, 1, 1)).unwrap_err();
        assert!(err.to_string().contains("after"));
        assert!(DateRange::new(day(2024, 1, 1), day(2024, 1, 1)).is_ok());
    }

    #[test]
    fn test_date_range_from_params_defaults() {
        let today = day(2024, 6, 1);
        let range = DateRange::from_params(None, Some(""), today).unwrap();
        assert_eq!(range.start(), today);
        assert_eq!(range.end(), today);

        let range = DateRange::from_params(Some("2024-05-01"), None, today).unwrap();
        assert_eq!(range.start(), day(2024, 5, 1));
        assert_eq!(range.end(), today);

        assert!(DateRange::from_params(Some("2024-07-01"), None, today).is_err());
    }

    #[test]
    fn test_new_expense_negative_amount() {
        let err = new_expense(params(-1, "food", None), day(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, ExpenseError::Validation(_)));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_new_expense_empty_category() {
        let err = new_expense(params(10, "   ", None), day(2024, 1, 1)).unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn test_new_expense_defaults() {
        let today = day(2024, 3, 9);
        let expense = new_expense(params(0, " food ", Some("")), today).unwrap();
        assert_eq!(expense.amount, 0);
        assert_eq!(expense.category, "food");
        assert_eq!(expense.subcategory, "");
        assert_eq!(expense.note, "");
        assert_eq!(expense.date, today);
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(category_filter(None), None);
        assert_eq!(category_filter(Some("")), None);
        assert_eq!(category_filter(Some(" food ")), Some("food".to_string()));
    }
}
