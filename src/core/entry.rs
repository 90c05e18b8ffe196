//! Daily entry form handling - turns per-method amounts into rows to insert.

use crate::core::method::PaymentMethod;
use chrono::NaiveDate;

/// Category stored on expense rows created from the daily form.
pub const EXPENSE_CATEGORY: &str = "expense";

/// Amounts entered for a single day, one per payment method plus expenses.
///
/// Absent, zero, negative and non-finite amounts are all treated as "nothing
/// entered".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyEntryAmounts {
    /// Card income
    pub card: Option<f64>,
    /// Cash income
    pub cash: Option<f64>,
    /// App income
    pub app: Option<f64>,
    /// Expenses, as a positive magnitude
    pub expense: Option<f64>,
}

impl DailyEntryAmounts {
    const fn for_method(&self, method: PaymentMethod) -> Option<f64> {
        match method {
            PaymentMethod::Card => self.card,
            PaymentMethod::Cash => self.cash,
            PaymentMethod::App => self.app,
        }
    }

    /// Whether at least one amount would produce a row.
    #[must_use]
    pub fn has_any(&self) -> bool {
        [self.card, self.cash, self.app, self.expense]
            .into_iter()
            .any(|amount| positive(amount).is_some())
    }
}

/// A row ready to be inserted into the entries table.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    /// Owner of the entry
    pub user_id: String,
    /// Day the entry counts towards
    pub entry_date: NaiveDate,
    /// Signed amount (positive for income, negative for expenses)
    pub amount: f64,
    /// Method tag or expense label
    pub category: String,
    /// Optional annotation
    pub note: Option<String>,
}

/// Builds the rows for one day's form submission.
///
/// Produces one row per usable amount, in the order card, cash, app, expense.
/// Income rows are stored positive with the method tag as category; the
/// expense row is stored negative with category [`EXPENSE_CATEGORY`]. When
/// nothing usable was entered the result is empty.
#[must_use]
pub fn build_insert_rows(
    owner_id: &str,
    date: NaiveDate,
    amounts: &DailyEntryAmounts,
    note: Option<&str>,
) -> Vec<NewEntry> {
    let row = |amount: f64, category: &str| NewEntry {
        user_id: owner_id.to_string(),
        entry_date: date,
        amount,
        category: category.to_string(),
        note: note.map(str::to_string),
    };

    let income_rows = PaymentMethod::ALL.into_iter().filter_map(|method| {
        positive(amounts.for_method(method)).map(|amount| row(amount, method.as_str()))
    });
    let expense_row = positive(amounts.expense).map(|amount| row(-amount, EXPENSE_CATEGORY));

    income_rows.chain(expense_row).collect()
}

fn positive(amount: Option<f64>) -> Option<f64> {
    amount.filter(|value| value.is_finite() && *value > 0.0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    fn march_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_zero_and_absent_amounts_are_skipped() {
        let amounts = DailyEntryAmounts {
            card: Some(0.0),
            cash: Some(12.5),
            app: None,
            expense: Some(0.0),
        };

        let rows = build_insert_rows("driver", march_first(), &amounts, None);
        assert_eq!(
            rows,
            vec![NewEntry {
                user_id: "driver".to_string(),
                entry_date: march_first(),
                amount: 12.5,
                category: "cash".to_string(),
                note: None,
            }]
        );
    }

    #[test]
    fn test_all_amounts_produce_ordered_rows() {
        let amounts = DailyEntryAmounts {
            card: Some(30.0),
            cash: Some(50.0),
            app: Some(15.0),
            expense: Some(20.0),
        };

        let rows = build_insert_rows("driver", march_first(), &amounts, Some("long shift"));
        let summary: Vec<(&str, f64)> = rows
            .iter()
            .map(|row| (row.category.as_str(), row.amount))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("card", 30.0),
                ("cash", 50.0),
                ("app", 15.0),
                (EXPENSE_CATEGORY, -20.0)
            ]
        );
        assert!(rows.iter().all(|row| row.note.as_deref() == Some("long shift")));
    }

    #[test]
    fn test_nothing_entered_is_a_no_op() {
        let amounts = DailyEntryAmounts::default();
        assert!(!amounts.has_any());
        assert!(build_insert_rows("driver", march_first(), &amounts, None).is_empty());
    }

    #[test]
    fn test_negative_and_non_finite_amounts_are_skipped() {
        let amounts = DailyEntryAmounts {
            card: Some(-5.0),
            cash: Some(f64::NAN),
            app: Some(f64::INFINITY),
            expense: Some(-1.0),
        };
        assert!(!amounts.has_any());
        assert!(build_insert_rows("driver", march_first(), &amounts, None).is_empty());
    }

    #[test]
    fn test_expense_only() {
        let amounts = DailyEntryAmounts {
            expense: Some(8.75),
            ..DailyEntryAmounts::default()
        };
        assert!(amounts.has_any());

        let rows = build_insert_rows("driver", march_first(), &amounts, None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, -8.75);
        assert_eq!(rows[0].category, EXPENSE_CATEGORY);
    }
}
