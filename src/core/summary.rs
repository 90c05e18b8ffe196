//! Aggregation of classified transactions into daily, monthly and yearly summaries.
//!
//! Every function here is pure: callers fetch and classify entries first, then
//! hand the resulting transactions over. Period summaries always contain one
//! [`DailySummary`] per calendar day, including days without activity, so
//! presentation code can iterate a fixed number of days.

use crate::core::{
    method::{MethodTotals, PaymentMethod},
    period::{DateRange, format_date},
    transaction::{Transaction, TransactionKind},
};
use chrono::{Datelike, Locale, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;
use std::ops::AddAssign;

/// Accumulated amounts over some set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    /// Sum of all income
    pub total_income: f64,
    /// Sum of all expenses, as a positive number
    pub total_expenses: f64,
    /// Income per payment method
    pub income_by_method: MethodTotals,
    /// Expenses per payment method
    pub expenses_by_method: MethodTotals,
    /// Income whose category is not a payment method
    pub other_income: f64,
}

impl Totals {
    /// Income minus expenses; negative when more was spent than earned.
    #[must_use]
    pub fn net_total(&self) -> f64 {
        self.total_income - self.total_expenses
    }

    /// Whether any amount was earned or spent.
    ///
    /// Stored zero-amount rows do not count here; use
    /// [`DailySummary::has_activity`] to ask whether a day has transactions.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        self.total_income > 0.0 || self.total_expenses > 0.0
    }

    /// Percentage of method-attributed income received through each method.
    ///
    /// Empty when no income was attributed to a method.
    #[must_use]
    pub fn income_shares(&self) -> Vec<(PaymentMethod, f64)> {
        let attributed = self.income_by_method.sum();
        if attributed <= 0.0 {
            return Vec::new();
        }
        self.income_by_method
            .iter()
            .map(|(method, amount)| (method, amount / attributed * 100.0))
            .collect()
    }

    fn add_transaction(&mut self, transaction: &Transaction) {
        match transaction.kind {
            TransactionKind::Income => {
                self.total_income += transaction.amount;
                match transaction.method {
                    Some(method) => self.income_by_method[method] += transaction.amount,
                    None => self.other_income += transaction.amount,
                }
            }
            TransactionKind::Expense => {
                self.total_expenses += transaction.amount;
                if let Some(method) = transaction.method {
                    self.expenses_by_method[method] += transaction.amount;
                }
            }
        }
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, other: Self) {
        self.total_income += other.total_income;
        self.total_expenses += other.total_expenses;
        self.income_by_method += other.income_by_method;
        self.expenses_by_method += other.expenses_by_method;
        self.other_income += other.other_income;
    }
}

/// Summary of a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    /// The day being summarized
    pub date: NaiveDate,
    /// Weekday name in the configured locale
    pub day_of_week: String,
    /// Accumulated amounts
    #[serde(flatten)]
    pub totals: Totals,
    /// `total_income - total_expenses`
    pub net_total: f64,
    /// Contributing transactions, most recent first
    pub transactions: Vec<Transaction>,
}

impl DailySummary {
    /// Whether any transaction was recorded on this day, zero amounts included.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        !self.transactions.is_empty()
    }
}

/// Summary of a calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// Calendar year
    pub year: i32,
    /// Month, 1-12
    pub month: u32,
    /// Accumulated amounts for the whole month
    #[serde(flatten)]
    pub totals: Totals,
    /// `total_income - total_expenses`
    pub net_total: f64,
    /// One summary per day of the month, ascending
    pub daily_summaries: Vec<DailySummary>,
}

/// Summary of a calendar year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlySummary {
    /// Calendar year
    pub year: i32,
    /// Accumulated amounts for the whole year
    #[serde(flatten)]
    pub totals: Totals,
    /// `total_income - total_expenses`
    pub net_total: f64,
    /// One summary per day of the year, ascending
    pub daily_summaries: Vec<DailySummary>,
}

/// Totals for one month within a [`YearlySummary`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthBreakdown {
    /// Month, 1-12
    pub month: u32,
    /// Accumulated amounts for the month
    pub totals: Totals,
}

impl MonthlySummary {
    /// Builds a month summary from its daily summaries.
    #[must_use]
    pub fn new(year: i32, month: u32, daily_summaries: Vec<DailySummary>) -> Self {
        let totals = roll_up(&daily_summaries);
        Self {
            year,
            month,
            totals,
            net_total: totals.net_total(),
            daily_summaries,
        }
    }

    /// Days with at least one recorded transaction.
    pub fn days_with_activity(&self) -> impl Iterator<Item = &DailySummary> {
        self.daily_summaries.iter().filter(|day| day.has_activity())
    }
}

impl YearlySummary {
    /// Builds a year summary from its daily summaries.
    #[must_use]
    pub fn new(year: i32, daily_summaries: Vec<DailySummary>) -> Self {
        let totals = roll_up(&daily_summaries);
        Self {
            year,
            totals,
            net_total: totals.net_total(),
            daily_summaries,
        }
    }

    /// Days with at least one recorded transaction.
    pub fn days_with_activity(&self) -> impl Iterator<Item = &DailySummary> {
        self.daily_summaries.iter().filter(|day| day.has_activity())
    }

    /// Rolls the daily sequence up into twelve month rows, January first.
    #[must_use]
    pub fn monthly_breakdown(&self) -> Vec<MonthBreakdown> {
        let mut months = [Totals::default(); 12];
        for day in &self.daily_summaries {
            months[day.date.month0() as usize] += day.totals;
        }
        (1..=12)
            .zip(months)
            .map(|(month, totals)| MonthBreakdown { month, totals })
            .collect()
    }
}

/// Folds transactions into totals in a single pass.
#[must_use]
pub fn to_totals(transactions: &[Transaction]) -> Totals {
    transactions.iter().fold(Totals::default(), |mut acc, tx| {
        acc.add_transaction(tx);
        acc
    })
}

/// Summarizes one day.
///
/// No date filtering happens here: the totals reflect exactly the transactions
/// passed in. Transactions are reordered most-recent-first; entries sharing a
/// date keep their input order.
#[must_use]
pub fn summarize_day(
    date: NaiveDate,
    mut transactions: Vec<Transaction>,
    locale: Locale,
) -> DailySummary {
    let totals = to_totals(&transactions);
    transactions.sort_by(|a, b| b.date.cmp(&a.date));

    DailySummary {
        date,
        day_of_week: format_date(date, "%A", locale),
        totals,
        net_total: totals.net_total(),
        transactions,
    }
}

/// Produces one [`DailySummary`] per day of `range`, ascending, zero-filled.
///
/// Transactions dated outside the range are dropped.
#[must_use]
pub fn summarize_range(
    range: &DateRange,
    transactions: Vec<Transaction>,
    locale: Locale,
) -> Vec<DailySummary> {
    let mut by_day: HashMap<NaiveDate, Vec<Transaction>> = HashMap::new();
    for transaction in transactions {
        by_day.entry(transaction.date).or_default().push(transaction);
    }

    range
        .days()
        .map(|day| summarize_day(day, by_day.remove(&day).unwrap_or_default(), locale))
        .collect()
}

/// Sums a sequence of daily summaries. Empty input yields all-zero totals.
#[must_use]
pub fn roll_up(daily_summaries: &[DailySummary]) -> Totals {
    daily_summaries
        .iter()
        .fold(Totals::default(), |mut acc, day| {
            acc += day.totals;
            acc
        })
}
