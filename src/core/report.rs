//! Report formatting.
//!
//! Turns summaries into plain-text tables. Amounts use a comma as decimal
//! separator and a trailing currency symbol (`12,50 €`).

use crate::{
    config::Settings,
    core::{
        method::PaymentMethod,
        period::format_date,
        summary::{MonthlySummary, Totals, YearlySummary},
    },
    errors::Result,
};
use chrono::{Locale, NaiveDate};
use std::fmt;

/// Formats an amount with two decimals and a comma separator: `12,50`.
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}

/// Formats an amount followed by the currency symbol: `12,50 €`.
#[must_use]
pub fn format_currency(value: f64, symbol: &str) -> String {
    format!("{} {symbol}", format_amount(value))
}

/// One line per payment method with its share of method-attributed income,
/// e.g. `Tarjeta 37.5%`. Empty when there is no such income.
#[must_use]
pub fn format_method_shares(totals: &Totals) -> Vec<String> {
    totals
        .income_shares()
        .into_iter()
        .map(|(method, share)| format!("{} {share:.1}%", method.label()))
        .collect()
}

/// Renders a month as a table of active days followed by a totals line.
///
/// # Errors
/// Returns an error if the configured locale is unknown.
pub fn format_month_report(summary: &MonthlySummary, settings: &Settings) -> Result<String> {
    let report = MonthReport {
        summary,
        locale: settings.locale()?,
        currency: &settings.currency_symbol,
    };
    Ok(report.to_string())
}

/// Renders a year as one line per month followed by a totals line.
///
/// # Errors
/// Returns an error if the configured locale is unknown.
pub fn format_year_report(summary: &YearlySummary, settings: &Settings) -> Result<String> {
    let report = YearReport {
        summary,
        locale: settings.locale()?,
        currency: &settings.currency_symbol,
    };
    Ok(report.to_string())
}

struct MonthReport<'a> {
    summary: &'a MonthlySummary,
    locale: Locale,
    currency: &'a str,
}

struct YearReport<'a> {
    summary: &'a YearlySummary,
    locale: Locale,
    currency: &'a str,
}

fn write_header(f: &mut fmt::Formatter<'_>, first_column: &str) -> fmt::Result {
    write!(f, "{first_column:<16}")?;
    for method in PaymentMethod::ALL {
        write!(f, "{:>12}", method.label())?;
    }
    writeln!(f, "{:>12}{:>12}", "Total", "Gastos")
}

fn write_row(f: &mut fmt::Formatter<'_>, label: &str, totals: &Totals) -> fmt::Result {
    write!(f, "{label:<16}")?;
    for (_, amount) in totals.income_by_method.iter() {
        write!(f, "{:>12}", format_amount(amount))?;
    }
    writeln!(
        f,
        "{:>12}{:>12}",
        format_amount(totals.total_income),
        format_amount(totals.total_expenses)
    )
}

fn write_footer(f: &mut fmt::Formatter<'_>, totals: &Totals, currency: &str) -> fmt::Result {
    write_row(f, "Total", totals)?;
    if totals.other_income > 0.0 {
        writeln!(f, "Otros ingresos: {}", format_currency(totals.other_income, currency))?;
    }
    write!(f, "Neto: {}", format_currency(totals.net_total(), currency))
}

impl fmt::Display for MonthReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        if let Some(first) = NaiveDate::from_ymd_opt(summary.year, summary.month, 1) {
            writeln!(f, "{}", format_date(first, "%B %Y", self.locale))?;
        }
        write_header(f, "Día")?;
        for day in summary.days_with_activity() {
            let label = format_date(day.date, "%d %a", self.locale);
            write_row(f, &label, &day.totals)?;
        }
        write_footer(f, &summary.totals, self.currency)
    }
}

impl fmt::Display for YearReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        writeln!(f, "{}", summary.year)?;
        write_header(f, "Mes")?;
        for month in summary.monthly_breakdown() {
            let label = NaiveDate::from_ymd_opt(summary.year, month.month, 1)
                .map_or_else(|| month.month.to_string(), |first| {
                    format_date(first, "%B", self.locale)
                });
            write_row(f, &label, &month.totals)?;
        }
        write_footer(f, &summary.totals, self.currency)
    }
}
