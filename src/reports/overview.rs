//! Twelve-month overview
//!
//! One row per calendar month with the recorded figures and goals, plus the
//! yearly totals. Rendered as a text table or exported as CSV.

use std::io::Write;

use crate::error::TrackerResult;
use crate::models::{GoalKind, Money, Month};
use crate::services::{GoalTracker, Ledger};

/// Figures for one month; `None` means nothing recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRow {
    pub month: Month,
    pub income: Option<Money>,
    pub expenses: Option<Money>,
    pub income_goal: Option<Money>,
    pub expense_goal: Option<Money>,
}

impl OverviewRow {
    /// Income minus expenses, when both are recorded
    pub fn net(&self) -> Option<Money> {
        Some(self.income? - self.expenses?)
    }
}

/// Year-at-a-glance report
#[derive(Debug, Clone)]
pub struct MonthlyOverview {
    pub rows: Vec<OverviewRow>,
    pub yearly_income: Money,
    pub yearly_expenses: Money,
    pub yearly_income_goal: Money,
    pub yearly_expense_goal: Money,
}

impl MonthlyOverview {
    pub fn generate(ledger: &Ledger, goals: &GoalTracker) -> Self {
        let rows = Month::all()
            .map(|month| OverviewRow {
                month,
                income: ledger.income_for(month),
                expenses: ledger.expenses_for(month),
                income_goal: goals.goal_for(GoalKind::Income, month),
                expense_goal: goals.goal_for(GoalKind::Expense, month),
            })
            .collect();

        Self {
            rows,
            yearly_income: ledger.yearly_income(),
            yearly_expenses: ledger.yearly_expenses(),
            yearly_income_goal: goals.yearly_goal(GoalKind::Income),
            yearly_expense_goal: goals.yearly_goal(GoalKind::Expense),
        }
    }

    pub fn yearly_net(&self) -> Money {
        self.yearly_income - self.yearly_expenses
    }

    /// Format as a terminal table
    pub fn format_terminal(&self, symbol: &str) -> String {
        let cell = |m: Option<Money>| m.map_or_else(|| "-".to_string(), |m| m.format_with_symbol(symbol));
        let goal = |m: Money| {
            if m.is_zero() {
                "-".to_string()
            } else {
                m.format_with_symbol(symbol)
            }
        };

        let mut output = String::new();
        output.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
            "Month", "Income", "Expenses", "Net", "Income Goal", "Expense Goal"
        ));
        output.push_str(&format!("{}\n", "-".repeat(75)));

        for row in &self.rows {
            output.push_str(&format!(
                "{:<10} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
                row.month.name(),
                cell(row.income),
                cell(row.expenses),
                cell(row.net()),
                cell(row.income_goal),
                cell(row.expense_goal),
            ));
        }

        output.push_str(&format!("{}\n", "-".repeat(75)));
        output.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
            "Year",
            self.yearly_income.format_with_symbol(symbol),
            self.yearly_expenses.format_with_symbol(symbol),
            self.yearly_net().format_with_symbol(symbol),
            goal(self.yearly_income_goal),
            goal(self.yearly_expense_goal),
        ));

        output
    }

    /// Export the monthly rows to CSV
    ///
    /// Amounts are plain decimals; unrecorded values are empty cells.
    pub fn export_csv<W: Write>(&self, writer: W) -> TrackerResult<()> {
        let mut out = csv::Writer::from_writer(writer);
        let cell = |m: Option<Money>| m.map(|m| format!("{:.2}", m.to_f64())).unwrap_or_default();

        out.write_record([
            "month",
            "income",
            "expenses",
            "net",
            "income_goal",
            "expense_goal",
        ])?;

        for row in &self.rows {
            out.write_record([
                row.month.name().to_string(),
                cell(row.income),
                cell(row.expenses),
                cell(row.net()),
                cell(row.income_goal),
                cell(row.expense_goal),
            ])?;
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MonthlyOverview {
        let mut ledger = Ledger::new();
        ledger.record_income(Money::from_dollars(1000), Month::JANUARY);
        ledger.record_income(Money::from_dollars(2000), Month::FEBRUARY);
        ledger.record_expense(Money::from_cents(50050), Month::JANUARY);

        let mut goals = GoalTracker::new();
        goals.set_monthly_goal(GoalKind::Income, Money::from_dollars(1500), Month::JANUARY);
        goals.set_yearly_goal(GoalKind::Income, Money::from_dollars(48000));

        MonthlyOverview::generate(&ledger, &goals)
    }

    #[test]
    fn test_rows_cover_every_month() {
        let overview = sample();
        assert_eq!(overview.rows.len(), 12);
        assert_eq!(overview.rows[0].month, Month::JANUARY);
        assert_eq!(overview.rows[11].month, Month::DECEMBER);
        assert_eq!(overview.rows[0].net(), Some(Money::from_cents(49950)));
        assert_eq!(overview.rows[1].net(), None);
        assert_eq!(overview.rows[5].income, None);
    }

    #[test]
    fn test_yearly_totals() {
        let overview = sample();
        assert_eq!(overview.yearly_income, Money::from_dollars(3000));
        assert_eq!(overview.yearly_expenses, Money::from_cents(50050));
        assert_eq!(overview.yearly_net(), Money::from_cents(249950));
    }

    #[test]
    fn test_format_terminal() {
        let text = sample().format_terminal("$");
        assert!(text.contains("January"));
        assert!(text.contains("$500.50"));
        assert!(text.contains("$48000.00"));
        // header, separator, 12 months, separator, total
        assert_eq!(text.lines().count(), 16);
    }

    #[test]
    fn test_export_csv() {
        let mut buffer = Vec::new();
        sample().export_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "month,income,expenses,net,income_goal,expense_goal");
        assert_eq!(lines[1], "January,1000.00,500.50,499.50,1500.00,");
        assert_eq!(lines[2], "February,2000.00,,,,");
        assert_eq!(lines.len(), 13);
    }
}
