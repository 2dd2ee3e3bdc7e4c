//! Income and expense ledger
//!
//! Stores one income figure and one expense figure per month. Recording a
//! figure for a month that already has one replaces it.

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Month, MonthlyAmounts};

/// Per-month income and expense figures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    income: MonthlyAmounts,
    expenses: MonthlyAmounts,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted mappings
    pub fn from_parts(income: MonthlyAmounts, expenses: MonthlyAmounts) -> Self {
        Self { income, expenses }
    }

    /// Set the income for a month, replacing any previous figure
    pub fn record_income(&mut self, amount: Money, month: Month) {
        debug!(%month, amount = amount.cents(), "recording income");
        self.income.insert(month, amount);
    }

    /// Set the expenses for a month, replacing any previous figure
    pub fn record_expense(&mut self, amount: Money, month: Month) {
        debug!(%month, amount = amount.cents(), "recording expenses");
        self.expenses.insert(month, amount);
    }

    /// Income recorded for a month
    ///
    /// # Errors
    ///
    /// `DataUnavailable` if nothing was recorded for that month. A recorded
    /// zero is returned as zero.
    pub fn monthly_income(&self, month: Month) -> TrackerResult<Money> {
        self.income_for(month)
            .ok_or_else(|| TrackerError::income_unavailable(month))
    }

    /// Expenses recorded for a month
    ///
    /// # Errors
    ///
    /// `DataUnavailable` if nothing was recorded for that month.
    pub fn monthly_expenses(&self, month: Month) -> TrackerResult<Money> {
        self.expenses_for(month)
            .ok_or_else(|| TrackerError::expenses_unavailable(month))
    }

    pub fn income_for(&self, month: Month) -> Option<Money> {
        self.income.get(&month).copied()
    }

    pub fn expenses_for(&self, month: Month) -> Option<Money> {
        self.expenses.get(&month).copied()
    }

    /// Sum of every recorded income figure, however many months are present
    pub fn yearly_income(&self) -> Money {
        self.income.values().sum()
    }

    /// Sum of every recorded expense figure
    pub fn yearly_expenses(&self) -> Money {
        self.expenses.values().sum()
    }

    pub fn income_entries(&self) -> &MonthlyAmounts {
        &self.income
    }

    pub fn expense_entries(&self) -> &MonthlyAmounts {
        &self.expenses
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }
}
