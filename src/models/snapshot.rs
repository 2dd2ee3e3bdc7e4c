//! Persisted snapshot of ledger and goal state
//!
//! A snapshot is the single record written to disk at shutdown and read back
//! at startup. Every field is optional on load.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::money::Money;
use super::month::Month;

/// Amounts keyed by month
pub type MonthlyAmounts = BTreeMap<Month, Money>;

/// Full serializable state of the ledger and the goal tracker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub income: MonthlyAmounts,

    #[serde(default)]
    pub expenses: MonthlyAmounts,

    #[serde(default)]
    pub income_goal: MonthlyAmounts,

    #[serde(default)]
    pub expense_goal: MonthlyAmounts,

    /// Zero means unset
    #[serde(default)]
    pub yearly_income_goal: Money,

    /// Zero means unset
    #[serde(default)]
    pub yearly_expense_goal: Money,
}

impl Snapshot {
    /// True when nothing at all has been recorded
    pub fn is_empty(&self) -> bool {
        self.income.is_empty()
            && self.expenses.is_empty()
            && self.income_goal.is_empty()
            && self.expense_goal.is_empty()
            && self.yearly_income_goal.is_zero()
            && self.yearly_expense_goal.is_zero()
    }

    /// Lay this snapshot over a previously persisted one
    ///
    /// Month entries present here win; entries only present in `persisted`
    /// are kept. A yearly goal left at zero here keeps the persisted value.
    pub fn merged_over(self, persisted: Snapshot) -> Snapshot {
        fn overlay(mut base: MonthlyAmounts, top: MonthlyAmounts) -> MonthlyAmounts {
            base.extend(top);
            base
        }

        Snapshot {
            income: overlay(persisted.income, self.income),
            expenses: overlay(persisted.expenses, self.expenses),
            income_goal: overlay(persisted.income_goal, self.income_goal),
            expense_goal: overlay(persisted.expense_goal, self.expense_goal),
            yearly_income_goal: if self.yearly_income_goal.is_zero() {
                persisted.yearly_income_goal
            } else {
                self.yearly_income_goal
            },
            yearly_expense_goal: if self.yearly_expense_goal.is_zero() {
                persisted.yearly_expense_goal
            } else {
                self.yearly_expense_goal
            },
        }
    }
}
