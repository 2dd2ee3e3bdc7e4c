//! Goal tracker
//!
//! Holds monthly income and expense targets plus one yearly target of each
//! kind. A yearly goal of zero means no goal has been set.

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{GoalKind, Money, Month, MonthlyAmounts};

/// Monthly and yearly financial targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalTracker {
    income_goal: MonthlyAmounts,
    expense_goal: MonthlyAmounts,
    yearly_income_goal: Money,
    yearly_expense_goal: Money,
}

impl GoalTracker {
    /// Create a tracker with no goals
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a tracker from persisted values
    pub fn from_parts(
        income_goal: MonthlyAmounts,
        expense_goal: MonthlyAmounts,
        yearly_income_goal: Money,
        yearly_expense_goal: Money,
    ) -> Self {
        Self {
            income_goal,
            expense_goal,
            yearly_income_goal,
            yearly_expense_goal,
        }
    }

    /// Set the goal of `kind` for `month`
    pub fn set_monthly_goal(&mut self, kind: GoalKind, amount: Money, month: Month) {
        debug!(%kind, %month, amount = amount.cents(), "setting monthly goal");
        self.goals_mut(kind).insert(month, amount);
    }

    /// Set a monthly goal for a month given by name
    ///
    /// The name is resolved before anything is touched, so an unknown month
    /// leaves every goal as it was.
    pub fn set_monthly_goal_by_name(
        &mut self,
        kind: GoalKind,
        amount: Money,
        month_name: &str,
    ) -> TrackerResult<Month> {
        let month = Month::from_name(month_name)?;
        self.set_monthly_goal(kind, amount, month);
        Ok(month)
    }

    /// The goal of `kind` for `month`
    ///
    /// # Errors
    ///
    /// `DataUnavailable` if no goal of that kind was set for the month.
    pub fn monthly_goal(&self, kind: GoalKind, month: Month) -> TrackerResult<Money> {
        self.goal_for(kind, month)
            .ok_or(TrackerError::DataUnavailable {
                what: match kind {
                    GoalKind::Income => "Monthly income goal",
                    GoalKind::Expense => "Monthly expense goal",
                },
                month,
            })
    }

    pub fn goal_for(&self, kind: GoalKind, month: Month) -> Option<Money> {
        self.goals(kind).get(&month).copied()
    }

    /// All monthly goals of one kind
    pub fn goals(&self, kind: GoalKind) -> &MonthlyAmounts {
        match kind {
            GoalKind::Income => &self.income_goal,
            GoalKind::Expense => &self.expense_goal,
        }
    }

    fn goals_mut(&mut self, kind: GoalKind) -> &mut MonthlyAmounts {
        match kind {
            GoalKind::Income => &mut self.income_goal,
            GoalKind::Expense => &mut self.expense_goal,
        }
    }

    pub fn set_yearly_goal(&mut self, kind: GoalKind, amount: Money) {
        debug!(%kind, amount = amount.cents(), "setting yearly goal");
        match kind {
            GoalKind::Income => self.yearly_income_goal = amount,
            GoalKind::Expense => self.yearly_expense_goal = amount,
        }
    }

    /// The yearly goal of `kind`; zero when unset
    pub fn yearly_goal(&self, kind: GoalKind) -> Money {
        match kind {
            GoalKind::Income => self.yearly_income_goal,
            GoalKind::Expense => self.yearly_expense_goal,
        }
    }

    pub fn has_yearly_goal(&self, kind: GoalKind) -> bool {
        !self.yearly_goal(kind).is_zero()
    }
}
