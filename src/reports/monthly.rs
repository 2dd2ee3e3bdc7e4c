//! Monthly performance report
//!
//! Compares one month's income and expenses with each other and with the
//! month's goals, and renders the result as a short narrative.

use std::fmt;

use crate::error::TrackerResult;
use crate::models::{GoalKind, Money, Month};
use crate::services::{GoalTracker, Ledger};

/// Opening line of the report
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Framing {
    /// Expenses exceeded income; `percent` is income / expenses * 100
    ExpensesExceedIncome { percent: f64 },
    /// Income covered expenses; `percent` is expenses / income * 100
    IncomeCoversExpenses { percent: f64 },
    /// The comparison denominator is zero, so no percentage is defined
    NoActivity,
}

/// Outcome of comparing one goal against the actual figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalAssessment {
    NotSet,
    Met { goal: Money, actual: Money },
    Missed { goal: Money, actual: Money },
}

/// Month-end comparison of actual figures against goals
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub month: Month,
    pub income: Money,
    pub expenses: Money,
    pub income_goal: Option<Money>,
    pub expense_goal: Option<Money>,
}

impl MonthlyReport {
    /// Gather the figures for `month`
    ///
    /// # Errors
    ///
    /// `DataUnavailable` when the month's income or expenses were never
    /// recorded. Missing goals are not an error.
    pub fn generate(ledger: &Ledger, goals: &GoalTracker, month: Month) -> TrackerResult<Self> {
        Ok(Self {
            month,
            income: ledger.monthly_income(month)?,
            expenses: ledger.monthly_expenses(month)?,
            income_goal: goals.goal_for(GoalKind::Income, month),
            expense_goal: goals.goal_for(GoalKind::Expense, month),
        })
    }

    pub fn framing(&self) -> Framing {
        if self.expenses > self.income {
            match self.income.percent_of(self.expenses) {
                Some(percent) => Framing::ExpensesExceedIncome { percent },
                None => Framing::NoActivity,
            }
        } else {
            match self.expenses.percent_of(self.income) {
                Some(percent) => Framing::IncomeCoversExpenses { percent },
                None => Framing::NoActivity,
            }
        }
    }

    /// Income goal is missed when the goal is above actual income
    pub fn income_goal_assessment(&self) -> GoalAssessment {
        match self.income_goal {
            None => GoalAssessment::NotSet,
            Some(goal) if goal > self.income => GoalAssessment::Missed {
                goal,
                actual: self.income,
            },
            Some(goal) => GoalAssessment::Met {
                goal,
                actual: self.income,
            },
        }
    }

    /// Expense goal is missed when actual spending is above the goal
    pub fn expense_goal_assessment(&self) -> GoalAssessment {
        match self.expense_goal {
            None => GoalAssessment::NotSet,
            Some(goal) if goal < self.expenses => GoalAssessment::Missed {
                goal,
                actual: self.expenses,
            },
            Some(goal) => GoalAssessment::Met {
                goal,
                actual: self.expenses,
            },
        }
    }

    /// Report lines in order: framing, income goal, expense goal
    pub fn lines(&self, symbol: &str) -> Vec<String> {
        let money = |m: Money| m.format_with_symbol(symbol);
        let month = self.month;

        let framing = match self.framing() {
            Framing::ExpensesExceedIncome { percent } => format!(
                "Warning: your expenses are higher than your income for {}. \
                 Your income of {} covers only {:.2}% of your {} in expenses.",
                month,
                money(self.income),
                percent,
                money(self.expenses)
            ),
            Framing::IncomeCoversExpenses { percent } if self.income == self.expenses => format!(
                "Your income matched your expenses for {}. \
                 Your expenses of {} used {:.2}% of your {} income.",
                month,
                money(self.expenses),
                percent,
                money(self.income)
            ),
            Framing::IncomeCoversExpenses { percent } => format!(
                "Well done: your income is higher than your expenses for {}. \
                 Your expenses of {} used only {:.2}% of your {} income.",
                month,
                money(self.expenses),
                percent,
                money(self.income)
            ),
            Framing::NoActivity => format!(
                "There is nothing to compare for {} yet: income is {} and expenses are {}.",
                month,
                money(self.income),
                money(self.expenses)
            ),
        };

        let income_line = match self.income_goal_assessment() {
            GoalAssessment::NotSet => format!("No income goal is set for {}.", month),
            GoalAssessment::Missed { goal, actual } => format!(
                "You are {} short of your income goal of {}. \
                 Look for ways to boost your earnings next month.",
                money(goal - actual),
                money(goal)
            ),
            GoalAssessment::Met { goal, .. } => {
                format!("Congratulations, you met your income goal of {}.", money(goal))
            }
        };

        let expense_line = match self.expense_goal_assessment() {
            GoalAssessment::NotSet => format!("No expense goal is set for {}.", month),
            GoalAssessment::Missed { goal, actual } => format!(
                "You spent {} more than your expense goal of {}. \
                 Consider cutting back on discretionary spending such as dining out or entertainment.",
                money(actual - goal),
                money(goal)
            ),
            GoalAssessment::Met { goal, .. } => format!(
                "Great job, you stayed within your expense goal of {}.",
                money(goal)
            ),
        };

        vec![framing, income_line, expense_line]
    }

    /// The full report as one multi-line block
    pub fn render(&self, symbol: &str) -> String {
        self.lines(symbol).join("\n")
    }
}

impl fmt::Display for MonthlyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("$"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(income: i64, expenses: i64, income_goal: i64, expense_goal: i64) -> (Ledger, GoalTracker) {
        let mut ledger = Ledger::new();
        ledger.record_income(Money::from_dollars(income), Month::APRIL);
        ledger.record_expense(Money::from_dollars(expenses), Month::APRIL);

        let mut goals = GoalTracker::new();
        goals.set_monthly_goal(GoalKind::Income, Money::from_dollars(income_goal), Month::APRIL);
        goals.set_monthly_goal(GoalKind::Expense, Money::from_dollars(expense_goal), Month::APRIL);

        (ledger, goals)
    }

    #[test]
    fn test_income_higher_than_expenses() {
        let (ledger, goals) = setup(5000, 3000, 6000, 2500);
        let report = MonthlyReport::generate(&ledger, &goals, Month::APRIL).unwrap();

        assert!(matches!(report.framing(), Framing::IncomeCoversExpenses { .. }));
        assert!(matches!(report.income_goal_assessment(), GoalAssessment::Missed { .. }));
        assert!(matches!(report.expense_goal_assessment(), GoalAssessment::Missed { .. }));

        let lines = report.lines("$");
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("income is higher than your expenses"));
        assert!(lines[0].contains("60.00%"));
        assert!(lines[1].contains("$1000.00 short of your income goal of $6000.00"));
        assert!(lines[2].contains("$500.00 more than your expense goal of $2500.00"));
        assert!(lines[2].contains("cutting back on discretionary spending"));
    }

    #[test]
    fn test_expenses_higher_than_income() {
        let (ledger, goals) = setup(2000, 3000, 1800, 2500);
        let report = MonthlyReport::generate(&ledger, &goals, Month::APRIL).unwrap();

        assert!(matches!(report.framing(), Framing::ExpensesExceedIncome { .. }));
        assert_eq!(
            report.income_goal_assessment(),
            GoalAssessment::Met {
                goal: Money::from_dollars(1800),
                actual: Money::from_dollars(2000)
            }
        );
        assert!(matches!(report.expense_goal_assessment(), GoalAssessment::Missed { .. }));

        let text = report.render("$");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Warning: your expenses are higher than your income"));
        assert!(lines[0].contains("66.67%"));
        assert!(lines[1].contains("met your income goal of $1800.00"));
        assert!(lines[2].contains("cutting back on discretionary spending"));
    }

    #[test]
    fn test_goals_met() {
        let (ledger, goals) = setup(5000, 2000, 5000, 2000);
        let report = MonthlyReport::generate(&ledger, &goals, Month::APRIL).unwrap();

        assert!(matches!(report.income_goal_assessment(), GoalAssessment::Met { .. }));
        assert!(matches!(report.expense_goal_assessment(), GoalAssessment::Met { .. }));
        let lines = report.lines("$");
        assert!(lines[2].contains("stayed within your expense goal of $2000.00"));
    }

    #[test]
    fn test_equal_income_and_expenses() {
        let (ledger, goals) = setup(3000, 3000, 3000, 3000);
        let report = MonthlyReport::generate(&ledger, &goals, Month::APRIL).unwrap();

        assert_eq!(report.framing(), Framing::IncomeCoversExpenses { percent: 100.0 });
        assert!(report.lines("$")[0].contains("matched your expenses"));
    }

    #[test]
    fn test_zero_income_and_expenses() {
        let (ledger, goals) = setup(0, 0, 100, 100);
        let report = MonthlyReport::generate(&ledger, &goals, Month::APRIL).unwrap();

        assert_eq!(report.framing(), Framing::NoActivity);
        let lines = report.lines("$");
        assert!(lines[0].contains("nothing to compare"));
        assert!(!lines[0].contains('%'));
    }

    #[test]
    fn test_negative_income_with_zero_expenses() {
        let (ledger, goals) = setup(-500, 0, 100, 100);
        let report = MonthlyReport::generate(&ledger, &goals, Month::APRIL).unwrap();

        assert_eq!(report.framing(), Framing::NoActivity);
        assert_eq!(
            report.lines("$")[0],
            "There is nothing to compare for April yet: income is -$500.00 and expenses are $0.00."
        );
    }

    #[test]
    fn test_zero_income_with_expenses() {
        let (ledger, goals) = setup(0, 1200, 100, 100);
        let report = MonthlyReport::generate(&ledger, &goals, Month::APRIL).unwrap();

        assert_eq!(report.framing(), Framing::ExpensesExceedIncome { percent: 0.0 });
        assert!(report.lines("$")[0].contains("0.00%"));
    }

    #[test]
    fn test_missing_goals_are_reported() {
        let mut ledger = Ledger::new();
        ledger.record_income(Money::from_dollars(5000), Month::APRIL);
        ledger.record_expense(Money::from_dollars(3000), Month::APRIL);

        let report = MonthlyReport::generate(&ledger, &GoalTracker::new(), Month::APRIL).unwrap();
        let lines = report.lines("$");
        assert_eq!(lines[1], "No income goal is set for April.");
        assert_eq!(lines[2], "No expense goal is set for April.");
    }

    #[test]
    fn test_missing_ledger_data_is_error() {
        let mut ledger = Ledger::new();
        ledger.record_income(Money::from_dollars(5000), Month::APRIL);

        let err = MonthlyReport::generate(&ledger, &GoalTracker::new(), Month::APRIL).unwrap_err();
        assert!(err.is_data_unavailable());
    }

    #[test]
    fn test_currency_symbol() {
        let (ledger, goals) = setup(5000, 3000, 6000, 2500);
        let report = MonthlyReport::generate(&ledger, &goals, Month::APRIL).unwrap();
        assert!(report.render("€").contains("€6000.00"));
        assert!(report.to_string().contains("$6000.00"));
    }
}
