//! Application session
//!
//! A `Session` owns the ledger, the goal tracker and the snapshot store for
//! the lifetime of one run. The presentation layer talks to it with raw text;
//! amounts and month names are parsed here, before anything is mutated.

use tracing::{info, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{GoalKind, Money, Month, Snapshot};
use crate::reports::{MonthlyOverview, MonthlyReport};
use crate::services::{Clock, GoalTracker, Ledger, SystemClock};
use crate::storage::SnapshotStore;

/// Parse user-entered amount text
pub fn parse_amount(text: &str) -> TrackerResult<Money> {
    Money::parse(text).map_err(|e| TrackerError::InvalidAmount(e.to_string()))
}

/// The running application context
pub struct Session<C: Clock = SystemClock> {
    ledger: Ledger,
    goals: GoalTracker,
    store: SnapshotStore,
    clock: C,
    dirty: bool,
}

impl<C: Clock> Session<C> {
    /// Start a session from whatever the store holds
    ///
    /// An unreadable store is logged and treated as empty.
    pub fn open(store: SnapshotStore, clock: C) -> Self {
        let snapshot = store.load();
        Self::from_snapshot(snapshot, store, clock)
    }

    /// Start a session from an explicit snapshot
    pub fn from_snapshot(snapshot: Snapshot, store: SnapshotStore, clock: C) -> Self {
        let Snapshot {
            income,
            expenses,
            income_goal,
            expense_goal,
            yearly_income_goal,
            yearly_expense_goal,
        } = snapshot;

        Self {
            ledger: Ledger::from_parts(income, expenses),
            goals: GoalTracker::from_parts(
                income_goal,
                expense_goal,
                yearly_income_goal,
                yearly_expense_goal,
            ),
            store,
            clock,
            dirty: false,
        }
    }

    pub fn current_month(&self) -> Month {
        self.clock.current_month()
    }

    /// Resolve optional month text, defaulting to the current month
    pub fn resolve_month(&self, month: Option<&str>) -> TrackerResult<Month> {
        match month {
            Some(name) => Month::from_name(name),
            None => Ok(self.current_month()),
        }
    }

    fn month_or_current(&self, month: Option<Month>) -> Month {
        month.unwrap_or_else(|| self.current_month())
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn goals(&self) -> &GoalTracker {
        &self.goals
    }

    /// Whether anything changed since the session was opened or last saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record income from text input
    pub fn record_income(&mut self, amount: &str, month: Option<&str>) -> TrackerResult<(Money, Month)> {
        let amount = parse_amount(amount)?;
        let month = self.resolve_month(month)?;
        self.ledger.record_income(amount, month);
        self.dirty = true;
        info!(%month, amount = amount.cents(), "income recorded");
        Ok((amount, month))
    }

    /// Record expenses from text input
    pub fn record_expense(&mut self, amount: &str, month: Option<&str>) -> TrackerResult<(Money, Month)> {
        let amount = parse_amount(amount)?;
        let month = self.resolve_month(month)?;
        self.ledger.record_expense(amount, month);
        self.dirty = true;
        info!(%month, amount = amount.cents(), "expenses recorded");
        Ok((amount, month))
    }

    /// Set a monthly goal from text input
    ///
    /// Neither an invalid amount nor an unknown month name changes any goal.
    pub fn set_monthly_goal(
        &mut self,
        kind: GoalKind,
        amount: &str,
        month: Option<&str>,
    ) -> TrackerResult<(Money, Month)> {
        let amount = parse_amount(amount)?;
        let month = match month {
            Some(name) => self.goals.set_monthly_goal_by_name(kind, amount, name)?,
            None => {
                let month = self.current_month();
                self.goals.set_monthly_goal(kind, amount, month);
                month
            }
        };
        self.dirty = true;
        info!(%kind, %month, amount = amount.cents(), "monthly goal set");
        Ok((amount, month))
    }

    pub fn set_yearly_goal(&mut self, kind: GoalKind, amount: &str) -> TrackerResult<Money> {
        let amount = parse_amount(amount)?;
        self.goals.set_yearly_goal(kind, amount);
        self.dirty = true;
        info!(%kind, amount = amount.cents(), "yearly goal set");
        Ok(amount)
    }

    /// Income for `month`, or the current month when `None`
    pub fn monthly_income(&self, month: Option<Month>) -> TrackerResult<Money> {
        self.ledger.monthly_income(self.month_or_current(month))
    }

    /// Expenses for `month`, or the current month when `None`
    pub fn monthly_expenses(&self, month: Option<Month>) -> TrackerResult<Money> {
        self.ledger.monthly_expenses(self.month_or_current(month))
    }

    pub fn monthly_goal(&self, kind: GoalKind, month: Option<Month>) -> TrackerResult<Money> {
        self.goals.monthly_goal(kind, self.month_or_current(month))
    }

    pub fn yearly_goal(&self, kind: GoalKind) -> Money {
        self.goals.yearly_goal(kind)
    }

    pub fn yearly_income(&self) -> Money {
        self.ledger.yearly_income()
    }

    pub fn yearly_expenses(&self) -> Money {
        self.ledger.yearly_expenses()
    }

    /// Build the performance report for `month` (default: current month)
    pub fn monthly_report(&self, month: Option<Month>) -> TrackerResult<MonthlyReport> {
        MonthlyReport::generate(&self.ledger, &self.goals, self.month_or_current(month))
    }

    /// Report text, or a "not enough data" notice when figures are missing
    pub fn report_text(&self, month: Option<Month>, symbol: &str) -> TrackerResult<String> {
        match self.monthly_report(month) {
            Ok(report) => Ok(report.render(symbol)),
            Err(err) if err.is_data_unavailable() => Ok(format!(
                "Not enough data yet for {}: record both income and expenses first. ({})",
                self.month_or_current(month),
                err
            )),
            Err(err) => Err(err),
        }
    }

    pub fn overview(&self) -> MonthlyOverview {
        MonthlyOverview::generate(&self.ledger, &self.goals)
    }

    /// Full current state, ledger and goals combined
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            income: self.ledger.income_entries().clone(),
            expenses: self.ledger.expense_entries().clone(),
            income_goal: self.goals.goals(GoalKind::Income).clone(),
            expense_goal: self.goals.goals(GoalKind::Expense).clone(),
            yearly_income_goal: self.goals.yearly_goal(GoalKind::Income),
            yearly_expense_goal: self.goals.yearly_goal(GoalKind::Expense),
        }
    }

    /// Persist the full session state
    ///
    /// On failure the in-memory state stays valid and the session stays
    /// dirty.
    pub fn save(&mut self) -> TrackerResult<()> {
        self.store.save(&self.snapshot())?;
        self.dirty = false;
        Ok(())
    }

    /// Save if anything changed; failures are logged and returned
    pub fn close(mut self) -> TrackerResult<()> {
        if !self.dirty {
            return Ok(());
        }
        self.save().map_err(|err| {
            warn!(error = %err, "session closed with unsaved changes");
            err
        })
    }
}
