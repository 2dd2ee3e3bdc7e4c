//! Service layer for fintrack
//!
//! The service layer holds the tracker's business logic: the income/expense
//! ledger, the goal tracker, and the clock that decides which month is
//! "current".

pub mod clock;
pub mod goals;
pub mod ledger;

pub use clock::{Clock, FixedClock, SystemClock};
pub use goals::GoalTracker;
pub use ledger::Ledger;
