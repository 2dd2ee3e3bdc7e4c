//! Core data models for fintrack
//!
//! This module contains the value types shared by the ledger, the goal
//! tracker and the snapshot store: amounts, month keys and the persisted
//! snapshot record.

pub mod goal;
pub mod money;
pub mod month;
pub mod snapshot;

pub use goal::GoalKind;
pub use money::{Money, MoneyParseError};
pub use month::Month;
pub use snapshot::{MonthlyAmounts, Snapshot};
