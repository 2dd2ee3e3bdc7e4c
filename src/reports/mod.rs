//! Reports module for fintrack
//!
//! Provides the monthly performance narrative and the twelve-month overview.

pub mod monthly;
pub mod overview;

pub use monthly::{Framing, GoalAssessment, MonthlyReport};
pub use overview::{MonthlyOverview, OverviewRow};
