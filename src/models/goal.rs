//! Goal kinds
//!
//! A goal is either an income target (earn at least this much) or an expense
//! target (spend at most this much).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the ledger a goal applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Income,
    Expense,
}

impl GoalKind {
    /// Parse a goal kind from user input
    ///
    /// Accepts "income"/"i" and "expense"/"expenses"/"e", case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "i" => Some(Self::Income),
            "expense" | "expenses" | "e" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(GoalKind::parse("i"), Some(GoalKind::Income));
        assert_eq!(GoalKind::parse("Income"), Some(GoalKind::Income));
        assert_eq!(GoalKind::parse("e"), Some(GoalKind::Expense));
        assert_eq!(GoalKind::parse("EXPENSES"), Some(GoalKind::Expense));
        assert_eq!(GoalKind::parse("savings"), None);
    }
}
