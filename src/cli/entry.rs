//! Income and expense CLI commands
//!
//! The same pair of subcommands drives both sides of the ledger.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::services::Clock;
use crate::session::Session;

/// Which ledger column a command writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySide {
    Income,
    Expenses,
}

impl EntrySide {
    fn label(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expenses => "expenses",
        }
    }
}

/// Income / expense subcommands
#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Record the amount for a month, replacing any previous figure
    Set {
        /// Amount (e.g., "5000" or "5000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Month name or number (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show the amount recorded for a month
    Show {
        /// Month name or number (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle an income or expense command
pub fn handle_entry_command<C: Clock>(
    session: &mut Session<C>,
    settings: &Settings,
    side: EntrySide,
    cmd: EntryCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        EntryCommands::Set { amount, month } => {
            let (amount, month) = match side {
                EntrySide::Income => session.record_income(&amount, month.as_deref())?,
                EntrySide::Expenses => session.record_expense(&amount, month.as_deref())?,
            };
            println!(
                "Set {} for {} to {}",
                side.label(),
                month,
                amount.format_with_symbol(symbol)
            );
        }

        EntryCommands::Show { month } => {
            let month = session.resolve_month(month.as_deref())?;
            let result = match side {
                EntrySide::Income => session.monthly_income(Some(month)),
                EntrySide::Expenses => session.monthly_expenses(Some(month)),
            };

            match result {
                Ok(amount) => println!(
                    "{} for {}: {}",
                    capitalize(side.label()),
                    month,
                    amount.format_with_symbol(symbol)
                ),
                Err(err) if err.is_data_unavailable() => {
                    println!("No {} recorded for {}", side.label(), month);
                    println!(
                        "Use 'fintrack {} set <amount>' to record it.",
                        match side {
                            EntrySide::Income => "income",
                            EntrySide::Expenses => "expense",
                        }
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }

    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
