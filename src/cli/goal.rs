//! Goal CLI commands
//!
//! Implements CLI commands for monthly and yearly income/expense goals.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::GoalKind;
use crate::services::Clock;
use crate::session::Session;

fn parse_kind(s: &str) -> Result<GoalKind, String> {
    GoalKind::parse(s).ok_or_else(|| format!("'{}' is not a goal kind (use income or expense)", s))
}

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Set a monthly goal
    Set {
        /// Goal kind: income (i) or expense (e)
        #[arg(value_parser = parse_kind)]
        kind: GoalKind,

        /// Goal amount (e.g., "4000" or "4000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Month name or number (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show both monthly goals for a month
    Show {
        /// Month name or number (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Set or show a yearly goal
    Yearly {
        /// Goal kind: income (i) or expense (e)
        #[arg(value_parser = parse_kind)]
        kind: GoalKind,

        /// New goal amount; omit to show the current goal
        #[arg(allow_hyphen_values = true)]
        amount: Option<String>,
    },
}

/// Handle a goal command
pub fn handle_goal_command<C: Clock>(
    session: &mut Session<C>,
    settings: &Settings,
    cmd: GoalCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Set {
            kind,
            amount,
            month,
        } => {
            let (amount, month) = session.set_monthly_goal(kind, &amount, month.as_deref())?;
            println!(
                "Set {} goal for {} to {}",
                kind,
                month,
                amount.format_with_symbol(symbol)
            );
        }

        GoalCommands::Show { month } => {
            let month = session.resolve_month(month.as_deref())?;
            println!("Goals for {}", month);
            println!("{}", "-".repeat(30));
            for kind in [GoalKind::Income, GoalKind::Expense] {
                let value = session
                    .goals()
                    .goal_for(kind, month)
                    .map_or_else(|| "Not set".to_string(), |m| m.format_with_symbol(symbol));
                println!("{:<10} {:>14}", format!("{}:", kind), value);
            }
        }

        GoalCommands::Yearly { kind, amount } => match amount {
            Some(amount) => {
                let amount = session.set_yearly_goal(kind, &amount)?;
                println!(
                    "Set yearly {} goal to {}",
                    kind,
                    amount.format_with_symbol(symbol)
                );
            }
            None => {
                if session.goals().has_yearly_goal(kind) {
                    println!(
                        "Yearly {} goal: {}",
                        kind,
                        session.yearly_goal(kind).format_with_symbol(symbol)
                    );
                } else {
                    println!("No yearly {} goal set", kind);
                }
            }
        },
    }

    Ok(())
}
