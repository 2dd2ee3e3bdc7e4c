//! CLI commands for reports
//!
//! The monthly narrative, the yearly summary and the twelve-month overview.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{GoalKind, Money};
use crate::services::Clock;
use crate::session::Session;

/// Print the performance report for a month
pub fn handle_report_command<C: Clock>(
    session: &Session<C>,
    settings: &Settings,
    month: Option<String>,
) -> TrackerResult<()> {
    let month = session.resolve_month(month.as_deref())?;
    let text = session.report_text(Some(month), &settings.currency_symbol)?;

    println!("Monthly Report for {}", month);
    println!("{}", "=".repeat(40));
    println!("{}", text);
    Ok(())
}

/// Print yearly totals against yearly goals
pub fn handle_summary_command<C: Clock>(session: &Session<C>, settings: &Settings) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let income = session.yearly_income();
    let expenses = session.yearly_expenses();

    println!("Yearly Summary");
    println!("{}", "=".repeat(40));
    println!("Total Income:    {:>14}", income.format_with_symbol(symbol));
    println!("Total Expenses:  {:>14}", expenses.format_with_symbol(symbol));
    println!("Net:             {:>14}", (income - expenses).format_with_symbol(symbol));
    println!();

    print_yearly_goal(session, symbol, GoalKind::Income, income);
    print_yearly_goal(session, symbol, GoalKind::Expense, expenses);
    Ok(())
}

fn print_yearly_goal<C: Clock>(session: &Session<C>, symbol: &str, kind: GoalKind, actual: Money) {
    if !session.goals().has_yearly_goal(kind) {
        println!("Yearly {} goal:  Not set", kind);
        return;
    }

    let goal = session.yearly_goal(kind);
    let progress = actual
        .percent_of(goal)
        .map(|p| format!(" ({:.2}% of goal)", p))
        .unwrap_or_default();

    println!(
        "Yearly {} goal:  {}{}",
        kind,
        goal.format_with_symbol(symbol),
        progress
    );
}

/// Print the twelve-month table, or write it as CSV when `output` is given
pub fn handle_overview_command<C: Clock>(
    session: &Session<C>,
    settings: &Settings,
    output: Option<PathBuf>,
) -> TrackerResult<()> {
    let overview = session.overview();

    if let Some(path) = output {
        let file = File::create(&path)
            .map_err(|e| TrackerError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
        overview.export_csv(BufWriter::new(file))?;
        println!("Exported overview to: {}", path.display());
    } else {
        print!("{}", overview.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}
