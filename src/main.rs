use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fintrack::cli::{
    handle_config_command, handle_entry_command, handle_goal_command, handle_overview_command,
    handle_report_command, handle_summary_command, ConfigArgs, EntryCommands, EntrySide,
    GoalCommands,
};
use fintrack::config::{paths::TrackerPaths, settings::Settings};
use fintrack::services::SystemClock;
use fintrack::session::Session;
use fintrack::storage::SnapshotStore;

#[derive(Parser)]
#[command(
    name = "fintrack",
    author = "Kaylee Beyene",
    version,
    about = "Track monthly income, expenses and financial goals",
    long_about = "fintrack records your income and expenses month by month, \
                  keeps monthly and yearly goals, and tells you how each month \
                  measured up."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record or show monthly income
    #[command(subcommand)]
    Income(EntryCommands),

    /// Record or show monthly expenses
    #[command(subcommand, alias = "expenses")]
    Expense(EntryCommands),

    /// Monthly and yearly goals
    #[command(subcommand, alias = "goals")]
    Goal(GoalCommands),

    /// Compare a month's figures against its goals
    Report {
        /// Month name or number (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Yearly totals against yearly goals
    Summary,

    /// Twelve-month table of income, expenses and goals
    Overview {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or update configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    fintrack::logging::init_tracing();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Restore the previous session
    let store = SnapshotStore::with_policy(paths.snapshot_file(), settings.save_policy);
    let mut session = Session::open(store, SystemClock);

    match cli.command {
        Some(Commands::Income(cmd)) => {
            handle_entry_command(&mut session, &settings, EntrySide::Income, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_entry_command(&mut session, &settings, EntrySide::Expenses, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&mut session, &settings, cmd)?;
        }
        Some(Commands::Report { month }) => {
            handle_report_command(&session, &settings, month)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&session, &settings)?;
        }
        Some(Commands::Overview { output }) => {
            handle_overview_command(&session, &settings, output)?;
        }
        Some(Commands::Config(args)) => {
            handle_config_command(&paths, &mut settings, args)?;
        }
        None => {
            println!("fintrack - monthly income, expense and goal tracking");
            println!();
            println!("Run 'fintrack --help' for usage information.");
        }
    }

    // Persist on the way out
    session.close()?;

    Ok(())
}
