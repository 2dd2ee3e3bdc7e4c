//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session.

pub mod config;
pub mod entry;
pub mod goal;
pub mod report;

pub use config::{handle_config_command, ConfigArgs};
pub use entry::{handle_entry_command, EntryCommands, EntrySide};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_overview_command, handle_report_command, handle_summary_command};
