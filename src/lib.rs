//! fintrack - monthly income, expense and goal tracking
//!
//! This library records a single user's monthly income and expenses, keeps
//! monthly and yearly goals, persists both between runs, and writes a short
//! narrative comparing the month's results with its goals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Amounts, month keys and the persisted snapshot
//! - `services`: Ledger, goal tracker and clock
//! - `storage`: JSON snapshot storage
//! - `reports`: Monthly report and yearly overview
//! - `session`: The application context tying it all together
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{paths::TrackerPaths, settings::Settings};
//! use fintrack::services::SystemClock;
//! use fintrack::session::Session;
//! use fintrack::storage::SnapshotStore;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = SnapshotStore::with_policy(paths.snapshot_file(), settings.save_policy);
//! let mut session = Session::open(store, SystemClock);
//! session.record_income("5000", None)?;
//! session.save()?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
pub use session::Session;
