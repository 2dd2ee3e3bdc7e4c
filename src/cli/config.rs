//! Config CLI command
//!
//! Shows the active paths and settings, and updates settings when options
//! are given.

use clap::Args;

use crate::config::paths::TrackerPaths;
use crate::config::settings::{SavePolicy, Settings};
use crate::error::TrackerResult;

fn parse_policy(s: &str) -> Result<SavePolicy, String> {
    SavePolicy::parse(s).ok_or_else(|| format!("'{}' is not a save policy (use replace or merge)", s))
}

/// Options for the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// How saves treat the snapshot on disk: replace or merge
    #[arg(long, value_parser = parse_policy)]
    pub save_policy: Option<SavePolicy>,

    /// Currency symbol shown in reports
    #[arg(long)]
    pub currency: Option<String>,
}

impl ConfigArgs {
    fn has_changes(&self) -> bool {
        self.save_policy.is_some() || self.currency.is_some()
    }
}

/// Handle the config command
pub fn handle_config_command(
    paths: &TrackerPaths,
    settings: &mut Settings,
    args: ConfigArgs,
) -> TrackerResult<()> {
    if args.has_changes() {
        if let Some(policy) = args.save_policy {
            settings.save_policy = policy;
        }
        if let Some(symbol) = args.currency {
            settings.currency_symbol = symbol;
        }
        settings.save(paths)?;
        println!("Saved settings to {}", paths.settings_file().display());
        println!();
    }

    println!("fintrack Configuration");
    println!("======================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Snapshot file:    {}", paths.snapshot_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Save policy:     {:?}", settings.save_policy);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_update_persists_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        let args = ConfigArgs {
            save_policy: Some(SavePolicy::Merge),
            currency: Some("€".into()),
        };
        handle_config_command(&paths, &mut settings, args).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.save_policy, SavePolicy::Merge);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_show_only_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        handle_config_command(&paths, &mut settings, ConfigArgs::default()).unwrap();

        assert!(!paths.settings_file().exists());
    }
}
