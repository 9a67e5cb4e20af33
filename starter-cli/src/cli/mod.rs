pub mod commands;
pub mod output;
pub mod prompt;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "starter",
    version,
    about = "Upstream update checks and super admin setup for the TALL starter",
    long_about = "Starter keeps a TALL starter scaffold honest about where it came from: it \
                  compares the recorded upstream versions against GitHub and Packagist, and \
                  provisions the first super admin account."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (defaults to $STARTER_HOME/starter.toml)
    #[arg(long, global = true, value_name = "PATH", env = "STARTER_SETTINGS")]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check for updates from upstream starter sources (TALL Starter & Laravel Official)
    #[command(alias = "starter:check-updates")]
    CheckUpdates(commands::check_updates::CheckUpdatesArgs),

    /// Create a super admin user
    #[command(alias = "app:create-super-admin")]
    CreateSuperAdmin(commands::create_super_admin::CreateSuperAdminArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["starter", "check-updates", "--json", "--verbose"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::CheckUpdates(args) => assert!(args.json),
            _ => panic!("Expected check-updates"),
        }
    }

    #[test]
    fn test_check_updates_format() {
        use starter_core::OutputFormat;

        let format_of = |argv: &[&str]| match Cli::try_parse_from(argv).unwrap().command {
            Commands::CheckUpdates(args) => args.format.with_json_flag(args.json),
            _ => panic!("Expected check-updates"),
        };

        assert_eq!(format_of(&["starter", "check-updates"]), OutputFormat::Table);
        assert_eq!(
            format_of(&["starter", "check-updates", "--format", "json"]),
            OutputFormat::Json
        );
        assert_eq!(
            format_of(&["starter", "check-updates", "--format", "table", "--json"]),
            OutputFormat::Json
        );
        assert!(Cli::try_parse_from(["starter", "check-updates", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_artisan_style_aliases() {
        let cli = Cli::try_parse_from(["starter", "starter:check-updates"]).unwrap();
        assert!(matches!(cli.command, Commands::CheckUpdates(_)));

        let cli = Cli::try_parse_from(["starter", "app:create-super-admin"]).unwrap();
        assert!(matches!(cli.command, Commands::CreateSuperAdmin(_)));
    }
}
