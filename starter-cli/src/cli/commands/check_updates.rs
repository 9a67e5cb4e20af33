use crate::cli::output::*;
use anyhow::Result;
use clap::Args;
use colored::*;
use comfy_table::{Cell, Row, Table};
use starter_core::{load_sources, OutputFormat, Settings, UpdateCheckResult, UpdateReport};
use starter_upstream::{HttpUpstreamClient, UpdateChecker, TALL_STARTER_KEY};
use std::path::PathBuf;

/// Commit hashes are shortened to this many characters in the table
const SHORT_COMMIT_LEN: usize = 8;

#[derive(Args)]
pub struct CheckUpdatesArgs {
    /// Output results as JSON (same as --format json)
    #[arg(long)]
    pub json: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Upstream sources document (defaults to config/upstream-sources.json)
    #[arg(long, value_name = "PATH")]
    pub sources: Option<PathBuf>,
}

pub fn run(args: CheckUpdatesArgs, settings: &Settings) -> Result<()> {
    let format = args.format.with_json_flag(args.json);
    let quiet = format.is_machine_readable();

    if !quiet {
        println!("{} Checking for upstream updates...", "►".cyan().bold());
    }

    let sources_path = args
        .sources
        .unwrap_or_else(|| settings.upstream.sources_file.clone());

    // Fail before touching the network
    let config = load_sources(&sources_path)?;
    tracing::debug!("Loaded upstream sources from {}", sources_path.display());

    let client = HttpUpstreamClient::new(&settings.upstream)?;
    let checker = UpdateChecker::new(client, &settings.upstream);

    let report = checker.check_with_progress(&config, |key| {
        if quiet {
            return;
        }
        match key {
            TALL_STARTER_KEY => action(&format!(
                "Checking TALL Starter ({})...",
                settings.upstream.commit_repository
            )),
            _ => action("Checking Laravel Official Livewire Starter..."),
        }
    });

    if quiet {
        println!("{}", report.to_json_pretty()?);
        return Ok(());
    }

    println!();
    println!("{}", build_table(&report));

    let errors = report.errors();
    if !errors.is_empty() {
        section_header("Errors");
        for (i, (source, message)) in errors.iter().enumerate() {
            tree_item(i == errors.len() - 1, source_label(source), Some(message));
        }
    }

    if report.any_update() {
        println!();
        info("To apply updates, run:");
        println!("   ./bin/merge-starters.sh");
        println!("   or");
        println!("   php artisan starter:sync");
    } else {
        println!();
        success("All sources are up to date!");
    }

    Ok(())
}

fn source_label(key: &str) -> &'static str {
    match key {
        TALL_STARTER_KEY => "TALL Starter",
        _ => "Laravel Official",
    }
}

pub(crate) fn build_table(report: &UpdateReport) -> Table {
    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Current"),
        header_cell("Latest"),
        header_cell("Status"),
    ]);

    table.add_row(result_row("TALL Starter", &report.tall_starter, true));
    table.add_row(result_row("Laravel Official", &report.laravel_official, false));
    table
}

fn result_row(label: &str, result: &UpdateCheckResult, is_commit: bool) -> Row {
    let (current, latest) = if is_commit {
        (
            short_commit(&result.current),
            short_commit(result.latest_or_unknown()),
        )
    } else {
        (result.current.clone(), result.latest_or_unknown().to_string())
    };

    Row::from(vec![
        Cell::new(label),
        Cell::new(current),
        Cell::new(latest),
        status_cell(result.has_update),
    ])
}

/// First eight characters of a commit, for display only
pub(crate) fn short_commit(value: &str) -> String {
    value.chars().take(SHORT_COMMIT_LEN).collect()
}
