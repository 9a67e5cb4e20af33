use crate::cli::output::*;
use crate::cli::prompt::DialoguerPrompter;
use anyhow::{Context, Result};
use clap::Args;
use starter_accounts::{AdminProvisioner, JsonUserStore, ProvisionOutcome, Sha256Hasher};
use starter_core::{accounts_store_path, Settings, StarterError};

#[derive(Args)]
pub struct CreateSuperAdminArgs {}

pub fn run(_args: CreateSuperAdminArgs, settings: &Settings) -> Result<()> {
    section_header("Laravel TALL Starter - Super Admin Setup");
    println!();

    let store_path = accounts_store_path(settings);
    tracing::debug!("Using account store {}", store_path.display());

    let mut store = JsonUserStore::open(&store_path)?;
    let mut prompter = DialoguerPrompter::new();
    let hasher = Sha256Hasher::default();

    let outcome = AdminProvisioner::new(settings.admin.clone())
        .run(&mut prompter, &mut store, &hasher)
        .map_err(|e| match e {
            StarterError::Persistence(_) => {
                anyhow::Error::new(e).context("Failed to create super admin")
            }
            other => other.into(),
        })?;

    match outcome {
        ProvisionOutcome::Created {
            email,
            masked_password,
            ..
        } => {
            println!();
            success("Super admin user created successfully!");
            tree_item(false, "Email", Some(&email));
            tree_item(true, "Password", Some(&masked_password));
            println!();
            info("You can now login at /login");
        }
        ProvisionOutcome::Cancelled => {
            info("Super admin creation cancelled.");
        }
    }

    Ok(())
}
