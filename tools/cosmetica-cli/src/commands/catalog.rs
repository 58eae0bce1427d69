//! Catalog maintenance commands.

use anyhow::{bail, Context as _, Result};
use cosmetica_catalog::CatalogStore;
use dialoguer::Confirm;

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::Reset { yes } => reset_catalog(yes, ctx),
    }
}

/// Reseed the catalog.
///
/// Allowed for admins, and for anyone when the stored catalog can't be read,
/// since nothing else works until it is replaced.
fn reset_catalog(yes: bool, ctx: &Context) -> Result<()> {
    let backend = ctx.backend()?;

    let corrupt = match CatalogStore::open(backend.clone()) {
        Ok(_) => false,
        Err(e) if e.is_corrupt() => {
            ctx.output.warn(&format!("Stored catalog is unreadable: {}", e));
            true
        }
        Err(e) => return Err(e).context("Failed to open catalog"),
    };

    if !corrupt {
        let gate = ctx.open_session()?;
        if let Err(e) = gate.require_admin() {
            bail!("{}. Only admins can reset a readable catalog", e);
        }
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Replace every product with the sample catalog?")
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Reset cancelled");
            return Ok(());
        }
    }

    let store = CatalogStore::reset(backend).context("Failed to reset catalog")?;

    if ctx.output.is_json() {
        ctx.output.json(&store.stats());
    } else {
        ctx.output.success(&format!(
            "Catalog reset to {} sample products",
            store.list().len()
        ));
    }

    Ok(())
}
