//! Record removal.

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::config::Config;
use crate::stores;

pub fn run_remove(config: &Config, id: &str) -> Result<()> {
    let id: Uuid = id
        .parse()
        .with_context(|| format!("Invalid record id: {id}"))?;

    let mut vault = stores::open_unlocked(config)?;

    let outcome = vault.remove(id);
    if outcome.value {
        println!("Removed {id}");
    } else {
        println!("No record with id {id} (nothing to remove)");
    }
    if let Some(err) = &outcome.storage_error {
        eprintln!("Warning: {err}; changes may not survive a reload");
    }
    Ok(())
}
