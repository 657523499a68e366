//! Session commands: unlock and lock.

use anyhow::Result;

use image_vault_core::error::VaultError;
use image_vault_core::gate::Gate;
use image_vault_core::store::SessionStore;

use crate::config::Config;
use crate::stores;

pub fn run_unlock(config: &Config, secret: &str) -> Result<()> {
    let gate = Gate::new(config.gate.secret.clone());
    let session = stores::session_store(config);

    match gate.authenticate(secret, &session) {
        Ok(()) => {
            println!("Vault unlocked.");
            Ok(())
        }
        Err(VaultError::AccessDenied) => {
            eprintln!("Access denied. Invalid secret.");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

pub fn run_lock(config: &Config) -> Result<()> {
    let session = stores::session_store(config);
    session.clear_authenticated()?;
    println!("Vault locked.");
    Ok(())
}
