use anyhow::{bail, Result};

use image_vault_core::store::SessionStore;
use image_vault_core::vault::VaultStore;

use crate::config::Config;
use crate::file_store::{FileSessionStore, FileSnapshotStore};

pub fn snapshot_store(config: &Config) -> FileSnapshotStore {
    FileSnapshotStore::new(&config.storage.snapshot_path)
}

pub fn session_store(config: &Config) -> FileSessionStore {
    FileSessionStore::new(&config.storage.session_path)
}

/// Open the vault after checking the session flag.
pub fn open_unlocked(config: &Config) -> Result<VaultStore<FileSnapshotStore>> {
    let session = session_store(config);
    if !session.is_authenticated() {
        bail!("vault is locked; run `vault unlock <secret>` first");
    }
    Ok(VaultStore::open(snapshot_store(config)))
}
