//! Collection listing.

use anyhow::Result;
use chrono::SecondsFormat;

use image_vault_core::models::ImageRecord;

use crate::config::Config;
use crate::stores;

pub fn run_list(config: &Config) -> Result<()> {
    let vault = stores::open_unlocked(config)?;

    let records = vault.all();
    if records.is_empty() {
        println!("Vault is empty.");
        return Ok(());
    }

    println!("{} images", records.len());
    println!();
    for (i, record) in records.iter().enumerate() {
        print_record(i, record);
    }
    Ok(())
}

pub(crate) fn print_record(i: usize, record: &ImageRecord) {
    let name = if record.display_name.is_empty() {
        "(unnamed)"
    } else {
        &record.display_name
    };
    println!("{}. {}", i + 1, name);
    println!("    id:       {}", record.id);
    println!("    keywords: {}", record.keywords.join(", "));
    println!(
        "    added:    {}",
        record.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    println!();
}
