//! Search command: normalize query terms and filter the collection.

use anyhow::Result;

use image_vault_core::keyword::normalize_keyword_set;

use crate::config::Config;
use crate::list::print_record;
use crate::stores;

pub fn run_search(config: &Config, terms: &[String]) -> Result<()> {
    let vault = stores::open_unlocked(config)?;

    // Query terms get the same normalization as stored keywords; empty
    // terms never reach the engine.
    let query = normalize_keyword_set(terms);

    let results = vault.search(&query);
    if results.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    println!("{} of {} images match", results.len(), vault.len());
    println!();
    for (i, record) in results.iter().enumerate() {
        print_record(i, record);
    }
    Ok(())
}
