//! Record intake: read an image file and insert it into the vault.
//!
//! Intake is the frontend's job. The file is read into a
//! `data:<media-type>;base64,` handle here, and the vault treats it as an
//! opaque string from then on.

use std::path::Path;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use image_vault_core::models::RecordDraft;

use crate::config::Config;
use crate::stores;

/// Map a file extension to the data-URI media type.
fn media_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

pub fn run_add(
    config: &Config,
    image: &Path,
    name: Option<String>,
    keywords: Vec<String>,
) -> Result<()> {
    let mut vault = stores::open_unlocked(config)?;

    let bytes = std::fs::read(image)
        .with_context(|| format!("Failed to read image file: {}", image.display()))?;
    let content = format!("data:{};base64,{}", media_type(image), STANDARD.encode(&bytes));

    let display_name = name.unwrap_or_else(|| {
        image
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let outcome = vault.insert(RecordDraft {
        content,
        display_name,
        keywords,
    })?;

    let record = &outcome.value;
    println!("Added {} ({})", record.display_name, record.id);
    println!("    keywords: {}", record.keywords.join(", "));
    if let Some(err) = &outcome.storage_error {
        eprintln!("Warning: {err}; changes may not survive a reload");
    }
    Ok(())
}
