//! # Image Vault CLI (`vault`)
//!
//! The `vault` binary is the frontend for Image Vault: a password-gated,
//! keyword-searchable store of tagged images persisted as one local JSON
//! snapshot.
//!
//! ## Usage
//!
//! ```bash
//! vault --config ./config/vault.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `vault unlock <secret>` | Check the secret and start a session |
//! | `vault lock` | End the session |
//! | `vault add <image> -k <kw>...` | Store an image under one or more keywords |
//! | `vault rm <id>` | Remove a record by id |
//! | `vault ls` | List all records, newest first |
//! | `vault search <term>...` | Multi-keyword intersection search |
//!
//! All data commands require an unlocked session. The gate is a soft
//! deterrent, not a security boundary; see `config/vault.example.toml`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use image_vault::{add, config, list, rm, search, session};

/// Image Vault CLI.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/vault.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "vault",
    about = "Image Vault — a password-gated, keyword-searchable image vault",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/vault.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Unlock the vault for this session.
    ///
    /// Checks the candidate against `[gate].secret` and sets the session
    /// flag on a match.
    Unlock {
        /// The shared secret.
        secret: String,
    },

    /// Lock the vault, ending the session.
    Lock,

    /// Add an image to the vault.
    ///
    /// Reads the file, wraps it as a data URI, and stores it under the
    /// given keywords. At least one keyword is required.
    Add {
        /// Path to the image file.
        image: PathBuf,

        /// Display name; defaults to the file name.
        #[arg(long)]
        name: Option<String>,

        /// Search keyword; repeat for multiple keywords.
        #[arg(short = 'k', long = "keyword", required = true)]
        keywords: Vec<String>,
    },

    /// Remove a record by id.
    ///
    /// Removing an id that is not present is a no-op, not an error.
    Rm {
        /// Record id (UUID).
        id: String,
    },

    /// List all records, newest first.
    Ls,

    /// Search records by keywords.
    ///
    /// A record matches when every term is contained in at least one of
    /// its keywords. With no terms this lists the whole vault.
    Search {
        /// Query terms.
        terms: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Unlock { secret } => session::run_unlock(&cfg, &secret)?,
        Commands::Lock => session::run_lock(&cfg)?,
        Commands::Add {
            image,
            name,
            keywords,
        } => add::run_add(&cfg, &image, name, keywords)?,
        Commands::Rm { id } => rm::run_remove(&cfg, &id)?,
        Commands::Ls => list::run_list(&cfg)?,
        Commands::Search { terms } => search::run_search(&cfg, &terms)?,
    }

    Ok(())
}
