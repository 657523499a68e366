//! # Image Vault
//!
//! A password-gated, keyword-searchable image vault with local snapshot
//! persistence.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌─────────────┐   ┌───────────────┐
//! │   Gate   │──▶│ Vault Store │──▶│ JSON snapshot │
//! │ (secret) │   │  + Search   │   │  (one file)   │
//! └──────────┘   └─────────────┘   └───────────────┘
//! ```
//!
//! The gate sets a session flag; the vault store owns the in-memory
//! collection and mirrors every mutation into the snapshot file; the
//! search engine filters by multi-keyword intersection. Core logic lives
//! in the `image-vault-core` crate; this crate adds configuration, the
//! file-backed stores, and the `vault` CLI.
//!
//! ## Quick Start
//!
//! ```bash
//! vault unlock <secret>              # start a session
//! vault add cat.png -k cat -k pet    # store a tagged image
//! vault search pet                   # multi-keyword intersection search
//! vault rm <id>                      # remove a record
//! vault lock                         # end the session
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`file_store`] | File-backed snapshot and session stores |
//! | [`stores`] | Store construction and the session check |
//! | [`session`] | `unlock` / `lock` commands |
//! | [`add`] | Image intake and insert |
//! | [`list`] | `ls` command |
//! | [`rm`] | `rm` command |
//! | [`search`] | `search` command |

pub mod add;
pub mod config;
pub mod file_store;
pub mod list;
pub mod rm;
pub mod search;
pub mod session;
pub mod stores;
