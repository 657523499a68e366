//! # Image Vault Core
//!
//! Shared, WASM-safe logic for Image Vault: data models, keyword
//! normalization, store abstraction, the vault store, the search
//! algorithm, and the session gate.
//!
//! This crate contains no filesystem I/O or other native-only
//! dependencies. It compiles to both native targets and
//! `wasm32-unknown-unknown`, where the snapshot and session stores map
//! onto `localStorage` and `sessionStorage`.

pub mod error;
pub mod gate;
pub mod keyword;
pub mod models;
pub mod search;
pub mod store;
pub mod vault;
