//! # Vendorsheet Architecture
//!
//! Vendorsheet is a **UI-agnostic master-data library** for categories, items,
//! vendors and the prices vendors quote for items. Its database is a
//! spreadsheet reached over the network. The `vendorsheet` binary is one
//! client of it; a web service would be another.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (vendorsheet crate)                                    │
//! │  - Parses arguments, renders tables or JSON, exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store, built explicitly from configuration      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per entity, plus search                       │
//! │  - Defaults, filters, joins; returns typed records          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SheetStore: records ⇄ rows, ids, update, delete          │
//! │  - SheetBackend trait: Sheets REST (prod), memory (tests)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Below the store sit the pure pieces: [`codec`] (cells ⇄ records), [`ids`]
//! (identifier allocation) and [`store::clearer`] (row-run coalescing and
//! bounded parallel clears).
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints and never exits. Remote calls go
//! through [`store::SheetBackend`] and nothing else.
//!
//! ## Testing Strategy
//!
//! 1. **Codec, ids, clearer**: plain unit tests.
//! 2. **Store and commands**: `#[tokio::test]` against
//!    [`store::mem_backend::MemBackend`], which mimics the Sheets API's
//!    ragged reads and in-place blanking.
//! 3. **API**: dispatch tests in `tests/`.
//! 4. **Sheets REST backend**: request shapes checked in `tests/` against a
//!    local axum server standing in for the API.
//! 5. **CLI**: argument parsing and rendering in the binary crate.
//!
//! ## Module Overview
//!
//! - [`api`]: Public facade
//! - [`commands`]: Business logic per entity
//! - [`codec`]: Row conventions and the [`codec::Record`] trait
//! - [`config`]: Layered configuration
//! - [`error`]: Error types
//! - [`ids`]: `PREFIX-0001` identifiers
//! - [`model`]: Records, drafts and patches
//! - [`store`]: Storage abstraction
//! - [`test_utils`]: Seeded in-memory workbooks for tests

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod store;
pub mod test_utils;
