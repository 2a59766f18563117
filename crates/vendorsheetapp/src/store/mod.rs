//! # Storage Layer
//!
//! This module defines the storage abstraction for vendorsheet. The
//! [`SheetBackend`] trait lets the application work against a real
//! spreadsheet or an in-memory one.
//!
//! ## Spreadsheet as Database
//!
//! Every entity lives in its own sheet, one record per row:
//! 1. **Row 1** is a header and is never interpreted.
//! 2. **Column A** holds the record identifier (`ITM-0042`).
//! 3. **Row numbers** are the only durable handle on a record. Rows never move
//!    once written.
//!
//! There are no indexes, no sequences and no locks. Everything is derived from
//! reading the sheet.
//!
//! ## Record Lifecycle
//!
//! - **Create**: read the identifier column, allocate `max + 1`
//!   ([`crate::ids`]), append the encoded row.
//! - **Update**: read the full range, merge the patch into the matching row,
//!   stamp `updated_at` where the entity has one, overwrite the full range.
//!   This is an unsynchronized read-modify-write: a concurrent writer's
//!   changes to any row of the sheet can be lost.
//! - **Delete**: blank the row in place through the [`RowClearer`]. Nothing
//!   shifts; the identifier cell becomes empty and listings skip the row.
//!
//! ## Implementations
//!
//! - [`http_backend::SheetsHttpBackend`]: Google Sheets v4 REST API.
//! - [`mem_backend::MemBackend`]: For testing logic without a network.
//!
//! ## Sheet Layout
//!
//! ```text
//! Items!A:H
//! ┌──────────┬────────────┬───────────────┬─────────────┬───┐
//! │ id       │ categoryId │ subCategoryId │ description │ … │  row 1 (header)
//! │ ITM-0001 │ CAT-0001   │ SUB-0001      │ Hex bolt    │ … │  row 2
//! │          │            │               │             │   │  row 3 (deleted)
//! │ ITM-0003 │ CAT-0002   │ SUB-0004      │ Cable tie   │ … │  row 4
//! └──────────┴────────────┴───────────────┴─────────────┴───┘
//! ```

pub mod backend;
pub mod clearer;
pub mod http_backend;
pub mod mem_backend;
pub mod range;
pub mod table;

pub use backend::SheetBackend;
pub use clearer::{coalesce_runs, ClearOptions, ClearReport, RowClearer, RowRun};
pub use range::SheetRange;
pub use table::{Located, SheetStore};
