//! # Command Layer
//!
//! This module contains the **business logic** of vendorsheet. Each entity has
//! its own submodule of async functions taking a [`SheetStore`] and returning
//! typed records.
//!
//! ## Role and Responsibilities
//!
//! Commands decide what the store can't:
//! - Which fields are required and what blank optional fields default to
//! - Which rows a listing hides (inactive contacts, pins without an item)
//! - How records join up (search)
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: No stdout, stderr or formatting
//! - **Row mechanics**: Identifier scans, range rewrites and row clearing
//!   belong to the store
//! - **Referential checks**: Foreign keys are plain strings. Creating an item
//!   under an unknown category succeeds, and deleting a vendor leaves its
//!   contacts and mappings in place
//!
//! ## Testing Strategy
//!
//! **This is where most of the testing lives.** Command tests run against
//! [`MemBackend`](crate::store::mem_backend::MemBackend) seeded with sheets.
//!
//! ## Command Modules
//!
//! - [`categories`], [`subcategories`], [`uoms`]: Classification
//! - [`items`]: Items, including bulk create and bulk delete
//! - [`vendors`], [`contacts`], [`mappings`]: Vendors and what they offer
//! - [`pinned`]: Pinned search results
//! - [`search`]: Keyword search joining every sheet

use crate::error::{Result, VendorSheetError};
use crate::store::ClearReport;
use serde::Serialize;

pub mod categories;
pub mod contacts;
pub mod items;
pub mod mappings;
pub mod pinned;
pub mod search;
pub mod subcategories;
pub mod uoms;
pub mod vendors;

/// Outcome of blanking one or more records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteResult {
    pub entity: &'static str,
    pub ids: Vec<String>,
    pub rows: usize,
    pub requests: usize,
}

impl DeleteResult {
    pub fn new(entity: &'static str, ids: Vec<String>, report: ClearReport) -> Self {
        Self {
            entity,
            ids,
            rows: report.rows,
            requests: report.chunks,
        }
    }
}

/// Reject a required field that is missing or only whitespace.
pub(crate) fn require(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(VendorSheetError::InvalidInput(format!(
            "{} is required",
            field
        )));
    }
    Ok(trimmed.to_string())
}

/// Blank optional vendor and contact fields are stored as `-`.
pub(crate) fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

pub(crate) fn or_blank(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// [`require`] for a patch field. An absent field stays absent.
pub(crate) fn require_opt(field: &str, value: &Option<String>) -> Result<Option<String>> {
    value.as_deref().map(|v| require(field, v)).transpose()
}

pub(crate) fn trimmed(value: &Option<String>) -> Option<String> {
    value.as_deref().map(|v| v.trim().to_string())
}
