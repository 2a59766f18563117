//! # Configuration
//!
//! Configuration is managed by [`confique`], which layers environment
//! variables over an optional TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `VENDORSHEET_SPREADSHEET_ID`, `VENDORSHEET_ACCESS_TOKEN`, etc.
//! 2. **Config file**: `vendorsheet.toml`, wherever the caller points [`SheetConfig::load`].
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `spreadsheet_id` | (required) | Spreadsheet holding every sheet |
//! | `api_base_url` | `https://sheets.googleapis.com` | Sheets API root |
//! | `access_token` | none | OAuth bearer token sent with every request |
//! | `request_timeout_secs` | `30` | Per-request HTTP timeout |
//! | `clear_chunk_size` | `50` | Row runs per batched clear request |
//! | `clear_parallel_limit` | `5` | Clear requests in flight at once |

use crate::error::Result;
use crate::store::clearer::ClearOptions;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "vendorsheet.toml";

/// Connection and tuning settings for the spreadsheet store.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    /// Id of the spreadsheet that holds every sheet.
    #[config(env = "VENDORSHEET_SPREADSHEET_ID")]
    pub spreadsheet_id: String,

    /// Root of the Sheets REST API.
    #[config(env = "VENDORSHEET_API_BASE_URL", default = "https://sheets.googleapis.com")]
    pub api_base_url: String,

    /// OAuth bearer token. When absent, requests are sent unauthenticated.
    #[config(env = "VENDORSHEET_ACCESS_TOKEN")]
    pub access_token: Option<String>,

    #[config(env = "VENDORSHEET_REQUEST_TIMEOUT_SECS", default = 30)]
    pub request_timeout_secs: u64,

    /// Row runs per batched clear request.
    #[config(env = "VENDORSHEET_CLEAR_CHUNK_SIZE", default = 50)]
    pub clear_chunk_size: usize,

    /// Clear requests in flight at once.
    #[config(env = "VENDORSHEET_CLEAR_PARALLEL_LIMIT", default = 5)]
    pub clear_parallel_limit: usize,
}

impl SheetConfig {
    /// Minimal config for a spreadsheet, everything else at its default.
    pub fn for_spreadsheet(spreadsheet_id: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            api_base_url: "https://sheets.googleapis.com".to_string(),
            access_token: None,
            request_timeout_secs: 30,
            clear_chunk_size: 50,
            clear_parallel_limit: 5,
        }
    }

    /// Load from the environment, then `file` if it exists, then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(file) = file {
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }

    pub fn clear_options(&self) -> ClearOptions {
        ClearOptions {
            chunk_size: self.clear_chunk_size,
            parallel_limit: self.clear_parallel_limit,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The API root without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
