//! # Vendorsheet CLI Architecture
//!
//! Vendorsheet ships with a command-line client, but the binary is thin: the
//! CLI lives in `src/cli/`, while this file only invokes `cli::run()` and
//! handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/vendorsheetapp/`: Library with the store, commands and API facade
//! - `crates/vendorsheet/`: This CLI tool, depends on the library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/vendorsheet/src/cli/)                    │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging, config and runtime wiring (commands.rs)         │
//! │  - One handler per subcommand (handlers.rs)                 │
//! │  - Tables and JSON output (render.rs)                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/vendorsheetapp/src/api.rs)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns
//! argument parsing, configuration lookup, logging setup, rendering and exit
//! codes.
//!
//! ## Testing Approach
//!
//! - **Handlers**: run against the library's in-memory workbook and check the
//!   rendered output.
//! - **Rendering**: canned records in, strings out.
//! - **Binary** (`tests/`): `assert_cmd` runs for help text and configuration
//!   errors. Nothing in the test suite talks to a real spreadsheet.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
