//! # CLI Behavior
//!
//! This is **one possible UI client** for vendorsheet, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Shape
//!
//! Every operation is `vendorsheet <entity> <action>`:
//!
//! ```text
//! vendorsheet category list
//! vendorsheet item create --category CAT-0001 --sub-category SUB-0001 --uom UOM-0001 Hex bolt M8
//! vendorsheet contact add VND-0001 "Asha" --phone 98450
//! vendorsheet item delete ITM-0004 ITM-0007
//! ```
//!
//! `search` and `pin` sit beside the entities. `--json` swaps the tables for
//! the records as JSON, in the same field names the sheets use.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Logging, configuration and dispatch
//! - `handlers`: One function per subcommand, calling the API
//! - `render`: Tables, record views and JSON
//! - `styles`: Terminal styling

mod commands;
mod handlers;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
