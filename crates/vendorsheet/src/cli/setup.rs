use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "vendorsheet",
    bin_name = "vendorsheet",
    version,
    disable_help_subcommand = true,
    about = "Vendor and item master data kept in a spreadsheet",
    long_about = None,
    after_help = "Configuration is read from VENDORSHEET_* environment variables, then vendorsheet.toml."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print records as JSON instead of tables
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Config file (defaults to vendorsheet.toml in the user config dir)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Log every remote call
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Item categories
    #[command(alias = "cat", display_order = 1)]
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Subcategories within a category
    #[command(alias = "sub", display_order = 2)]
    Subcategory {
        #[command(subcommand)]
        action: SubCategoryAction,
    },

    /// Units of measure
    #[command(display_order = 3)]
    Uom {
        #[command(subcommand)]
        action: UomAction,
    },

    /// Catalogue items
    #[command(display_order = 4)]
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Vendors
    #[command(display_order = 5)]
    Vendor {
        #[command(subcommand)]
        action: VendorAction,
    },

    /// People to talk to at a vendor
    #[command(display_order = 6)]
    Contact {
        #[command(subcommand)]
        action: ContactAction,
    },

    /// Which vendor supplies which item, and on what terms
    #[command(display_order = 7)]
    Mapping {
        #[command(subcommand)]
        action: MappingAction,
    },

    /// Pinned search results
    #[command(display_order = 8)]
    Pin {
        #[command(subcommand)]
        action: PinAction,
    },

    /// Find items and the vendors that supply them
    #[command(alias = "s", display_order = 9)]
    Search {
        /// Words to look for (joined with spaces)
        keyword: Vec<String>,

        /// Only items in this category
        #[arg(long)]
        category: Option<String>,

        /// Only items in this subcategory
        #[arg(long)]
        sub_category: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    #[command(alias = "ls")]
    List,
    Get {
        id: String,
    },
    Create {
        /// Name words (joined with spaces)
        #[arg(required = true)]
        name: Vec<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    #[command(alias = "rm")]
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SubCategoryAction {
    #[command(alias = "ls")]
    List {
        /// Only subcategories of this category
        #[arg(long)]
        category: Option<String>,
    },
    Create {
        category_id: String,
        #[arg(required = true)]
        name: Vec<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    #[command(alias = "rm")]
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum UomAction {
    #[command(alias = "ls")]
    List,
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    #[command(alias = "rm")]
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ItemAction {
    #[command(alias = "ls")]
    List,
    Get {
        id: String,
    },
    Create {
        #[arg(long)]
        category: String,
        #[arg(long)]
        sub_category: String,
        #[arg(long)]
        uom: String,
        /// Description words (joined with spaces)
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// Create items from a JSON array of drafts, in one write
    Import {
        /// File holding `[{"categoryId", "subCategoryId", "description", "uomId"}, ...]`
        file: PathBuf,
    },
    Update {
        id: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        sub_category: Option<String>,
        #[arg(long)]
        uom: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete one or more items
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}

/// Optional vendor details, shared by create and update.
#[derive(Args, Debug, Default)]
pub struct VendorFields {
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub pin_code: Option<String>,
    #[arg(long)]
    pub gst: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum VendorAction {
    #[command(alias = "ls")]
    List,
    Get {
        id: String,
    },
    Create {
        #[arg(required = true)]
        name: Vec<String>,
        #[command(flatten)]
        fields: VendorFields,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: VendorFields,
        #[arg(long)]
        active: Option<bool>,
    },
    #[command(alias = "rm")]
    Delete {
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct ContactFields {
    #[arg(long)]
    pub designation: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub info: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ContactAction {
    /// Active contacts of a vendor
    #[command(alias = "ls")]
    List {
        vendor_id: String,
    },
    Add {
        vendor_id: String,
        name: String,
        #[command(flatten)]
        fields: ContactFields,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: ContactFields,
        #[arg(long)]
        active: Option<bool>,
    },
    #[command(alias = "rm")]
    Delete {
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct MappingFields {
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub uom: Option<String>,
    #[arg(long)]
    pub lead_time_days: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum MappingAction {
    /// Active item mappings of a vendor
    #[command(alias = "ls")]
    List {
        vendor_id: String,
    },
    Add {
        vendor_id: String,
        item_id: String,
        #[command(flatten)]
        fields: MappingFields,
    },
    Update {
        id: String,
        #[arg(long)]
        item: Option<String>,
        #[command(flatten)]
        fields: MappingFields,
        #[arg(long)]
        active: Option<bool>,
    },
    #[command(alias = "rm")]
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PinAction {
    #[command(alias = "ls")]
    List,
    Add {
        item_id: String,
        #[arg(long)]
        description: Option<String>,
        /// The search that found the item
        #[arg(long)]
        term: Option<String>,
    },
    #[command(alias = "rm")]
    Remove {
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vendorsheet").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_go_anywhere() {
        let cli = parse(&["category", "list", "--json", "-v"]);
        assert!(cli.json);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Category {
                action: CategoryAction::List
            }
        ));
    }

    #[test]
    fn multi_word_names_are_collected() {
        let cli = parse(&["vendor", "create", "Acme", "Fasteners", "--city", "Pune"]);
        match cli.command {
            Commands::Vendor {
                action: VendorAction::Create { name, fields },
            } => {
                assert_eq!(name.join(" "), "Acme Fasteners");
                assert_eq!(fields.city.as_deref(), Some("Pune"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn update_takes_explicit_active_value() {
        let cli = parse(&["uom", "update", "UOM-0001", "--active", "false"]);
        match cli.command {
            Commands::Uom {
                action: UomAction::Update { id, active, name, .. },
            } => {
                assert_eq!(id, "UOM-0001");
                assert_eq!(active, Some(false));
                assert_eq!(name, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn item_delete_accepts_many_ids() {
        let cli = parse(&["item", "rm", "ITM-0001", "ITM-0002"]);
        match cli.command {
            Commands::Item {
                action: ItemAction::Delete { ids },
            } => assert_eq!(ids, vec!["ITM-0001", "ITM-0002"]),
            other => panic!("unexpected {:?}", other),
        }
        assert!(Cli::try_parse_from(["vendorsheet", "item", "delete"]).is_err());
    }

    #[test]
    fn search_filters_are_optional() {
        let cli = parse(&["search", "hex", "bolt", "--category", "CAT-0001"]);
        match cli.command {
            Commands::Search {
                keyword,
                category,
                sub_category,
            } => {
                assert_eq!(keyword, vec!["hex", "bolt"]);
                assert_eq!(category.as_deref(), Some("CAT-0001"));
                assert_eq!(sub_category, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
