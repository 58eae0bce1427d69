//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod products;
pub mod session;

use clap::{Args, Subcommand};
use cosmetica_auth::Role;
use cosmetica_catalog::catalog::{ProductCategory, SkinType};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List products, optionally filtered.
    List(ListArgs),
    /// Show every field of one product.
    Show {
        /// Product ID.
        id: String,
    },
    /// Add a product (admin).
    Add(AddArgs),
    /// Edit a product (admin). Fields not given keep their current value.
    Update(UpdateArgs),
    /// Delete a product (admin).
    Delete {
        /// Product ID.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Show catalog counters.
    Stats,
}

/// Filters for `products list`.
#[derive(Args)]
pub struct ListArgs {
    /// Text matched against name, brand and description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only this category.
    #[arg(long)]
    pub category: Option<ProductCategory>,

    /// Only products suited to this skin type.
    #[arg(long)]
    pub skin_type: Option<SkinType>,
}

/// Arguments for `products add`.
#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub brand: String,

    #[arg(long)]
    pub price: f64,

    #[command(flatten)]
    pub fields: OptionalFields,
}

/// Arguments for `products update`.
#[derive(Args)]
pub struct UpdateArgs {
    /// Product ID.
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub price: Option<f64>,

    #[command(flatten)]
    pub fields: OptionalFields,
}

/// Product fields shared by `add` and `update`.
#[derive(Args, Default)]
pub struct OptionalFields {
    #[arg(long)]
    pub category: Option<ProductCategory>,

    /// Image URL; a placeholder is used when left empty.
    #[arg(long)]
    pub image_url: Option<String>,

    /// Mark as available.
    #[arg(long, conflicts_with = "out_of_stock")]
    pub in_stock: bool,

    /// Mark as unavailable.
    #[arg(long)]
    pub out_of_stock: bool,

    /// Comma-separated ingredient list.
    #[arg(long)]
    pub ingredients: Option<String>,

    /// Comma-separated benefit list.
    #[arg(long)]
    pub benefits: Option<String>,

    /// Comma-separated skin types, e.g. `Dry,Oily`.
    #[arg(long, value_delimiter = ',')]
    pub skin_types: Option<Vec<SkinType>>,

    #[arg(long)]
    pub usage: Option<String>,

    #[arg(long)]
    pub volume: Option<String>,

    /// Average rating, 0 to 5.
    #[arg(long)]
    pub rating: Option<f64>,

    #[arg(long)]
    pub reviews: Option<u32>,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// Replace the catalog with the sample products.
    Reset {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Email to log in as. Not verified.
    #[arg(short, long)]
    pub email: String,

    /// Role for this session; defaults to `session.default_role`.
    #[arg(short, long)]
    pub role: Option<Role>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
