//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod quote;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: Option<CatalogCommand>,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products, optionally filtered.
    List {
        /// Only show this category.
        #[arg(long, default_value = "")]
        category: String,

        /// Minimum capacity in kW.
        #[arg(long, default_value = "")]
        min_kw: String,

        /// Maximum capacity in kW.
        #[arg(long, default_value = "")]
        max_kw: String,
    },
    /// List product categories.
    Categories,
    /// Show one product.
    Show {
        /// SKU or a `#sku=XYZ` deep link.
        sku: String,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a product to the cart.
    Add {
        /// Product SKU.
        sku: String,

        /// Units to add.
        #[arg(short, long, default_value = "1")]
        qty: u32,
    },
    /// Remove a product from the cart.
    Remove {
        /// Product SKU.
        sku: String,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Destination country code.
    #[arg(long)]
    pub country: Option<String>,

    /// Include VAT in the estimate.
    #[arg(long, conflicts_with = "no_vat")]
    pub vat: bool,

    /// Exclude VAT from the estimate.
    #[arg(long)]
    pub no_vat: bool,
}

impl QuoteArgs {
    /// VAT flag, falling back to the session default.
    pub fn include_vat(&self, default: bool) -> bool {
        if self.vat {
            true
        } else if self.no_vat {
            false
        } else {
            default
        }
    }
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Without a subcommand, list the checkout options the store offers.
    #[command(subcommand)]
    pub command: Option<CheckoutCommand>,
}

#[derive(Subcommand)]
pub enum CheckoutCommand {
    /// Print a mailto link with the order.
    Email,
    /// Send a quote request to the CRM.
    Quote,
    /// Start a Stripe checkout.
    Stripe,
    /// Start or complete a PayPal checkout.
    Paypal {
        /// Captured order details (JSON, or @path to a JSON file).
        #[arg(long)]
        order: Option<String>,
    },
}
