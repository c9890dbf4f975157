//! Shopfront CLI - Command line storefront.
//!
//! Commands:
//! - `shopfront catalog` - Browse and filter products
//! - `shopfront cart` - Show and edit the cart
//! - `shopfront quote` - Estimate shipping and VAT
//! - `shopfront checkout` - Hand the cart off by email, CRM or payment provider

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, CatalogArgs, CheckoutArgs, QuoteArgs};

/// Shopfront - Browse the catalog, fill a cart and check out
#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// UI language code, overriding `[session] language`
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog(CatalogArgs),

    /// Show and edit the cart
    Cart(CartArgs),

    /// Estimate shipping and VAT for the cart
    Quote(QuoteArgs),

    /// Check out the cart
    Checkout(CheckoutArgs),
}

/// Install the log subscriber. `RUST_LOG` wins over the verbose flag.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, cli.lang.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Quote(args) => commands::quote::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_hint_names_a_real_flag() {
        let hint = commands::cart::SHIPPING_HINT;
        assert!(hint.contains("shopfront quote --country"));

        let cli = Cli::try_parse_from(["shopfront", "quote", "--country", "AE"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Quote(QuoteArgs { country: Some(ref c), .. }) if c == "AE"
        ));
        assert!(Cli::try_parse_from(["shopfront", "cart", "show", "--country", "AE"]).is_err());
    }

    #[test]
    fn test_lang_is_global() {
        let cli = Cli::try_parse_from(["shopfront", "cart", "show", "--lang", "ar"]).unwrap();
        assert_eq!(cli.lang.as_deref(), Some("ar"));

        let cli = Cli::try_parse_from(["shopfront", "--lang", "fr", "catalog"]).unwrap();
        assert_eq!(cli.lang.as_deref(), Some("fr"));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_checkout_without_subcommand() {
        let cli = Cli::try_parse_from(["shopfront", "checkout"]).unwrap();
        assert!(matches!(cli.command, Commands::Checkout(CheckoutArgs { command: None })));
    }
}
