//! Shipping and VAT estimate.

use anyhow::{bail, Result};

use super::cart::print_view;
use super::QuoteArgs;
use crate::context::Context;

/// Run the quote command.
pub async fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront().await?;

    let Some(table) = &shop.config.shipping else {
        bail!("The store has no shipping configuration");
    };

    let Some(country) = ctx.country(args.country.as_deref()) else {
        let known: Vec<&str> = table.countries().map(|c| c.as_str()).collect();
        bail!("No destination country given (known: {})", known.join(", "));
    };

    let include_vat = args.include_vat(ctx.config.session.include_vat);
    let view = shop.cart_view(Some(&country), include_vat)?;
    print_view(&shop, &view, ctx);
    Ok(())
}
