//! Cart commands.

use anyhow::Result;
use dialoguer::Confirm;
use serde_json::json;
use shopfront_commerce::storefront::{CartView, ShippingEstimate, Storefront};
use shopfront_commerce::ProductId;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::price;

pub(crate) const SHIPPING_HINT: &str =
    "Run `shopfront quote --country <CODE>` or set [session] country to estimate shipping.";

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CartCommand::Show) | None => show(ctx).await,
        Some(CartCommand::Add { sku, qty }) => add(&sku, qty, ctx).await,
        Some(CartCommand::Remove { sku }) => remove(&sku, ctx).await,
        Some(CartCommand::Clear { yes }) => clear(yes, ctx).await,
    }
}

async fn show(ctx: &Context) -> Result<()> {
    let shop = ctx.storefront().await?;
    let country = ctx.country(None);
    let view = shop.cart_view(country.as_ref(), ctx.config.session.include_vat)?;
    print_view(&shop, &view, ctx);
    Ok(())
}

async fn add(sku: &str, qty: u32, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront().await?;
    let sku = ProductId::new(sku);

    if shop.catalog.get(sku.as_str()).is_none() {
        ctx.output
            .warn(&format!("'{}' is not in the catalog and will not be priced", sku));
    }

    let mut quantity = 0;
    for _ in 0..qty {
        quantity = shop.add_to_cart(sku.clone());
    }

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "sku": sku, "quantity": quantity }));
        return Ok(());
    }

    let name = shop
        .catalog
        .get(sku.as_str())
        .map(|p| p.name.as_str())
        .unwrap_or(sku.as_str());
    ctx.output
        .success(&format!("{} x {} in cart", name, quantity));
    Ok(())
}

async fn remove(sku: &str, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront().await?;
    let removed = shop.remove_from_cart(&ProductId::new(sku));

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "sku": sku, "removed": removed }));
    } else if removed {
        ctx.output.success(&format!("Removed {} from cart", sku));
    } else {
        ctx.output.warn(&format!("{} was not in the cart", sku));
    }
    Ok(())
}

async fn clear(yes: bool, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront().await?;

    if shop.cart.cart().is_empty() {
        ctx.output.info("Cart is already empty.");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} item(s) from the cart?",
                shop.cart.cart().item_count()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cart left unchanged");
            return Ok(());
        }
    }

    shop.clear_cart();
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "cleared": true }));
    } else {
        ctx.output.success("Cart cleared");
    }
    Ok(())
}

/// Print a rendered cart, including its shipping estimate.
pub(crate) fn print_view(shop: &Storefront, view: &CartView<'_>, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&view_json(view));
        return;
    }

    ctx.output
        .header(shop.dictionary.text_or("cart.title", "Your Cart"));

    if view.is_empty() {
        ctx.output
            .info(shop.dictionary.text_or("cart.empty", "Your cart is empty."));
    }

    for line in &view.lines {
        ctx.output.table_row(
            &[
                line.product.sku.as_str(),
                &format!("{} \u{00d7} {}", line.product.name, line.quantity),
                &price(&line.line_total.display()),
            ],
            &[12, 36, 12],
        );
    }

    match &view.shipping {
        ShippingEstimate::Quoted(pricing) => {
            ctx.output.kv("Total", &pricing.breakdown());
        }
        ShippingEstimate::NoRule(country) => {
            ctx.output.kv("Total", &view.subtotal.display());
            ctx.output
                .warn(&format!("No shipping rule for {}", country));
        }
        ShippingEstimate::Pending => {
            ctx.output.kv("Total", &view.subtotal.display());
            ctx.output.info(SHIPPING_HINT);
        }
        ShippingEstimate::Unavailable => {
            ctx.output.kv("Total", &view.subtotal.display());
        }
    }
}

fn view_json(view: &CartView<'_>) -> serde_json::Value {
    let lines: Vec<_> = view
        .lines
        .iter()
        .map(|line| {
            json!({
                "sku": line.product.sku,
                "name": line.product.name,
                "quantity": line.quantity,
                "line_total": line.line_total,
            })
        })
        .collect();

    let shipping = match &view.shipping {
        ShippingEstimate::Quoted(pricing) => json!(pricing),
        ShippingEstimate::NoRule(country) => json!({ "error": "no_rule", "country": country }),
        ShippingEstimate::Pending => json!({ "error": "no_country" }),
        ShippingEstimate::Unavailable => serde_json::Value::Null,
    };

    json!({
        "lines": lines,
        "subtotal": view.subtotal,
        "shipping": shipping,
    })
}
