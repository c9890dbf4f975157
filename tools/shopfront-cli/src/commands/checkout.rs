//! Checkout commands.

use anyhow::{bail, Context as _, Result};
use serde_json::json;
use shopfront_commerce::checkout::{
    mailto_url, order_summary, paypal_order_request, paypal_sdk_url, WebhookPayload,
};
use shopfront_commerce::config::StoreConfig;
use shopfront_commerce::storefront::Storefront;
use shopfront_data::post_best_effort;

use super::{CheckoutArgs, CheckoutCommand};
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront().await?;

    if shop.cart.cart().is_empty() {
        ctx.output.warn("The cart is empty");
    }

    match args.command {
        None => options(&shop, ctx),
        Some(CheckoutCommand::Email) => email(&shop, ctx),
        Some(CheckoutCommand::Quote) => quote(&shop, ctx).await,
        Some(CheckoutCommand::Stripe) => stripe(&shop, ctx).await,
        Some(CheckoutCommand::Paypal { order: None }) => paypal_start(&shop, ctx),
        Some(CheckoutCommand::Paypal { order: Some(order) }) => {
            paypal_complete(&mut shop, &order, ctx).await
        }
    }
}

/// Checkout options for this store as `(subcommand, label)` pairs.
fn checkout_options(config: &StoreConfig) -> Vec<(String, String)> {
    let mut options = Vec::new();
    if config.order_email().is_some() {
        options.push(("email".to_string(), "Order by email".to_string()));
    }
    options.push(("quote".to_string(), "Request a quote".to_string()));
    for provider in config.payment_providers() {
        options.push((
            provider.name().to_lowercase(),
            format!("Pay with {}", provider.name()),
        ));
    }
    options
}

fn options(shop: &Storefront, ctx: &Context) -> Result<()> {
    let options = checkout_options(&shop.config);

    if ctx.output.is_json() {
        let commands: Vec<_> = options.iter().map(|(command, _)| command).collect();
        ctx.output.json(&json!({ "options": commands }));
        return Ok(());
    }

    ctx.output.header("Checkout");
    for (command, label) in &options {
        ctx.output.kv(label, &format!("shopfront checkout {}", command));
    }
    Ok(())
}

fn email(shop: &Storefront, ctx: &Context) -> Result<()> {
    let Some(recipient) = shop.config.order_email() else {
        bail!("No order email configured (set orderEmail in the store config)");
    };

    let url = mailto_url(
        recipient,
        shop.config.order_subject(),
        shop.cart.cart(),
        &shop.catalog,
    )?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "mailto": url }));
    } else {
        ctx.output.info("Open this link to send the order by email:");
        println!("{}", url);
    }
    Ok(())
}

async fn quote(shop: &Storefront, ctx: &Context) -> Result<()> {
    let payload = WebhookPayload::quote_request(shop.cart.cart(), &shop.catalog);
    let delivered = post_best_effort(&ctx.client, shop.config.webhook_url(), &payload).await;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "payload": payload, "delivered": delivered }));
        return Ok(());
    }

    ctx.output.header("Quote request");
    for line in order_summary(shop.cart.cart(), &shop.catalog) {
        ctx.output.list_item(&line);
    }
    report_delivery(delivered, shop, ctx);
    Ok(())
}

async fn stripe(shop: &Storefront, ctx: &Context) -> Result<()> {
    if shop.config.stripe_key().is_none() {
        bail!("Stripe is not configured (set stripePublishableKey in the store config)");
    }

    let payload = WebhookPayload::stripe_intent(shop.cart.cart(), &shop.catalog)?;
    let delivered = post_best_effort(&ctx.client, shop.config.webhook_url(), &payload).await;

    let links: Vec<_> = shop
        .cart
        .cart()
        .lines(&shop.catalog)?
        .into_iter()
        .filter_map(|line| {
            line.product
                .payment_link
                .as_deref()
                .map(|link| (line.product.name.clone(), link.to_string()))
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "payload": payload,
            "delivered": delivered,
            "payment_links": links.iter().map(|(_, link)| link).collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    report_delivery(delivered, shop, ctx);
    ctx.output.warn(
        "Stripe checkout requires a Payment Link or a backend that creates Checkout Sessions.",
    );
    for (name, link) in &links {
        ctx.output.kv(name, link);
    }
    Ok(())
}

fn paypal_start(shop: &Storefront, ctx: &Context) -> Result<()> {
    let Some(client_id) = shop.config.paypal_client_id() else {
        bail!("PayPal is not configured (set paypalClientId in the store config)");
    };

    let sdk_url = paypal_sdk_url(client_id, shop.catalog.currency());
    let order = paypal_order_request(shop.cart_total()?);

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "sdk_url": sdk_url, "create_order": order }));
        return Ok(());
    }

    ctx.output.header("PayPal checkout");
    ctx.output.kv("SDK", &sdk_url);
    ctx.output.kv("Order", &order.to_string());
    ctx.output
        .info("After capture, run `shopfront checkout paypal --order <details>`.");
    Ok(())
}

async fn paypal_complete(shop: &mut Storefront, order: &str, ctx: &Context) -> Result<()> {
    let details = parse_order(order)?;
    let payload = WebhookPayload::paypal_checkout(shop.cart.cart(), details);
    let delivered = post_best_effort(&ctx.client, shop.config.webhook_url(), &payload).await;

    shop.clear_cart();

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "payload": payload, "delivered": delivered }));
        return Ok(());
    }

    report_delivery(delivered, shop, ctx);
    ctx.output.success("Payment completed. Thank you!");
    Ok(())
}

/// Captured order details, inline or from `@path`.
fn parse_order(order: &str) -> Result<serde_json::Value> {
    let content = match order.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read order file: {}", path))?,
        None => order.to_string(),
    };
    serde_json::from_str(&content).context("Order details are not valid JSON")
}

fn report_delivery(delivered: bool, shop: &Storefront, ctx: &Context) {
    match (shop.config.webhook_url(), delivered) {
        (None, _) => ctx.output.debug("No CRM webhook configured"),
        (Some(_), true) => ctx.output.success("Sent to CRM"),
        (Some(_), false) => ctx.output.warn("CRM webhook failed; continuing"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inline_order() {
        let order = parse_order(r#"{"id":"5O190127TN364715T","status":"COMPLETED"}"#).unwrap();
        assert_eq!(order["status"], "COMPLETED");
    }

    #[test]
    fn test_parse_order_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order.json");
        std::fs::write(&path, r#"{"id":"ABC"}"#).unwrap();

        let order = parse_order(&format!("@{}", path.display())).unwrap();
        assert_eq!(order["id"], "ABC");
    }

    #[test]
    fn test_checkout_options_follow_config() {
        let commands = |config: &StoreConfig| -> Vec<String> {
            checkout_options(config).into_iter().map(|(c, _)| c).collect()
        };

        assert_eq!(commands(&StoreConfig::default()), vec!["quote"]);

        let config: StoreConfig = serde_json::from_str(
            r#"{"orderEmail":"sales@example.com","paypalClientId":"sb","stripePublishableKey":"pk_test"}"#,
        )
        .unwrap();
        assert_eq!(commands(&config), vec!["email", "quote", "paypal", "stripe"]);
    }

    #[test]
    fn test_parse_invalid_order() {
        assert!(parse_order("not json").is_err());
    }
}
