//! Catalog browsing commands.

use anyhow::Result;
use shopfront_commerce::catalog::{deep_link_sku, Product};
use shopfront_commerce::search::FilterCriteria;
use shopfront_commerce::CommerceError;

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;
use crate::output::{capacity, price};

const WIDTHS: [usize; 5] = [12, 28, 14, 8, 12];

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CatalogCommand::List {
            category,
            min_kw,
            max_kw,
        }) => list(FilterCriteria::from_inputs(&category, &min_kw, &max_kw), ctx).await,
        None => list(FilterCriteria::default(), ctx).await,
        Some(CatalogCommand::Categories) => categories(ctx).await,
        Some(CatalogCommand::Show { sku }) => show(&sku, ctx).await,
    }
}

async fn list(criteria: FilterCriteria, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront().await?;
    let products = shop.visible_products(&criteria);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(shop.dictionary.text_or("nav.products", "Products"));

    if products.is_empty() {
        ctx.output.info("No products match the current filters.");
        return Ok(());
    }

    ctx.output
        .table_row(&["SKU", "NAME", "CATEGORY", "KW", "PRICE"], &WIDTHS);
    for product in &products {
        ctx.output.table_row(
            &[
                product.sku.as_str(),
                &product.name,
                product.category.as_deref().unwrap_or("-"),
                &capacity(product.kw),
                &price(&product.price.display()),
            ],
            &WIDTHS,
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!(
        "Showing {} of {} product(s)",
        products.len(),
        shop.catalog.len()
    ));

    Ok(())
}

async fn categories(ctx: &Context) -> Result<()> {
    let shop = ctx.storefront().await?;
    let categories = shop.catalog.categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    if categories.is_empty() {
        ctx.output.info("No categories.");
    }
    for category in categories {
        ctx.output.list_item(category);
    }
    Ok(())
}

async fn show(sku_or_link: &str, ctx: &Context) -> Result<()> {
    let sku = deep_link_sku(sku_or_link).unwrap_or(sku_or_link);
    let shop = ctx.storefront().await?;

    let product = shop
        .catalog
        .get(sku)
        .ok_or_else(|| CommerceError::ProductNotFound(sku.to_string()))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    print_product(product, shop.language.code(), ctx);
    Ok(())
}

fn print_product(product: &Product, lang: &str, ctx: &Context) {
    ctx.output.header(&product.name);
    ctx.output.kv("SKU", product.sku.as_str());
    ctx.output.kv("Price", &price(&product.price.display()));
    if let Some(category) = &product.category {
        ctx.output.kv("Category", category);
    }
    ctx.output.kv("Capacity", &capacity(product.kw));
    if let Some(weight) = product.weight_kg {
        ctx.output.kv("Weight", &format!("{} kg", weight));
    }
    if let Some(description) = &product.description {
        ctx.output.kv("Description", description);
    }
    ctx.output.kv("Page", &product.page_path(lang));
    if let Some(link) = &product.payment_link {
        ctx.output.kv("Buy now", link);
    }
}
