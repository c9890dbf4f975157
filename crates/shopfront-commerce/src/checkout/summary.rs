//! Order summaries and the email checkout link.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::CommerceError;

/// One line per cart entry: `"{name} x {qty}"`, or the bare SKU when the
/// product is no longer in the catalog.
pub fn order_summary(cart: &Cart, catalog: &Catalog) -> Vec<String> {
    cart.entries()
        .map(|(sku, qty)| match catalog.get(sku.as_str()) {
            Some(product) => format!("{} x {}", product.name, qty),
            None => sku.to_string(),
        })
        .collect()
}

/// Plain-text order body used by the email draft.
pub fn order_body(cart: &Cart, catalog: &Catalog) -> Result<String, CommerceError> {
    let total = cart.total(catalog)?;
    Ok(format!(
        "Order Summary:\n{}\nTotal: {}",
        order_summary(cart, catalog).join("\n"),
        total.display_amount()
    ))
}

/// Build a `mailto:` URL that opens a draft containing the order.
pub fn mailto_url(
    recipient: &str,
    subject: &str,
    cart: &Cart,
    catalog: &Catalog,
) -> Result<String, CommerceError> {
    let body = order_body(cart, catalog)?;
    Ok(format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(subject),
        urlencoding::encode(&body)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add("A");
        cart.add("A");
        cart.add("GHOST");
        cart
    }

    #[test]
    fn test_summary_falls_back_to_sku() {
        let catalog = sample_catalog();
        assert_eq!(
            order_summary(&cart(), &catalog),
            vec!["Inverter 5kW x 2".to_string(), "GHOST".to_string()]
        );
    }

    #[test]
    fn test_order_body() {
        let catalog = sample_catalog();
        assert_eq!(
            order_body(&cart(), &catalog).unwrap(),
            "Order Summary:\nInverter 5kW x 2\nGHOST\nTotal: 200.00"
        );
    }

    #[test]
    fn test_mailto_url_is_encoded() {
        let catalog = sample_catalog();
        let url = mailto_url("orders@example.com", "GIES Order", &cart(), &catalog).unwrap();

        assert!(url.starts_with("mailto:orders@example.com?subject=GIES%20Order&body="));
        assert!(url.contains("Order%20Summary%3A%0AInverter%205kW%20x%202"));
        assert!(!url.contains('\n'));
    }
}
