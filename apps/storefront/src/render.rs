//! # Terminal Rendering
//!
//! Tables and summaries for the command loop. Everything here is plain
//! `format!` alignment; the receipt itself is rendered by taiga-core and
//! passed through untouched.

use taiga_core::{Cart, Order};

use crate::catalog::Catalog;

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  help              Show this help
  list              Show the product catalog
  add <id> [qty]    Add a product to the cart
  remove <id>       Remove a product from the cart
  cart              Show the cart
  clear             Empty the cart
  checkout <name>   Place the order and print the receipt
  export            Print the last order as JSON
  quit              Leave the store";

/// Renders the catalog as an aligned table.
pub fn catalog_table(catalog: &Catalog) -> String {
    let mut rows = Vec::new();

    rows.push(format!(
        "{:<6}{:<22}{:<12}{:>10}",
        "ID", "Name", "Category", "Price"
    ));
    rows.push("-".repeat(50));

    for product in catalog.products() {
        let mut row = format!(
            "{:<6}{:<22}{:<12}{:>10}",
            product.id(),
            product.name(),
            product.category(),
            product.price().to_string(),
        );
        if product.has_discount() {
            row.push_str(&format!("  ({} off)", product.discount_rate()));
        }
        rows.push(row);
    }

    rows.join("\n")
}

/// Renders the cart as an aligned table with a totals block.
pub fn cart_table(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }

    let mut rows = Vec::new();

    rows.push(format!("{:<20}{:>5}{:>12}", "Item", "Qty", "Total"));
    rows.push("-".repeat(37));

    for line in cart.lines() {
        rows.push(format!(
            "{:<20}{:>5}{:>12}",
            line.product().name(),
            line.quantity(),
            line.line_total().to_string(),
        ));
    }

    rows.push("-".repeat(37));
    rows.push(format!("Items: {}", cart.total_quantity()));
    if cart.savings().is_positive() {
        rows.push(format!("Subtotal: {}", cart.subtotal()));
        rows.push(format!("Savings: {}", cart.savings()));
    }
    rows.push(format!("Total: {}", cart.total()));

    rows.join("\n")
}

/// Renders the short console summary printed right after checkout,
/// ahead of the full receipt.
pub fn order_summary(order: &Order) -> String {
    let mut rows = Vec::new();

    rows.push(format!("--- ORDER {} ---", order.id()));
    rows.push(format!("Customer: {}", order.customer_name()));
    for line in order.lines() {
        rows.push(format!(
            "{} x{} = {}",
            line.product().name(),
            line.quantity(),
            line.line_total(),
        ));
    }
    rows.push(format!("TOTAL: {}", order.total()));

    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use taiga_core::{Customer, SequentialIds};

    #[test]
    fn test_catalog_table_lists_all_products() {
        let table = catalog_table(&sample_catalog().unwrap());

        assert!(table.contains("P001"));
        assert!(table.contains("Laptop Pro"));
        assert!(table.contains("$1299.99"));
        assert!(table.contains("(20% off)"));
        assert!(table.contains("(15% off)"));
        assert_eq!(table.lines().count(), 8); // header + rule + 6 products
    }

    #[test]
    fn test_cart_table_empty() {
        assert_eq!(cart_table(&Cart::new()), "Your cart is empty.");
    }

    #[test]
    fn test_cart_table_with_lines() {
        let catalog = sample_catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(catalog.find("P001").unwrap());
        cart.add(catalog.find("P003").unwrap());
        cart.add(catalog.find("P003").unwrap());

        let table = cart_table(&cart);

        assert!(table.contains("Items: 3"));
        assert!(table.contains("Subtotal: $1329.99"));
        assert!(table.contains("Savings: $6.00"));
        assert!(table.contains("Total: $1323.99"));
    }

    #[test]
    fn test_cart_table_hides_savings_without_discounts() {
        let catalog = sample_catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(catalog.find("P001").unwrap());

        let table = cart_table(&cart);

        assert!(!table.contains("Savings"));
        assert!(table.contains("Total: $1299.99"));
    }

    #[test]
    fn test_order_summary() {
        let catalog = sample_catalog().unwrap();
        let mut alice = Customer::with_ids("Alice", &SequentialIds::new("CUST"));
        alice.add_to_cart(catalog.find("P001").unwrap());
        alice.add_to_cart(catalog.find("P003").unwrap());
        alice.add_to_cart(catalog.find("P003").unwrap());
        let order = alice.place_order_with(&SequentialIds::new("ORD")).unwrap();

        let expected = "\
--- ORDER ORD-1 ---
Customer: Alice
Laptop Pro x1 = $1299.99
Java Mug x2 = $24.00
TOTAL: $1323.99";

        assert_eq!(order_summary(&order), expected);
    }
}
