//! # Receipt Rendering
//!
//! Fixed-width text receipts for placed orders.
//!
//! ## Layout (41 columns)
//! ```text
//! =========================================
//!                   TAIGA
//! =========================================
//! Customer: Alice
//! Order ID: A1B2C3D4
//! -----------------------------------------
//! Item            Qty Unit Price Line Total
//! -----------------------------------------
//! Laptop Pro        1   $1299.99   $1299.99
//! Java Mug          2     $12.00     $24.00
//!   (20% off, was $15.00)
//! -----------------------------------------
//! Subtotal                         $1329.99
//! Savings                             $6.00
//! TOTAL                            $1323.99
//! =========================================
//!     Thank you for shopping at Taiga!
//! ```
//!
//! ## Rules
//! - Item column is 15 wide; longer names are truncated to fit
//! - The unit price column shows the EFFECTIVE price; discounted lines
//!   get an indented annotation with the percentage and the list price
//! - The Savings row appears only when the order actually saved money
//! - Amounts render through `Money`'s Display, two decimals everywhere
//! - No trailing spaces; a single trailing newline ends the receipt
//!
//! Rendering reads only frozen `Order` state, so the same order always
//! produces byte-identical output.

use crate::order::Order;

/// Total receipt width in characters.
const RECEIPT_WIDTH: usize = 41;

/// Width of the item name column.
const NAME_WIDTH: usize = 15;

/// Store name printed in the receipt header.
const STORE_NAME: &str = "TAIGA";

/// Closing line printed under the final rule.
const FOOTER: &str = "Thank you for shopping at Taiga!";

// =============================================================================
// Rendering
// =============================================================================

/// Renders an order as a receipt. Called via `Order::generate_receipt`.
pub(crate) fn render(order: &Order) -> String {
    let heavy = "=".repeat(RECEIPT_WIDTH);
    let light = "-".repeat(RECEIPT_WIDTH);

    let mut out: Vec<String> = Vec::new();

    out.push(heavy.clone());
    out.push(center(STORE_NAME));
    out.push(heavy.clone());
    out.push(format!("Customer: {}", order.customer_name()));
    out.push(format!("Order ID: {}", order.id()));
    out.push(light.clone());
    out.push(format!(
        "{:<15} {:>3} {:>10} {:>10}",
        "Item", "Qty", "Unit Price", "Line Total"
    ));
    out.push(light.clone());

    for line in order.lines() {
        let product = line.product();
        out.push(format!(
            "{:<15} {:>3} {:>10} {:>10}",
            fit_name(product.name()),
            line.quantity(),
            product.effective_price().to_string(),
            line.line_total().to_string(),
        ));

        if product.has_discount() {
            out.push(format!(
                "  ({} off, was {})",
                product.discount_rate(),
                product.price(),
            ));
        }
    }

    out.push(light);
    out.push(total_row("Subtotal", &order.subtotal().to_string()));
    if order.savings().is_positive() {
        out.push(total_row("Savings", &order.savings().to_string()));
    }
    out.push(total_row("TOTAL", &order.total().to_string()));
    out.push(heavy);
    out.push(center(FOOTER));

    let mut receipt = out.join("\n");
    receipt.push('\n');
    receipt
}

// =============================================================================
// Helpers
// =============================================================================

/// Centers text in the receipt width, padding on the left only so no
/// line carries trailing spaces.
fn center(text: &str) -> String {
    let pad = RECEIPT_WIDTH.saturating_sub(text.len()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Truncates a product name to the item column width.
fn fit_name(name: &str) -> String {
    name.chars().take(NAME_WIDTH).collect()
}

/// A totals-block row: label left in 31, amount right in 10.
fn total_row(label: &str, amount: &str) -> String {
    format!("{:<31}{:>10}", label, amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
