//! # Catalog
//!
//! The in-memory product catalog the storefront sells from.
//!
//! Lookup is by product id, case-insensitive, so `add p001` works the
//! same as `add P001`. The catalog never changes while the session runs.

use taiga_core::{Product, ValidationError};

/// A fixed list of products available for sale.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Finds a product by id, ignoring ASCII case.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.id().eq_ignore_ascii_case(id))
    }

    /// All products, in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Builds the demo catalog the store opens with.
///
/// Six products across three categories; the mug and the lamp carry
/// discounts so receipts exercise the annotation path.
pub fn sample_catalog() -> Result<Catalog, ValidationError> {
    Ok(Catalog::new(vec![
        Product::new("P001", "Laptop Pro", "Electronics", 1299.99)?,
        Product::new("P002", "Wireless Mouse", "Electronics", 35.50)?,
        Product::with_discount("P003", "Java Mug", "Kitchen", 15.00, 0.20)?,
        Product::new("P004", "4K Monitor", "Electronics", 350.00)?,
        Product::new("P005", "Ergo Chair", "Office", 275.00)?,
        Product::with_discount("P006", "Desk Lamp", "Office", 45.00, 0.15)?,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_contents() {
        let catalog = sample_catalog().unwrap();

        assert_eq!(catalog.len(), 6);
        assert!(!catalog.is_empty());

        let mug = catalog.find("P003").unwrap();
        assert_eq!(mug.name(), "Java Mug");
        assert!(mug.has_discount());
        assert_eq!(mug.effective_price().to_string(), "$12.00");
    }

    #[test]
    fn test_find_ignores_case() {
        let catalog = sample_catalog().unwrap();

        assert!(catalog.find("p001").is_some());
        assert!(catalog.find("P001").is_some());
        assert!(catalog.find("p999").is_none());
    }
}
