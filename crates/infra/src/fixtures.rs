//! Catalog fixtures used to seed development stores.

use mercadofacil_core::ProductId;
use mercadofacil_products::Product;

use crate::repository::InMemoryProductRepository;

pub const FIXTURE_PRODUCT_ID: ProductId = ProductId::new(10);

/// Product 10, the catalog's reference entry.
pub fn fixture_product() -> Product {
    Product::new(FIXTURE_PRODUCT_ID, "7899137500100", "Produto Dez", "Empresa Dez", 450.00)
}

pub fn seeded_repository() -> InMemoryProductRepository {
    InMemoryProductRepository::with_products([fixture_product()])
}
