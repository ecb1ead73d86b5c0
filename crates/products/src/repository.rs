//! Storage port for products.

use std::sync::Arc;

use mercadofacil_core::{DomainResult, ProductId};

use crate::product::Product;

/// Key/value storage of products keyed by [`ProductId`].
///
/// `update` owns the committed representation: callers must use the product it
/// returns rather than the one they passed in. Implementations must keep
/// concurrent updates of different ids independent.
pub trait ProductRepository: Send + Sync {
    /// Persist a new product under a freshly allocated id.
    ///
    /// Never replaces a stored product; fails with `Storage` when no id is left.
    fn save(&self, product: Product) -> DomainResult<Product>;
    fn find(&self, id: ProductId) -> Option<Product>;
    fn find_all(&self) -> DomainResult<Vec<Product>>;
    /// Replace the stored product with the same id. Fails with `NotFound` if absent.
    fn update(&self, product: Product) -> DomainResult<Product>;
    fn delete(&self, product: &Product) -> DomainResult<()>;
    fn delete_all(&self) -> DomainResult<()>;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn save(&self, product: Product) -> DomainResult<Product> {
        (**self).save(product)
    }

    fn find(&self, id: ProductId) -> Option<Product> {
        (**self).find(id)
    }

    fn find_all(&self) -> DomainResult<Vec<Product>> {
        (**self).find_all()
    }

    fn update(&self, product: Product) -> DomainResult<Product> {
        (**self).update(product)
    }

    fn delete(&self, product: &Product) -> DomainResult<()> {
        (**self).delete(product)
    }

    fn delete_all(&self) -> DomainResult<()> {
        (**self).delete_all()
    }
}
