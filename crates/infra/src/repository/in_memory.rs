use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use mercadofacil_core::{DomainError, DomainResult, Entity, ProductId};
use mercadofacil_products::{Product, ProductRepository};

#[derive(Debug)]
struct Records {
    products: BTreeMap<ProductId, Product>,
    /// `None` once every id has been handed out.
    next_id: Option<ProductId>,
}

/// In-memory product store for tests/dev.
///
/// A single `RwLock` serialises writers, so updates to different ids never
/// interleave and readers always observe a committed product.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    inner: RwLock<Records>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Records {
                products: BTreeMap::new(),
                next_id: Some(ProductId::new(1)),
            }),
        }
    }

    /// Start with the given products stored under their own ids.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products: BTreeMap<ProductId, Product> =
            products.into_iter().map(|p| (p.id(), p)).collect();
        let next_id = match products.keys().next_back() {
            Some(last) => last.next(),
            None => Some(ProductId::new(1)),
        };
        Self {
            inner: RwLock::new(Records { products, next_id }),
        }
    }

    pub fn len(&self) -> usize {
        self.read().map_or(0, |r| r.products.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Records>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Records>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> DomainError {
    tracing::error!("product store lock poisoned");
    DomainError::storage("product store lock poisoned")
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn save(&self, mut product: Product) -> DomainResult<Product> {
        let mut records = self.write()?;
        let id = records
            .next_id
            .ok_or_else(|| DomainError::storage("product id space exhausted"))?;
        product.id = id;
        match records.products.entry(id) {
            Entry::Occupied(_) => {
                return Err(DomainError::storage(format!("product id {id} already allocated")));
            }
            Entry::Vacant(slot) => {
                slot.insert(product.clone());
            }
        }
        records.next_id = id.next();
        tracing::debug!(product_id = %id, "product saved");
        Ok(product)
    }

    fn find(&self, id: ProductId) -> Option<Product> {
        let records = self.read().ok()?;
        records.products.get(&id).cloned()
    }

    fn find_all(&self) -> DomainResult<Vec<Product>> {
        Ok(self.read()?.products.values().cloned().collect())
    }

    fn update(&self, product: Product) -> DomainResult<Product> {
        let mut records = self.write()?;
        let slot = records
            .products
            .get_mut(&product.id())
            .ok_or(DomainError::NotFound)?;
        *slot = product;
        Ok(slot.clone())
    }

    fn delete(&self, product: &Product) -> DomainResult<()> {
        let mut records = self.write()?;
        records
            .products
            .remove(&product.id())
            .map(|_| ())
            .ok_or(DomainError::NotFound)
    }

    fn delete_all(&self) -> DomainResult<()> {
        self.write()?.products.clear();
        Ok(())
    }
}
