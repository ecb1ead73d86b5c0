use std::sync::Arc;

use mercadofacil_infra::{fixtures, AppConfig, InMemoryProductRepository};
use mercadofacil_products::{ProductAlterationService, ProductRepository, ProductValidator};

pub type ProductService = ProductAlterationService<Arc<dyn ProductRepository>>;

/// Application services shared by every handler.
pub struct AppServices {
    products: ProductService,
}

impl AppServices {
    pub fn new(validator: ProductValidator, repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            products: ProductAlterationService::new(validator, repository),
        }
    }

    pub fn products(&self) -> &ProductService {
        &self.products
    }

    pub fn repository(&self) -> &dyn ProductRepository {
        &**self.products.repository()
    }
}

pub fn build_services(config: &AppConfig) -> AppServices {
    let repository = if config.seed_fixtures {
        fixtures::seeded_repository()
    } else {
        InMemoryProductRepository::new()
    };

    tracing::info!(
        seeded = config.seed_fixtures,
        products = repository.len(),
        countries = config.barcode_ranges.countries().len(),
        "product services initialised"
    );

    AppServices::new(
        ProductValidator::new(config.barcode_ranges.clone()),
        Arc::new(repository),
    )
}
