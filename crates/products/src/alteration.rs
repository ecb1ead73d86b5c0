//! Product alteration: validate, then persist.

use thiserror::Error;

use mercadofacil_core::DomainError;

use crate::product::Product;
use crate::repository::ProductRepository;
use crate::validation::{ProductValidator, ValidationError};

/// Failure of [`ProductAlterationService::alter`].
///
/// Both variants are transparent so the message reaching the caller is the
/// one produced by the validator or the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] DomainError),
}

/// Applies alterations to stored products.
///
/// Storage is only touched once the candidate passes validation; a rejected
/// candidate leaves the repository exactly as it was.
#[derive(Debug, Clone)]
pub struct ProductAlterationService<R> {
    validator: ProductValidator,
    repository: R,
}

impl<R> ProductAlterationService<R>
where
    R: ProductRepository,
{
    pub fn new(validator: ProductValidator, repository: R) -> Self {
        Self {
            validator,
            repository,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validate `candidate` and, if it passes, hand it to the repository.
    ///
    /// Returns whatever the repository committed, untouched.
    pub fn alter(&self, candidate: Product) -> Result<Product, AlterError> {
        let product_id = candidate.id;
        tracing::debug!(%product_id, "validating product alteration");

        if let Err(err) = self.validator.validate(&candidate) {
            tracing::warn!(%product_id, error = err.code(), "product alteration rejected");
            return Err(err.into());
        }

        let committed = self.repository.update(candidate)?;
        tracing::info!(%product_id, "product altered");
        Ok(committed)
    }
}
