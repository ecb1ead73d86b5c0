use serde::{Deserialize, Serialize};

use mercadofacil_core::{Entity, ProductId};

/// Catalog product.
///
/// Textual attributes are optional because a product is only required to be
/// complete when it is altered; see [`crate::ProductValidator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// EAN-13 code, 13 ASCII digits when valid.
    #[serde(default, alias = "codigoBarra")]
    pub barcode: Option<String>,
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
    #[serde(default, alias = "fabricante")]
    pub manufacturer: Option<String>,
    #[serde(default, alias = "preco")]
    pub price: f64,
}

impl Product {
    pub fn new(
        id: ProductId,
        barcode: impl Into<String>,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            barcode: Some(barcode.into()),
            name: Some(name.into()),
            manufacturer: Some(manufacturer.into()),
            price,
        }
    }

    pub fn barcode(&self) -> Option<&str> {
        self.barcode.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
