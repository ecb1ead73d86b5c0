use serde::Deserialize;

use mercadofacil_core::ProductId;
use mercadofacil_products::Product;

/// Product body for create and alter requests.
///
/// The id always comes from the path (or the store, on create); an `id` in the
/// body is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ProductRequest {
    #[serde(default, alias = "codigoBarra")]
    pub barcode: Option<String>,
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
    #[serde(default, alias = "fabricante")]
    pub manufacturer: Option<String>,
    #[serde(default, alias = "preco")]
    pub price: f64,
}

impl ProductRequest {
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            barcode: self.barcode,
            name: self.name,
            manufacturer: self.manufacturer,
            price: self.price,
        }
    }
}
