//! Products domain module.
//!
//! Business rules for catalog products: the product entity, EAN-13 barcodes,
//! the accepted barcode range table, alteration validation and the
//! validate-then-persist alteration service. Pure domain logic; storage is
//! reached only through [`ProductRepository`].

pub mod alteration;
pub mod barcode;
pub mod product;
pub mod ranges;
pub mod repository;
pub mod validation;

pub use alteration::{AlterError, ProductAlterationService};
pub use barcode::{Ean13, check_digit};
pub use product::Product;
pub use ranges::{BarcodeRanges, CountryRange, ManufacturerRange, RangeTableError};
pub use repository::ProductRepository;
pub use validation::{ProductValidator, ValidationError};
