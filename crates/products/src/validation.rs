//! Business rules a product must satisfy before it can be altered.

use std::sync::Arc;

use thiserror::Error;

use crate::barcode::{COUNTRY_PREFIX_LEN, EAN13_LEN, Ean13};
use crate::product::Product;
use crate::ranges::BarcodeRanges;

/// Rule violated by a candidate product.
///
/// The display text is the user-facing message returned by the API.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValidationError {
    #[error("Atributos faltando!")]
    MissingAttributes,

    #[error("Preco invalido!")]
    InvalidPrice,

    #[error("Codigo de barra com mais de 13 numeros!")]
    BarcodeTooLong,

    #[error("Codigo de barra com digito verificador incorreto!")]
    InvalidCheckDigit,

    #[error("Codigo de barra com país errado")]
    InvalidCountryCode,

    #[error("Codigo de barra com empresa errada!")]
    InvalidManufacturerCode,
}

impl ValidationError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingAttributes => "missing_attributes",
            ValidationError::InvalidPrice => "invalid_price",
            ValidationError::BarcodeTooLong => "barcode_too_long",
            ValidationError::InvalidCheckDigit => "invalid_check_digit",
            ValidationError::InvalidCountryCode => "invalid_country_code",
            ValidationError::InvalidManufacturerCode => "invalid_manufacturer_code",
        }
    }
}

/// Validates candidate products against the alteration rules.
///
/// Rules are checked in a fixed order and the first violation is returned:
/// mandatory attributes, price, barcode length, country prefix, manufacturer
/// code, check digit.
#[derive(Debug, Clone)]
pub struct ProductValidator {
    ranges: Arc<BarcodeRanges>,
}

impl ProductValidator {
    pub fn new(ranges: impl Into<Arc<BarcodeRanges>>) -> Self {
        Self {
            ranges: ranges.into(),
        }
    }

    pub fn validate(&self, product: &Product) -> Result<(), ValidationError> {
        let barcode = match (
            present(&product.name),
            present(&product.barcode),
            present(&product.manufacturer),
        ) {
            (Some(_), Some(barcode), Some(_)) => barcode,
            _ => return Err(ValidationError::MissingAttributes),
        };

        // NaN fails the comparison and is rejected with the rest.
        if !(product.price > 0.0) {
            return Err(ValidationError::InvalidPrice);
        }

        self.validate_barcode(barcode).map(|_| ())
    }

    /// Apply the barcode rules alone, returning the parsed code on success.
    pub fn validate_barcode(&self, barcode: &str) -> Result<Ean13, ValidationError> {
        if barcode.chars().count() > EAN13_LEN {
            return Err(ValidationError::BarcodeTooLong);
        }

        // Short or non-numeric codes have no verifiable check digit.
        let code = Ean13::parse(barcode).ok_or(ValidationError::InvalidCheckDigit)?;

        let country = self
            .ranges
            .country_for(code.country_prefix())
            .ok_or(ValidationError::InvalidCountryCode)?;

        let manufacturer = &country.manufacturer;
        let segment = code
            .segment(COUNTRY_PREFIX_LEN, manufacturer.digits)
            .ok_or(ValidationError::InvalidManufacturerCode)?;
        if !manufacturer.contains(segment) {
            return Err(ValidationError::InvalidManufacturerCode);
        }

        if !code.has_valid_check_digit() {
            return Err(ValidationError::InvalidCheckDigit);
        }

        Ok(code)
    }
}

impl Default for ProductValidator {
    fn default() -> Self {
        Self::new(BarcodeRanges::gs1())
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}
