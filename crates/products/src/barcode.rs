//! EAN-13 barcodes.
//!
//! An EAN-13 code is 13 decimal digits: a GS1 country prefix, a manufacturer
//! code, an item reference and a trailing check digit computed from the first
//! twelve.

use mercadofacil_core::ValueObject;

/// Number of digits in an EAN-13 code.
pub const EAN13_LEN: usize = 13;

/// Number of leading digits forming the GS1 country prefix.
pub const COUNTRY_PREFIX_LEN: usize = 3;

/// Compute the EAN-13 check digit for the first twelve digits of a code.
///
/// Digits at even positions (0-based) weigh 1, digits at odd positions weigh 3;
/// the check digit is the smallest `d` that brings the weighted sum to a
/// multiple of ten.
///
/// ```
/// use mercadofacil_products::barcode::check_digit;
///
/// assert_eq!(check_digit(&[7, 8, 9, 9, 1, 3, 7, 5, 0, 0, 1, 1]), 7);
/// ```
pub fn check_digit(payload: &[u8; EAN13_LEN - 1]) -> u8 {
    let (even, odd) = payload
        .iter()
        .enumerate()
        .fold((0u32, 0u32), |(even, odd), (position, &digit)| {
            if position % 2 == 0 {
                (even + u32::from(digit), odd)
            } else {
                (even, odd + u32::from(digit))
            }
        });
    let weighted = even + odd * 3;
    // Always < 10.
    ((10 - weighted % 10) % 10) as u8
}

/// A syntactically well-formed EAN-13 code (13 ASCII digits).
///
/// Parsing does not verify the check digit; that is a business rule applied by
/// the validator so that it can be reported in its proper order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ean13 {
    digits: [u8; EAN13_LEN],
}

impl ValueObject for Ean13 {}

impl Ean13 {
    /// Parse exactly 13 ASCII digits; anything else yields `None`.
    pub fn parse(code: &str) -> Option<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != EAN13_LEN {
            return None;
        }

        let mut digits = [0u8; EAN13_LEN];
        for (slot, byte) in digits.iter_mut().zip(bytes) {
            if !byte.is_ascii_digit() {
                return None;
            }
            *slot = byte - b'0';
        }
        Some(Self { digits })
    }

    /// Build a code from a 12-digit payload, appending the computed check digit.
    pub fn from_payload(payload: [u8; EAN13_LEN - 1]) -> Option<Self> {
        if payload.iter().any(|d| *d > 9) {
            return None;
        }
        let mut digits = [0u8; EAN13_LEN];
        digits[..EAN13_LEN - 1].copy_from_slice(&payload);
        digits[EAN13_LEN - 1] = check_digit(&payload);
        Some(Self { digits })
    }

    /// The first twelve digits (everything but the check digit).
    pub fn payload(&self) -> [u8; EAN13_LEN - 1] {
        let mut payload = [0u8; EAN13_LEN - 1];
        payload.copy_from_slice(&self.digits[..EAN13_LEN - 1]);
        payload
    }

    /// The check digit carried by the code (13th digit).
    pub fn check_digit(&self) -> u8 {
        self.digits[EAN13_LEN - 1]
    }

    /// The check digit the first twelve digits call for.
    pub fn expected_check_digit(&self) -> u8 {
        check_digit(&self.payload())
    }

    pub fn has_valid_check_digit(&self) -> bool {
        self.check_digit() == self.expected_check_digit()
    }

    /// GS1 country prefix (first three digits).
    pub fn country_prefix(&self) -> u16 {
        self.digits[..COUNTRY_PREFIX_LEN]
            .iter()
            .fold(0u16, |acc, d| acc * 10 + u16::from(*d))
    }

    /// Numeric value of `len` digits starting at `start`.
    ///
    /// Returns `None` when the segment would reach into the check digit or is
    /// empty.
    pub fn segment(&self, start: usize, len: usize) -> Option<u32> {
        if len == 0 || start + len > EAN13_LEN - 1 {
            return None;
        }
        Some(
            self.digits[start..start + len]
                .iter()
                .fold(0u32, |acc, d| acc * 10 + u32::from(*d)),
        )
    }
}

impl core::fmt::Display for Ean13 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
