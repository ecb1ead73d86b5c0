//! Accepted country-prefix and manufacturer-code ranges for EAN-13 codes.
//!
//! The table is plain data handed to the validator at construction. The
//! built-in table follows the GS1 prefix list; deployments may load their own
//! (see `mercadofacil-infra::config`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::barcode::{COUNTRY_PREFIX_LEN, EAN13_LEN};

/// Largest manufacturer segment that still leaves room for the check digit.
const MAX_MANUFACTURER_DIGITS: usize = EAN13_LEN - 1 - COUNTRY_PREFIX_LEN;

/// Manufacturer segment rule applied after a country prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerRange {
    /// Number of digits after the country prefix forming the manufacturer code.
    pub digits: usize,
    pub min: u32,
    pub max: u32,
}

impl ManufacturerRange {
    pub fn new(digits: usize, min: u32, max: u32) -> Self {
        Self { digits, min, max }
    }

    /// Accept every code of the given width.
    pub fn any(digits: usize) -> Self {
        let max = u32::try_from(digits)
            .ok()
            .and_then(|d| 10u32.checked_pow(d))
            .map_or(u32::MAX, |p| p - 1);
        Self { digits, min: 0, max }
    }

    pub fn contains(&self, code: u32) -> bool {
        (self.min..=self.max).contains(&code)
    }
}

impl Default for ManufacturerRange {
    fn default() -> Self {
        Self::any(4)
    }
}

/// A block of GS1 country prefixes sharing one manufacturer rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRange {
    pub name: String,
    pub first: u16,
    pub last: u16,
    #[serde(default)]
    pub manufacturer: ManufacturerRange,
}

impl CountryRange {
    pub fn new(name: impl Into<String>, first: u16, last: u16) -> Self {
        Self {
            name: name.into(),
            first,
            last,
            manufacturer: ManufacturerRange::default(),
        }
    }

    pub fn with_manufacturer(mut self, manufacturer: ManufacturerRange) -> Self {
        self.manufacturer = manufacturer;
        self
    }

    pub fn contains(&self, prefix: u16) -> bool {
        (self.first..=self.last).contains(&prefix)
    }
}

/// Errors raised while assembling a range table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeTableError {
    #[error("range table has no country entries")]
    Empty,

    #[error("country range '{name}' is inverted ({first} > {last})")]
    InvertedPrefixRange { name: String, first: u16, last: u16 },

    #[error("country range '{name}' exceeds three digits (last = {last})")]
    PrefixOutOfBounds { name: String, last: u16 },

    #[error("country range '{name}' declares {digits} manufacturer digits (expected 1..={max})")]
    InvalidManufacturerDigits { name: String, digits: usize, max: usize },

    #[error("manufacturer range of '{name}' is inverted ({min} > {max})")]
    InvertedManufacturerRange { name: String, min: u32, max: u32 },

    #[error("manufacturer range of '{name}' does not fit in {digits} digits (max = {max})")]
    ManufacturerOutOfBounds { name: String, digits: usize, max: u32 },
}

/// Read-only table of accepted country prefixes and their manufacturer rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarcodeRanges {
    countries: Vec<CountryRange>,
}

impl BarcodeRanges {
    /// Build a table, rejecting malformed entries.
    pub fn new(countries: Vec<CountryRange>) -> Result<Self, RangeTableError> {
        if countries.is_empty() {
            return Err(RangeTableError::Empty);
        }
        for country in &countries {
            validate_entry(country)?;
        }
        Ok(Self { countries })
    }

    /// The built-in table derived from the GS1 prefix list.
    pub fn gs1() -> Self {
        let countries = GS1_PREFIXES
            .iter()
            .map(|&(first, last, name)| {
                let range = CountryRange::new(name, first, last);
                if (first, last) == BRAZIL {
                    range.with_manufacturer(BRAZIL_MANUFACTURERS)
                } else {
                    range
                }
            })
            .collect();
        Self { countries }
    }

    pub fn countries(&self) -> &[CountryRange] {
        &self.countries
    }

    /// First entry whose prefix block contains `prefix`.
    pub fn country_for(&self, prefix: u16) -> Option<&CountryRange> {
        self.countries.iter().find(|c| c.contains(prefix))
    }
}

impl Default for BarcodeRanges {
    fn default() -> Self {
        Self::gs1()
    }
}

fn validate_entry(country: &CountryRange) -> Result<(), RangeTableError> {
    if country.first > country.last {
        return Err(RangeTableError::InvertedPrefixRange {
            name: country.name.clone(),
            first: country.first,
            last: country.last,
        });
    }
    if country.last > 999 {
        return Err(RangeTableError::PrefixOutOfBounds {
            name: country.name.clone(),
            last: country.last,
        });
    }

    let manufacturer = &country.manufacturer;
    if !(1..=MAX_MANUFACTURER_DIGITS).contains(&manufacturer.digits) {
        return Err(RangeTableError::InvalidManufacturerDigits {
            name: country.name.clone(),
            digits: manufacturer.digits,
            max: MAX_MANUFACTURER_DIGITS,
        });
    }
    if manufacturer.min > manufacturer.max {
        return Err(RangeTableError::InvertedManufacturerRange {
            name: country.name.clone(),
            min: manufacturer.min,
            max: manufacturer.max,
        });
    }
    if manufacturer.max > ManufacturerRange::any(manufacturer.digits).max {
        return Err(RangeTableError::ManufacturerOutOfBounds {
            name: country.name.clone(),
            digits: manufacturer.digits,
            max: manufacturer.max,
        });
    }
    Ok(())
}

const BRAZIL: (u16, u16) = (789, 790);

/// Company codes registered with GS1 Brasil for this catalog start at 7000.
const BRAZIL_MANUFACTURERS: ManufacturerRange = ManufacturerRange {
    digits: 4,
    min: 7000,
    max: 9999,
};

// Country-assigned GS1 prefixes. Restricted-circulation (020-029, 040-049,
// 200-299), ISSN/ISBN (977-979) and coupon (980-999) blocks are not countries.
const GS1_PREFIXES: &[(u16, u16, &str)] = &[
    (0, 19, "United States & Canada"),
    (30, 39, "United States (drugs)"),
    (60, 139, "United States & Canada"),
    (300, 379, "France & Monaco"),
    (380, 380, "Bulgaria"),
    (383, 383, "Slovenia"),
    (385, 385, "Croatia"),
    (387, 387, "Bosnia and Herzegovina"),
    (389, 389, "Montenegro"),
    (400, 440, "Germany"),
    (450, 459, "Japan"),
    (460, 469, "Russia"),
    (470, 470, "Kyrgyzstan"),
    (471, 471, "Taiwan"),
    (474, 474, "Estonia"),
    (475, 475, "Latvia"),
    (476, 476, "Azerbaijan"),
    (477, 477, "Lithuania"),
    (478, 478, "Uzbekistan"),
    (479, 479, "Sri Lanka"),
    (480, 480, "Philippines"),
    (481, 481, "Belarus"),
    (482, 482, "Ukraine"),
    (483, 483, "Turkmenistan"),
    (484, 484, "Moldova"),
    (485, 485, "Armenia"),
    (486, 486, "Georgia"),
    (487, 487, "Kazakhstan"),
    (488, 488, "Tajikistan"),
    (489, 489, "Hong Kong"),
    (490, 499, "Japan"),
    (500, 509, "United Kingdom"),
    (520, 521, "Greece"),
    (528, 528, "Lebanon"),
    (529, 529, "Cyprus"),
    (530, 530, "Albania"),
    (531, 531, "North Macedonia"),
    (535, 535, "Malta"),
    (539, 539, "Ireland"),
    (540, 549, "Belgium & Luxembourg"),
    (560, 560, "Portugal"),
    (569, 569, "Iceland"),
    (570, 579, "Denmark, Faroe Islands & Greenland"),
    (590, 590, "Poland"),
    (594, 594, "Romania"),
    (599, 599, "Hungary"),
    (600, 601, "South Africa"),
    (603, 603, "Ghana"),
    (604, 604, "Senegal"),
    (608, 608, "Bahrain"),
    (609, 609, "Mauritius"),
    (611, 611, "Morocco"),
    (613, 613, "Algeria"),
    (615, 615, "Nigeria"),
    (616, 616, "Kenya"),
    (618, 618, "Ivory Coast"),
    (619, 619, "Tunisia"),
    (620, 620, "Tanzania"),
    (621, 621, "Syria"),
    (622, 622, "Egypt"),
    (623, 623, "Brunei"),
    (624, 624, "Libya"),
    (625, 625, "Jordan"),
    (626, 626, "Iran"),
    (627, 627, "Kuwait"),
    (628, 628, "Saudi Arabia"),
    (629, 629, "United Arab Emirates"),
    (630, 630, "Qatar"),
    (640, 649, "Finland"),
    (690, 699, "China"),
    (700, 709, "Norway"),
    (729, 729, "Israel"),
    (730, 739, "Sweden"),
    (740, 740, "Guatemala"),
    (741, 741, "El Salvador"),
    (742, 742, "Honduras"),
    (743, 743, "Nicaragua"),
    (744, 744, "Costa Rica"),
    (745, 745, "Panama"),
    (746, 746, "Dominican Republic"),
    (750, 750, "Mexico"),
    (754, 755, "Canada"),
    (759, 759, "Venezuela"),
    (760, 769, "Switzerland & Liechtenstein"),
    (770, 771, "Colombia"),
    (773, 773, "Uruguay"),
    (775, 775, "Peru"),
    (777, 777, "Bolivia"),
    (778, 779, "Argentina"),
    (780, 780, "Chile"),
    (784, 784, "Paraguay"),
    (786, 786, "Ecuador"),
    (789, 790, "Brazil"),
    (800, 839, "Italy, San Marino & Vatican City"),
    (840, 849, "Spain & Andorra"),
    (850, 850, "Cuba"),
    (858, 858, "Slovakia"),
    (859, 859, "Czech Republic"),
    (860, 860, "Serbia"),
    (865, 865, "Mongolia"),
    (867, 867, "North Korea"),
    (868, 869, "Turkey"),
    (870, 879, "Netherlands"),
    (880, 880, "South Korea"),
    (884, 884, "Cambodia"),
    (885, 885, "Thailand"),
    (888, 888, "Singapore"),
    (890, 890, "India"),
    (893, 893, "Vietnam"),
    (896, 896, "Pakistan"),
    (899, 899, "Indonesia"),
    (900, 919, "Austria"),
    (930, 939, "Australia"),
    (940, 949, "New Zealand"),
    (955, 955, "Malaysia"),
    (958, 958, "Macau"),
];
