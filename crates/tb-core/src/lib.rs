//! Core domain models and scoring for trustbuilds
//!
//! This crate contains:
//! - Domain models (Part, Build, Category, retailer listings)
//! - Pricing resolution across retailer listings
//! - The trust score formula and build aggregation

pub mod build;
pub mod category;
pub mod error;
pub mod part;
pub mod pricing;
pub mod trust;

pub use build::{Build, Difficulty, EnrichedBuild, PriceRange, TargetResolution};
pub use category::Category;
pub use error::{CoreError, Result};
pub use part::{Listings, Part, Retailer, RetailerInfo, RetailerListing, SpecValue, TrustFactors};
pub use trust::{FactorCheck, TrustTier, build_trust_score, trust_score};

/// `YYYY-MM-DD` dates as used by the catalog files
mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;
    use time::macros::format_description;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text = date
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::parse(&text, format_description!("[year]-[month]-[day]"))
            .map_err(serde::de::Error::custom)
    }
}
