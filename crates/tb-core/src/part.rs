//! Part domain model

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Category, CoreError, Result};

/// A purchasable hardware component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: String,
    pub category: Category,
    pub brand: String,
    pub model: String,
    pub name: String,
    /// Open spec sheet; keys vary by category and are not validated here
    #[serde(default)]
    pub specs: BTreeMap<String, SpecValue>,
    pub trust_factors: TrustFactors,
    pub trust_score: u8,
    pub retailers: Listings,
    #[serde(default)]
    pub alternative_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Part {
    pub fn spec(&self, key: &str) -> Option<&SpecValue> {
        self.specs.get(key)
    }

    /// Numeric view of a spec value (`"250W"` reads as 250)
    pub fn spec_number(&self, key: &str) -> Option<f64> {
        self.spec(key).and_then(SpecValue::as_number)
    }
}

/// A single spec sheet value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl SpecValue {
    /// Numbers as-is; text by its leading numeric prefix
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SpecValue::Number(n) => Some(*n),
            SpecValue::Text(s) => {
                let s = s.trim();
                let end = s
                    .char_indices()
                    .find(|&(i, c)| !(c.is_ascii_digit() || (c == '.' && i > 0)))
                    .map(|(i, _)| i)
                    .unwrap_or(s.len());
                s[..end].parse().ok()
            }
            SpecValue::Flag(_) => None,
        }
    }
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecValue::Flag(b) => write!(f, "{}", if *b { "Yes" } else { "No" }),
            SpecValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            SpecValue::Number(n) => write!(f, "{}", n),
            SpecValue::Text(s) => f.write_str(s),
        }
    }
}

/// Inputs to the trust score formula.
///
/// Ranges are expected (failure rate as a percentage, reputation 1-100,
/// RMA rating 1-5) but never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustFactors {
    pub failure_rate: f64,
    pub warranty_years: f64,
    pub brand_reputation: f64,
    pub rma_rating: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retailer {
    Amazon,
    Newegg,
    Bhphoto,
    Bestbuy,
    Microcenter,
}

impl Retailer {
    pub fn display_name(self) -> &'static str {
        match self {
            Retailer::Amazon => "Amazon",
            Retailer::Newegg => "Newegg",
            Retailer::Bhphoto => "B&H Photo",
            Retailer::Bestbuy => "Best Buy",
            Retailer::Microcenter => "Micro Center",
        }
    }
}

impl fmt::Display for Retailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One retailer's offer for a part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailerListing {
    pub retailer: Retailer,
    pub price: f64,
    pub in_stock: bool,
    pub url: String,
    #[serde(with = "crate::iso_date")]
    pub last_updated: Date,
}

/// Retailer listings of a part. Never empty, every price positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RetailerListing>", into = "Vec<RetailerListing>")]
pub struct Listings(Vec<RetailerListing>);

impl Listings {
    pub fn new(listings: Vec<RetailerListing>) -> Result<Self> {
        if listings.is_empty() {
            return Err(CoreError::EmptyListings);
        }
        if let Some(bad) = listings
            .iter()
            .find(|l| !l.price.is_finite() || l.price <= 0.0)
        {
            return Err(CoreError::InvalidPrice {
                retailer: bad.retailer.display_name().to_string(),
                price: bad.price,
            });
        }
        Ok(Self(listings))
    }

    pub fn as_slice(&self) -> &[RetailerListing] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RetailerListing> {
        self.0.iter()
    }
}

impl TryFrom<Vec<RetailerListing>> for Listings {
    type Error = CoreError;

    fn try_from(listings: Vec<RetailerListing>) -> Result<Self> {
        Self::new(listings)
    }
}

impl From<Listings> for Vec<RetailerListing> {
    fn from(listings: Listings) -> Self {
        listings.0
    }
}

impl<'a> IntoIterator for &'a Listings {
    type Item = &'a RetailerListing;
    type IntoIter = std::slice::Iter<'a, RetailerListing>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Retailer directory entry (`retailers.json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailerInfo {
    pub id: Retailer,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    pub affiliate_base_url: String,
}
