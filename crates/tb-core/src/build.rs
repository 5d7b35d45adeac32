//! Build domain model

use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Part;

/// A curated, pre-assembled set of parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub use_case: String,
    pub difficulty: Difficulty,
    pub target_resolution: TargetResolution,
    pub target_fps: u32,
    pub component_ids: Vec<String>,
    /// Authored display range, independent of live pricing
    pub price_range: PriceRange,
    #[serde(with = "crate::iso_date")]
    pub last_updated: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetResolution {
    #[serde(rename = "1080p")]
    Fhd,
    #[serde(rename = "1440p")]
    Qhd,
    #[serde(rename = "4K")]
    Uhd,
}

impl fmt::Display for TargetResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TargetResolution::Fhd => "1080p",
            TargetResolution::Qhd => "1440p",
            TargetResolution::Uhd => "4K",
        })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Rounded midpoint, shown as a build's headline price
    pub fn midpoint(&self) -> f64 {
        ((self.min + self.max) / 2.0).round()
    }
}

/// A build with its components resolved and live totals computed.
///
/// Never persisted; derived on demand from the catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedBuild<'a> {
    #[serde(flatten)]
    pub build: &'a Build,
    pub components: Vec<&'a Part>,
    pub lowest_total_price: f64,
    pub display_price: f64,
    pub trust_score: u8,
    pub has_out_of_stock: bool,
}
