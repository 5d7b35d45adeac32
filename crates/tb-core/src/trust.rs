//! Trust score engine
//!
//! Score = (100 - failureRate*10) * 0.4
//!       + (min(warrantyYears, 5) / 5 * 100) * 0.3
//!       + brandReputation * 0.2
//!       + rmaRating * 20 * 0.1
//!
//! clamped to [0, 100] and rounded half-up once at the end. Inputs are not
//! range-checked: out-of-range factors flow through the arithmetic and only
//! the final clamp bounds the result.

use serde::Serialize;

use crate::{Part, TrustFactors};

const FAILURE_WEIGHT: f64 = 0.4;
const WARRANTY_WEIGHT: f64 = 0.3;
const REPUTATION_WEIGHT: f64 = 0.2;
const RMA_WEIGHT: f64 = 0.1;
const WARRANTY_CAP_YEARS: f64 = 5.0;

pub fn trust_score(factors: &TrustFactors) -> u8 {
    let failure = (100.0 - factors.failure_rate * 10.0) * FAILURE_WEIGHT;
    let warranty =
        (factors.warranty_years.min(WARRANTY_CAP_YEARS) / WARRANTY_CAP_YEARS) * 100.0 * WARRANTY_WEIGHT;
    let reputation = factors.brand_reputation * REPUTATION_WEIGHT;
    let rma = factors.rma_rating * 20.0 * RMA_WEIGHT;

    let score = failure + warranty + reputation + rma;

    // NaN inputs saturate to 0 through the cast
    score.clamp(0.0, 100.0).round() as u8
}

/// Rounded mean of the parts' stored trust scores; 0 for no parts
pub fn build_trust_score(parts: &[&Part]) -> u8 {
    if parts.is_empty() {
        return 0;
    }
    let total: f64 = parts.iter().map(|p| f64::from(p.trust_score)).sum();
    (total / parts.len() as f64).round() as u8
}

impl TrustFactors {
    pub fn score(&self) -> u8 {
        trust_score(self)
    }

    /// Per-factor display values with a pass/fail flag for each
    pub fn breakdown(&self) -> [FactorCheck; 4] {
        let warranty = if self.warranty_years == 1.0 {
            "1 year".to_string()
        } else {
            format!("{} years", self.warranty_years)
        };

        [
            FactorCheck {
                label: "Failure Rate",
                value: format!("{:.1}%", self.failure_rate),
                good: self.failure_rate < 1.5,
            },
            FactorCheck {
                label: "Warranty",
                value: warranty,
                good: self.warranty_years >= 3.0,
            },
            FactorCheck {
                label: "Brand Reputation",
                value: format!("{}/100", self.brand_reputation),
                good: self.brand_reputation >= 85.0,
            },
            FactorCheck {
                label: "RMA Experience",
                value: format!("{:.1}/5", self.rma_rating),
                good: self.rma_rating >= 4.0,
            },
        ]
    }
}

impl Part {
    /// Stored score matches the one recomputed from its factors
    pub fn trust_score_is_consistent(&self) -> bool {
        self.trust_score == self.trust_factors.score()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorCheck {
    pub label: &'static str,
    pub value: String,
    pub good: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum TrustTier {
    BelowAverage,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl TrustTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => TrustTier::Excellent,
            80..=89 => TrustTier::VeryGood,
            70..=79 => TrustTier::Good,
            60..=69 => TrustTier::Fair,
            _ => TrustTier::BelowAverage,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrustTier::Excellent => "Excellent",
            TrustTier::VeryGood => "Very Good",
            TrustTier::Good => "Good",
            TrustTier::Fair => "Fair",
            TrustTier::BelowAverage => "Below Average",
        }
    }
}
