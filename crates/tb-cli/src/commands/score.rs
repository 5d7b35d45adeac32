//! Trust score calculator

use anyhow::Result;
use serde_json::json;
use tb_core::{TrustFactors, TrustTier};

use super::print_json;

pub fn handle(
    failure_rate: f64,
    warranty_years: f64,
    brand_reputation: f64,
    rma_rating: f64,
    json: bool,
) -> Result<()> {
    let factors = TrustFactors {
        failure_rate,
        warranty_years,
        brand_reputation,
        rma_rating,
    };
    let score = factors.score();
    let tier = TrustTier::from_score(score);

    if json {
        return print_json(&json!({
            "score": score,
            "tier": tier.label(),
            "breakdown": factors.breakdown(),
        }));
    }

    println!("Trust score: {} ({})", score, tier.label());
    for check in factors.breakdown() {
        let mark = if check.good { "✓" } else { "✗" };
        println!("  {} {}: {}", mark, check.label, check.value);
    }
    Ok(())
}
