//! Synthetic catalog records for unit tests

use tb_core::{
    Build, Category, Difficulty, Listings, Part, PriceRange, Retailer, RetailerListing,
    TargetResolution, TrustFactors,
};
use time::macros::date;

/// A part with one in-stock listing and a self-consistent trust score
pub fn part(id: &str, category: Category, price: f64) -> Part {
    let trust_factors = TrustFactors {
        failure_rate: 1.0,
        warranty_years: 3.0,
        brand_reputation: 80.0,
        rma_rating: 4.0,
    };
    Part {
        id: id.to_string(),
        category,
        brand: "Acme".into(),
        model: id.to_uppercase(),
        name: format!("Acme {}", id.to_uppercase()),
        specs: Default::default(),
        trust_score: trust_factors.score(),
        trust_factors,
        retailers: Listings::new(vec![RetailerListing {
            retailer: Retailer::Amazon,
            price,
            in_stock: true,
            url: format!("https://example.com/{id}"),
            last_updated: date!(2025 - 01 - 15),
        }])
        .unwrap(),
        alternative_ids: Vec::new(),
        image_url: None,
    }
}

pub fn build(id: &str, component_ids: &[&str]) -> Build {
    Build {
        id: id.to_string(),
        slug: format!("{id}-slug"),
        name: format!("Build {id}"),
        description: String::new(),
        use_case: "Gaming".into(),
        difficulty: Difficulty::Medium,
        target_resolution: TargetResolution::Qhd,
        target_fps: 144,
        component_ids: component_ids.iter().map(|s| s.to_string()).collect(),
        price_range: PriceRange {
            min: 1000.0,
            max: 1200.0,
        },
        last_updated: date!(2025 - 01 - 15),
        image_url: None,
    }
}
