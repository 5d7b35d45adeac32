//! Synthetic catalogs for engine unit tests

use tb_catalog::{Catalog, ValidationMode};
use tb_core::{
    Build, Category, Difficulty, Listings, Part, PriceRange, Retailer, RetailerListing,
    TargetResolution, TrustFactors,
};
use time::macros::date;

pub fn part(id: &str, category: Category, trust_score: u8, price: f64) -> Part {
    part_with_listings(id, category, trust_score, &[(price, true)])
}

/// A part with an arbitrary stored trust score and the given `(price, in_stock)` listings
pub fn part_with_listings(
    id: &str,
    category: Category,
    trust_score: u8,
    listings: &[(f64, bool)],
) -> Part {
    Part {
        id: id.to_string(),
        category,
        brand: "Acme".into(),
        model: id.to_uppercase(),
        name: format!("Acme {}", id.to_uppercase()),
        specs: Default::default(),
        trust_factors: TrustFactors {
            failure_rate: 1.0,
            warranty_years: 3.0,
            brand_reputation: 80.0,
            rma_rating: 4.0,
        },
        trust_score,
        retailers: Listings::new(
            listings
                .iter()
                .map(|&(price, in_stock)| RetailerListing {
                    retailer: Retailer::Newegg,
                    price,
                    in_stock,
                    url: format!("https://example.com/{id}"),
                    last_updated: date!(2025 - 01 - 15),
                })
                .collect(),
        )
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
        difficulty: Difficulty::Easy,
        target_resolution: TargetResolution::Fhd,
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

pub fn catalog(parts: Vec<Part>, builds: Vec<Build>) -> Catalog {
    Catalog::new(parts, builds, Vec::new(), ValidationMode::Lenient).unwrap()
}
