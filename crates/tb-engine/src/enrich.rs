//! Build enrichment: resolve components and compute live totals

use tb_catalog::Catalog;
use tb_core::{Build, EnrichedBuild, build_trust_score, pricing};

pub fn enrich<'a>(catalog: &'a Catalog, build: &'a Build) -> EnrichedBuild<'a> {
    let components = catalog.resolve_components(build);
    EnrichedBuild {
        build,
        lowest_total_price: pricing::total_lowest_price(components.iter().copied()),
        display_price: build.price_range.midpoint(),
        trust_score: build_trust_score(&components),
        has_out_of_stock: components.iter().any(|p| !pricing::is_available(p)),
        components,
    }
}

/// Every build, enriched, in catalog order
pub fn enrich_all(catalog: &Catalog) -> Vec<EnrichedBuild<'_>> {
    catalog.builds().iter().map(|b| enrich(catalog, b)).collect()
}
