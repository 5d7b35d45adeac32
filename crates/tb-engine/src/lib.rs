//! Scoring and recommendation engine for trustbuilds
//!
//! This crate provides:
//! - Build enrichment (resolved components, live totals, build trust score)
//! - The budget build selector
//! - The upgrade recommendation engine and its per-category templates
//!
//! Everything here is a pure function of an immutable [`Catalog`].

pub mod budget;
pub mod enrich;
pub mod upgrade;

pub use budget::best_build_for_budget;
pub use enrich::{enrich, enrich_all};
pub use upgrade::{CurrentParts, Priority, Selection, UpgradeRecommendation, recommend_upgrades};

use tb_catalog::Catalog;
use tb_core::{Build, EnrichedBuild};

/// Entry point bundling the engine operations over one catalog
#[derive(Debug, Clone, Copy)]
pub struct Advisor<'a> {
    catalog: &'a Catalog,
}

impl<'a> Advisor<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn enrich(&self, build: &'a Build) -> EnrichedBuild<'a> {
        enrich::enrich(self.catalog, build)
    }

    pub fn enrich_all(&self) -> Vec<EnrichedBuild<'a>> {
        enrich::enrich_all(self.catalog)
    }

    /// Enrich every build and pick the best one for `budget`
    pub fn best_build_for_budget(&self, budget: f64) -> Option<EnrichedBuild<'a>> {
        let builds = self.enrich_all();
        budget::best_build_for_budget(&builds, budget).cloned()
    }

    pub fn recommend_upgrades(
        &self,
        current: &CurrentParts,
        budget: f64,
    ) -> Vec<UpgradeRecommendation<'a>> {
        upgrade::recommend_upgrades(self.catalog, current, budget)
    }

    /// Resolve free-form input for one slot, see [`Selection::from_input`]
    pub fn select(&self, category: tb_core::Category, text: &str) -> Option<Selection> {
        Selection::from_input(self.catalog, category, text)
    }
}

#[cfg(test)]
mod test_support;
