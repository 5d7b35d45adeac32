//! Immutable in-memory catalog

use std::collections::{BTreeMap, HashMap};

use tb_core::{Build, Category, Part, Retailer, RetailerInfo};
use tracing::{debug, warn};

use crate::audit::{self, Issue};
use crate::{CatalogError, Result};

/// What to do with integrity issues found while building a catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Log each issue and keep going
    #[default]
    Lenient,
    /// Refuse to build a catalog with any issue
    Strict,
}

/// Parts and builds loaded once at startup and never mutated afterwards.
///
/// Iteration order is insertion order, which the engine uses for
/// tie-breaking.
#[derive(Debug, Clone)]
pub struct Catalog {
    parts: Vec<Part>,
    builds: Vec<Build>,
    retailers: Vec<RetailerInfo>,
    part_index: HashMap<String, usize>,
    build_index: HashMap<String, usize>,
    slug_index: HashMap<String, usize>,
    by_category: BTreeMap<Category, Vec<usize>>,
    /// Issues only visible while reading files, e.g. misfiled parts
    load_issues: Vec<Issue>,
    pub(crate) fingerprint: Option<String>,
}

impl Catalog {
    pub fn new(
        parts: Vec<Part>,
        builds: Vec<Build>,
        retailers: Vec<RetailerInfo>,
        mode: ValidationMode,
    ) -> Result<Self> {
        Self::with_load_issues(parts, builds, retailers, Vec::new(), mode)
    }

    /// Like [`Catalog::new`], also carrying issues the loader found
    pub(crate) fn with_load_issues(
        parts: Vec<Part>,
        builds: Vec<Build>,
        retailers: Vec<RetailerInfo>,
        load_issues: Vec<Issue>,
        mode: ValidationMode,
    ) -> Result<Self> {
        let mut part_index = HashMap::with_capacity(parts.len());
        let mut by_category: BTreeMap<Category, Vec<usize>> = BTreeMap::new();
        for (i, part) in parts.iter().enumerate() {
            if part_index.insert(part.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicatePart(part.id.clone()));
            }
            by_category.entry(part.category).or_default().push(i);
        }

        let mut build_index = HashMap::with_capacity(builds.len());
        let mut slug_index = HashMap::with_capacity(builds.len());
        for (i, build) in builds.iter().enumerate() {
            if build_index.insert(build.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateBuild(build.id.clone()));
            }
            if slug_index.insert(build.slug.clone(), i).is_some() {
                return Err(CatalogError::DuplicateBuild(build.slug.clone()));
            }
        }

        let catalog = Self {
            parts,
            builds,
            retailers,
            part_index,
            build_index,
            slug_index,
            by_category,
            load_issues,
            fingerprint: None,
        };

        let issues = catalog.audit();
        if !issues.is_empty() {
            match mode {
                ValidationMode::Strict => return Err(CatalogError::Integrity(issues)),
                ValidationMode::Lenient => {
                    for issue in &issues {
                        warn!(%issue, "Catalog integrity issue");
                    }
                }
            }
        }

        Ok(catalog)
    }

    pub fn part(&self, id: &str) -> Option<&Part> {
        self.part_index.get(id).map(|&i| &self.parts[i])
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Parts of one category, in catalog order
    pub fn parts_in(&self, category: Category) -> impl Iterator<Item = &Part> {
        self.by_category
            .get(&category)
            .into_iter()
            .flatten()
            .map(|&i| &self.parts[i])
    }

    pub fn builds(&self) -> &[Build] {
        &self.builds
    }

    pub fn build(&self, id: &str) -> Option<&Build> {
        self.build_index.get(id).map(|&i| &self.builds[i])
    }

    pub fn build_by_slug(&self, slug: &str) -> Option<&Build> {
        self.slug_index.get(slug).map(|&i| &self.builds[i])
    }

    pub fn retailers(&self) -> &[RetailerInfo] {
        &self.retailers
    }

    pub fn retailer(&self, id: Retailer) -> Option<&RetailerInfo> {
        self.retailers.iter().find(|r| r.id == id)
    }

    /// Substitutes of a part; unknown ids are skipped
    pub fn alternatives(&self, part_id: &str) -> Vec<&Part> {
        self.part(part_id)
            .map(|part| {
                part.alternative_ids
                    .iter()
                    .filter_map(|id| self.part(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A build's parts in component order; unknown ids are dropped
    pub fn resolve_components(&self, build: &Build) -> Vec<&Part> {
        build
            .component_ids
            .iter()
            .filter_map(|id| {
                let part = self.part(id);
                if part.is_none() {
                    debug!(build = %build.slug, part = %id, "Dropping unresolved component");
                }
                part
            })
            .collect()
    }

    /// Issues found at load time plus every check recomputed against the contents
    pub fn audit(&self) -> Vec<Issue> {
        let mut issues = self.load_issues.clone();
        issues.extend(audit::audit(self));
        issues
    }

    /// BLAKE3 digest of the files this catalog was loaded from
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }
}
