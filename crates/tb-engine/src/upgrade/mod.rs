//! Upgrade recommendations
//!
//! For every category the user filled in, propose the single most trusted
//! affordable replacement, then accept proposals in priority order while
//! they still fit the budget. The acceptance pass is greedy and never
//! backtracks: an expensive high-priority pick can crowd out cheaper
//! low-priority ones.

pub mod templates;

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tb_catalog::Catalog;
use tb_core::{Category, Part, pricing};
use tracing::debug;

use templates::Context;

/// What the user told us is currently installed in one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Selection {
    /// A catalog part id
    Matched(String),
    /// Free text that matched nothing in the catalog
    Unmatched(String),
}

impl Selection {
    /// Resolve user input the way the advisor's autocomplete does: an exact
    /// id or name match in `category` becomes [`Selection::Matched`],
    /// anything else is kept as free text. Blank input selects nothing.
    pub fn from_input(catalog: &Catalog, category: Category, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(match catalog.find_exact(category, text) {
            Some(part) => Selection::Matched(part.id.clone()),
            None => Selection::Unmatched(text.to_string()),
        })
    }
}

/// Current parts by category; iteration follows category order
pub type CurrentParts = BTreeMap<Category, Selection>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeRecommendation<'a> {
    pub category: Category,
    /// Installed part, when the selection matched the catalog
    pub current: Option<&'a Part>,
    /// The user's free text, when it did not
    pub current_label: Option<String>,
    pub recommended: &'a Part,
    pub reason: String,
    pub priority: Priority,
    pub performance_gain: String,
    pub price: f64,
}

pub fn recommend_upgrades<'a>(
    catalog: &'a Catalog,
    current: &CurrentParts,
    budget: f64,
) -> Vec<UpgradeRecommendation<'a>> {
    let proposals = current
        .iter()
        .filter_map(|(&category, selection)| propose(catalog, category, selection, budget))
        .collect();
    fit_to_budget(proposals, budget)
}

/// Stable-sort by priority, then accept each recommendation whose price
/// still fits in what is left of `budget`.
pub fn fit_to_budget(
    mut recommendations: Vec<UpgradeRecommendation<'_>>,
    budget: f64,
) -> Vec<UpgradeRecommendation<'_>> {
    recommendations.sort_by_key(|r| r.priority);

    let mut running_total = 0.0;
    recommendations.retain(|r| {
        if running_total + r.price <= budget {
            running_total += r.price;
            true
        } else {
            debug!(
                category = %r.category,
                part = %r.recommended.id,
                price = r.price,
                running_total,
                "Skipping recommendation over remaining budget"
            );
            false
        }
    });
    recommendations
}

fn propose<'a>(
    catalog: &'a Catalog,
    category: Category,
    selection: &Selection,
    budget: f64,
) -> Option<UpgradeRecommendation<'a>> {
    let (current, label) = match selection {
        Selection::Matched(id) => match catalog.part(id) {
            Some(part) if part.category == category => (Some(part), None),
            Some(part) => {
                debug!(
                    %category,
                    part = %id,
                    part_category = %part.category,
                    "Selected part belongs to another category, treating as free text"
                );
                (None, Some(id.clone()))
            }
            None => {
                debug!(%category, part = %id, "Selected part not in catalog, treating as free text");
                (None, Some(id.clone()))
            }
        },
        Selection::Unmatched(text) => (None, Some(text.clone())),
    };

    let Some(recommended) = best_candidate(catalog.parts_in(category), current, budget) else {
        debug!(%category, "No affordable upgrade");
        return None;
    };

    let template = templates::for_category(category);
    let ctx = Context {
        current,
        current_name: current.map_or_else(|| label.as_deref().unwrap_or_default(), |p| p.model.as_str()),
        recommended,
    };

    Some(UpgradeRecommendation {
        category,
        current,
        reason: (template.reason)(&ctx),
        priority: (template.priority)(current),
        performance_gain: (template.gain)(&ctx),
        price: pricing::lowest_price(recommended),
        current_label: label,
        recommended,
    })
}

/// Highest trust score among affordable parts that beat `baseline`
/// (any part when there is no baseline). First in catalog order wins ties.
fn best_candidate<'a>(
    pool: impl Iterator<Item = &'a Part>,
    baseline: Option<&Part>,
    budget: f64,
) -> Option<&'a Part> {
    pool.filter(|p| baseline.is_none_or(|b| p.trust_score > b.trust_score))
        .filter(|p| pricing::lowest_price(p) <= budget)
        .min_by_key(|p| Reverse(p.trust_score))
}
