//! Part search and listing queries

use serde::{Deserialize, Serialize};
use tb_core::{Category, Part, pricing};

use crate::Catalog;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartSort {
    /// Name, A to Z
    #[default]
    Name,
    /// Lowest price first
    Price,
    /// Highest trust score first
    Trust,
}

/// Filter and ordering for a part listing
#[derive(Debug, Clone, Default)]
pub struct PartQuery {
    pub category: Option<Category>,
    pub text: Option<String>,
    pub sort: PartSort,
}

impl Catalog {
    /// Case-insensitive substring search over name, model, brand and id.
    ///
    /// A blank query matches every part (of `category`, when given).
    pub fn search(&self, query: &str, category: Option<Category>) -> Vec<&Part> {
        let needle = query.trim().to_lowercase();
        let pool: Box<dyn Iterator<Item = &Part> + '_> = match category {
            Some(category) => Box::new(self.parts_in(category)),
            None => Box::new(self.parts().iter()),
        };
        pool.filter(|part| needle.is_empty() || matches(part, &needle))
            .collect()
    }

    pub fn list(&self, query: &PartQuery) -> Vec<&Part> {
        let mut parts = self.search(query.text.as_deref().unwrap_or(""), query.category);
        match query.sort {
            PartSort::Name => parts.sort_by_cached_key(|p| p.name.to_lowercase()),
            PartSort::Price => parts.sort_by(|a, b| {
                pricing::lowest_price(a).total_cmp(&pricing::lowest_price(b))
            }),
            PartSort::Trust => parts.sort_by(|a, b| b.trust_score.cmp(&a.trust_score)),
        }
        parts
    }

    /// Part of `category` whose id or display name equals `text`, ignoring case
    pub fn find_exact(&self, category: Category, text: &str) -> Option<&Part> {
        let text = text.trim();
        self.parts_in(category)
            .find(|p| p.id.eq_ignore_ascii_case(text) || p.name.eq_ignore_ascii_case(text))
    }
}

fn matches(part: &Part, needle: &str) -> bool {
    [&part.name, &part.model, &part.brand, &part.id]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
