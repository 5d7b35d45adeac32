//! Budget build selection

use tb_core::EnrichedBuild;

/// The build that spends the most without exceeding `budget`.
///
/// Among builds with the same total the earliest one in `builds` wins.
/// `None` means nothing fits, which callers show as "budget too low".
pub fn best_build_for_budget<'b, 'a>(
    builds: &'b [EnrichedBuild<'a>],
    budget: f64,
) -> Option<&'b EnrichedBuild<'a>> {
    builds
        .iter()
        .filter(|b| b.lowest_total_price <= budget)
        // min_by keeps the first of equal elements
        .min_by(|a, b| b.lowest_total_price.total_cmp(&a.lowest_total_price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich_all;
    use crate::test_support::{build, catalog, part};
    use tb_catalog::Catalog;
    use tb_core::Category;

    /// Three single-GPU builds priced 900, 1400 and 2200
    fn tiered() -> Catalog {
        catalog(
            vec![
                part("gpu-mid", Category::Gpu, 85, 1400.0),
                part("gpu-low", Category::Gpu, 80, 900.0),
                part("gpu-high", Category::Gpu, 90, 2200.0),
            ],
            vec![
                build("mid", &["gpu-mid"]),
                build("low", &["gpu-low"]),
                build("high", &["gpu-high"]),
            ],
        )
    }

    fn pick(builds: &[EnrichedBuild<'_>], budget: f64) -> Option<String> {
        best_build_for_budget(builds, budget).map(|b| b.build.id.clone())
    }

    #[test]
    fn test_selects_most_expensive_affordable_build() {
        let catalog = tiered();
        let builds = enrich_all(&catalog);

        assert_eq!(pick(&builds, 1500.0).as_deref(), Some("mid"));
        assert_eq!(pick(&builds, 800.0), None);
        assert_eq!(pick(&builds, 2500.0).as_deref(), Some("high"));
        assert_eq!(pick(&builds, 900.0).as_deref(), Some("low"));
    }

    #[test]
    fn test_monotonic_in_budget() {
        let catalog = tiered();
        let builds = enrich_all(&catalog);

        let mut last = 0.0;
        let mut found_any = false;
        for budget in (0..=3000).step_by(50) {
            match best_build_for_budget(&builds, budget as f64) {
                Some(b) => {
                    assert!(b.lowest_total_price >= last);
                    last = b.lowest_total_price;
                    found_any = true;
                }
                None => assert!(!found_any, "selection vanished at budget {budget}"),
            }
        }
    }

    #[test]
    fn test_ties_prefer_catalog_order() {
        let catalog = catalog(
            vec![
                part("gpu-a", Category::Gpu, 80, 1000.0),
                part("gpu-b", Category::Gpu, 90, 1000.0),
            ],
            vec![build("first", &["gpu-a"]), build("second", &["gpu-b"])],
        );
        let builds = enrich_all(&catalog);
        assert_eq!(pick(&builds, 1200.0).as_deref(), Some("first"));
    }

    #[test]
    fn test_no_builds() {
        assert!(best_build_for_budget(&[], 10_000.0).is_none());
    }
}
