//! Catalog integrity checks

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tb_core::Category;

use crate::Catalog;

/// A single integrity problem in the catalog data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    TrustScoreMismatch {
        part: String,
        stored: u8,
        computed: u8,
    },
    DanglingComponent {
        build: String,
        part: String,
    },
    DanglingAlternative {
        part: String,
        alternative: String,
    },
    AlternativeCategory {
        part: String,
        alternative: String,
    },
    DuplicateCategoryInBuild {
        build: String,
        category: Category,
    },
    /// Part found in the file of another category
    MisfiledPart {
        part: String,
        file: String,
        category: Category,
    },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::TrustScoreMismatch {
                part,
                stored,
                computed,
            } => write!(
                f,
                "part {part}: stored trust score {stored} but factors give {computed}"
            ),
            Issue::DanglingComponent { build, part } => {
                write!(f, "build {build}: component {part} is not in the catalog")
            }
            Issue::DanglingAlternative { part, alternative } => {
                write!(f, "part {part}: alternative {alternative} is not in the catalog")
            }
            Issue::AlternativeCategory { part, alternative } => {
                write!(f, "part {part}: alternative {alternative} is in another category")
            }
            Issue::DuplicateCategoryInBuild { build, category } => {
                write!(f, "build {build}: more than one {category} component")
            }
            Issue::MisfiledPart {
                part,
                file,
                category,
            } => write!(f, "part {part}: filed in {file} but its category is {category}"),
        }
    }
}

pub(crate) fn audit(catalog: &Catalog) -> Vec<Issue> {
    let mut issues = Vec::new();

    for part in catalog.parts() {
        if !part.trust_score_is_consistent() {
            issues.push(Issue::TrustScoreMismatch {
                part: part.id.clone(),
                stored: part.trust_score,
                computed: part.trust_factors.score(),
            });
        }

        for alt_id in &part.alternative_ids {
            match catalog.part(alt_id) {
                None => issues.push(Issue::DanglingAlternative {
                    part: part.id.clone(),
                    alternative: alt_id.clone(),
                }),
                Some(alt) if alt.category != part.category => {
                    issues.push(Issue::AlternativeCategory {
                        part: part.id.clone(),
                        alternative: alt_id.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    for build in catalog.builds() {
        let mut seen = HashSet::new();
        for id in &build.component_ids {
            match catalog.part(id) {
                None => issues.push(Issue::DanglingComponent {
                    build: build.id.clone(),
                    part: id.clone(),
                }),
                Some(part) if part.category.is_core() && !seen.insert(part.category) => {
                    issues.push(Issue::DuplicateCategoryInBuild {
                        build: build.id.clone(),
                        category: part.category,
                    })
                }
                Some(_) => {}
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use crate::test_support::{build, part};
    use crate::{Catalog, Issue, ValidationMode};
    use tb_core::Category;

    #[test]
    fn test_clean_catalog_has_no_issues() {
        let catalog = Catalog::new(
            vec![part("cpu-a", Category::Cpu, 200.0), part("gpu-a", Category::Gpu, 400.0)],
            vec![build("b1", &["cpu-a", "gpu-a"])],
            Vec::new(),
            ValidationMode::Strict,
        )
        .unwrap();
        assert!(catalog.audit().is_empty());
    }

    #[test]
    fn test_reports_every_issue_kind() {
        let mut cpu = part("cpu-a", Category::Cpu, 200.0);
        cpu.trust_score = 12;
        cpu.alternative_ids = vec!["gpu-a".into(), "cpu-zzz".into()];
        let parts = vec![
            cpu,
            part("cpu-b", Category::Cpu, 250.0),
            part("gpu-a", Category::Gpu, 400.0),
        ];
        let builds = vec![build("b1", &["cpu-a", "cpu-b", "gpu-a", "ghost"])];

        let catalog = Catalog::new(parts, builds, Vec::new(), ValidationMode::Lenient).unwrap();
        let issues = catalog.audit();

        assert_eq!(issues.len(), 5);
        assert!(matches!(
            &issues[0],
            Issue::TrustScoreMismatch { stored: 12, computed: 78, .. }
        ));
        assert!(issues.contains(&Issue::AlternativeCategory {
            part: "cpu-a".into(),
            alternative: "gpu-a".into(),
        }));
        assert!(issues.contains(&Issue::DanglingAlternative {
            part: "cpu-a".into(),
            alternative: "cpu-zzz".into(),
        }));
        assert!(issues.contains(&Issue::DuplicateCategoryInBuild {
            build: "b1".into(),
            category: Category::Cpu,
        }));
        assert!(issues.contains(&Issue::DanglingComponent {
            build: "b1".into(),
            part: "ghost".into(),
        }));
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::DanglingComponent {
            build: "b1".into(),
            part: "ghost".into(),
        };
        assert_eq!(issue.to_string(), "build b1: component ghost is not in the catalog");

        let issue = Issue::MisfiledPart {
            part: "gpu-a".into(),
            file: "cpus.json".into(),
            category: Category::Gpu,
        };
        assert_eq!(issue.to_string(), "part gpu-a: filed in cpus.json but its category is gpu");
    }

    #[test]
    fn test_load_issues_are_reported_and_enforced() {
        let misfiled = Issue::MisfiledPart {
            part: "gpu-a".into(),
            file: "cpus.json".into(),
            category: Category::Gpu,
        };

        let catalog = Catalog::with_load_issues(
            vec![part("gpu-a", Category::Gpu, 400.0)],
            Vec::new(),
            Vec::new(),
            vec![misfiled.clone()],
            ValidationMode::Lenient,
        )
        .unwrap();
        assert_eq!(catalog.audit(), vec![misfiled.clone()]);

        let err = Catalog::with_load_issues(
            vec![part("gpu-a", Category::Gpu, 400.0)],
            Vec::new(),
            Vec::new(),
            vec![misfiled.clone()],
            ValidationMode::Strict,
        )
        .unwrap_err();
        assert!(matches!(err, crate::CatalogError::Integrity(issues) if issues == vec![misfiled]));
    }
}
