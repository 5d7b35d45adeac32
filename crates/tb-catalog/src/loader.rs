//! Catalog loading from the on-disk JSON layout
//!
//! ```text
//! <root>/parts/cpus.json ... <root>/parts/headsets.json   (one file per category, optional)
//! <root>/builds.json                                       (required)
//! <root>/retailers.json                                    (optional)
//! ```

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tb_core::{Build, Category, Part, RetailerInfo};
use tracing::{debug, info};

use crate::{Catalog, CatalogError, Issue, Result, ValidationMode};

impl Catalog {
    /// Load and validate the catalog rooted at `root`.
    ///
    /// Part files are merged in category order, which fixes the catalog's
    /// iteration order.
    pub async fn load(root: impl AsRef<Path>, mode: ValidationMode) -> Result<Self> {
        let root = root.as_ref();
        let mut hasher = blake3::Hasher::new();

        let mut parts: Vec<Part> = Vec::new();
        let mut load_issues = Vec::new();
        for category in Category::ALL {
            let path = root.join("parts").join(format!("{}.json", category.file_stem()));
            let Some(bytes) = read_optional(&path).await? else {
                debug!(%category, path = %path.display(), "No parts file, category is empty");
                continue;
            };
            hasher.update(category.file_stem().as_bytes());
            hasher.update(&bytes);

            let batch: Vec<Part> = parse(&path, &bytes)?;
            for part in batch.iter().filter(|p| p.category != category) {
                load_issues.push(Issue::MisfiledPart {
                    part: part.id.clone(),
                    file: format!("parts/{}.json", category.file_stem()),
                    category: part.category,
                });
            }
            debug!(%category, count = batch.len(), "Loaded parts");
            parts.extend(batch);
        }

        let builds_path = root.join("builds.json");
        let bytes = tokio::fs::read(&builds_path)
            .await
            .map_err(|source| CatalogError::Io {
                path: builds_path.clone(),
                source,
            })?;
        hasher.update(b"builds");
        hasher.update(&bytes);
        let builds: Vec<Build> = parse(&builds_path, &bytes)?;

        let retailers_path = root.join("retailers.json");
        let retailers: Vec<RetailerInfo> = match read_optional(&retailers_path).await? {
            Some(bytes) => {
                hasher.update(b"retailers");
                hasher.update(&bytes);
                parse(&retailers_path, &bytes)?
            }
            None => Vec::new(),
        };

        let mut catalog = Catalog::with_load_issues(parts, builds, retailers, load_issues, mode)?;
        catalog.fingerprint = Some(hasher.finalize().to_hex().to_string());

        info!(
            root = %root.display(),
            parts = catalog.parts().len(),
            builds = catalog.builds().len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }
}

async fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(CatalogError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|source| CatalogError::Json {
        path: PathBuf::from(path),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn part_json(id: &str, category: &str, price: f64, in_stock: bool) -> serde_json::Value {
        json!({
            "id": id,
            "category": category,
            "brand": "Acme",
            "model": id,
            "name": format!("Acme {id}"),
            "specs": {},
            "trustFactors": {
                "failureRate": 1.0,
                "warrantyYears": 3,
                "brandReputation": 80,
                "rmaRating": 4.0
            },
            "trustScore": 78,
            "retailers": [{
                "retailer": "amazon",
                "price": price,
                "inStock": in_stock,
                "url": "https://example.com",
                "lastUpdated": "2025-01-15"
            }]
        })
    }

    fn build_json(id: &str, components: &[&str]) -> serde_json::Value {
        json!({
            "id": id,
            "slug": format!("{id}-slug"),
            "name": id,
            "description": "",
            "useCase": "Gaming",
            "difficulty": "Easy",
            "targetResolution": "1080p",
            "targetFps": 144,
            "componentIds": components,
            "priceRange": { "min": 700, "max": 900 },
            "lastUpdated": "2025-01-15"
        })
    }

    fn write(root: &Path, rel: &str, value: serde_json::Value) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, serde_json::to_vec_pretty(&value).unwrap()).unwrap();
    }

    #[tokio::test]
    async fn test_load_merges_in_category_order() {
        let dir = tempfile::tempdir().unwrap();
        // written out of order on purpose
        write(dir.path(), "parts/gpus.json", json!([part_json("gpu-a", "gpu", 500.0, true)]));
        write(dir.path(), "parts/cpus.json", json!([part_json("cpu-a", "cpu", 250.0, true)]));
        write(dir.path(), "builds.json", json!([build_json("b1", &["cpu-a", "gpu-a"])]));

        let catalog = Catalog::load(dir.path(), ValidationMode::Strict).await.unwrap();

        let ids: Vec<_> = catalog.parts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["cpu-a", "gpu-a"]);
        assert_eq!(catalog.builds().len(), 1);
        assert!(catalog.retailers().is_empty());
        assert_eq!(catalog.fingerprint().map(str::len), Some(64));
    }

    #[tokio::test]
    async fn test_fingerprint_tracks_content() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "parts/cpus.json", json!([part_json("cpu-a", "cpu", 250.0, true)]));
        write(dir.path(), "builds.json", json!([]));

        let first = Catalog::load(dir.path(), ValidationMode::Lenient).await.unwrap();
        let again = Catalog::load(dir.path(), ValidationMode::Lenient).await.unwrap();
        assert_eq!(first.fingerprint(), again.fingerprint());

        write(dir.path(), "parts/cpus.json", json!([part_json("cpu-a", "cpu", 260.0, true)]));
        let changed = Catalog::load(dir.path(), ValidationMode::Lenient).await.unwrap();
        assert_ne!(first.fingerprint(), changed.fingerprint());
    }

    #[tokio::test]
    async fn test_missing_builds_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(dir.path(), ValidationMode::Lenient).await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[tokio::test]
    async fn test_part_without_listings_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut bad = part_json("cpu-a", "cpu", 250.0, true);
        bad["retailers"] = json!([]);
        write(dir.path(), "parts/cpus.json", json!([bad]));
        write(dir.path(), "builds.json", json!([]));

        let err = Catalog::load(dir.path(), ValidationMode::Lenient).await.unwrap_err();
        match err {
            CatalogError::Json { path, .. } => assert!(path.ends_with("parts/cpus.json")),
            other => panic!("Expected JSON error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_misfiled_part_is_an_issue() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "parts/cpus.json", json!([part_json("gpu-a", "gpu", 500.0, true)]));
        write(dir.path(), "builds.json", json!([]));

        let catalog = Catalog::load(dir.path(), ValidationMode::Lenient).await.unwrap();
        assert_eq!(
            catalog.audit(),
            vec![Issue::MisfiledPart {
                part: "gpu-a".into(),
                file: "parts/cpus.json".into(),
                category: tb_core::Category::Gpu,
            }]
        );

        let err = Catalog::load(dir.path(), ValidationMode::Strict).await.unwrap_err();
        assert!(matches!(err, CatalogError::Integrity(_)));
    }

    #[tokio::test]
    async fn test_reads_retailers() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "builds.json", json!([]));
        write(
            dir.path(),
            "retailers.json",
            json!([{
                "id": "bhphoto",
                "name": "B&H Photo",
                "logo": "/logos/bh.svg",
                "affiliateBaseUrl": "https://bhphoto.com/?tag=tb"
            }]),
        );

        let catalog = Catalog::load(dir.path(), ValidationMode::Strict).await.unwrap();
        let info = catalog.retailer(tb_core::Retailer::Bhphoto).unwrap();
        assert_eq!(info.name, "B&H Photo");
    }
}
