pub mod budget;
pub mod builds;
pub mod parts;
pub mod score;
pub mod upgrade;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tb_catalog::{Catalog, ValidationMode};
use tb_config::Config;

/// Explicit config file, or the default one (created on first run)
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to read config {}", path.display())),
        None => Config::load(),
    }
}

pub async fn load_catalog(root: &Path, mode: ValidationMode) -> Result<Catalog> {
    Catalog::load(root, mode)
        .await
        .with_context(|| format!("Failed to load catalog from {}", root.display()))
}

/// `--catalog` wins over `catalog.path`
pub fn catalog_root(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.unwrap_or_else(|| config.catalog.path.clone())
}

pub fn validation_mode(strict_flag: bool, config: &Config) -> ValidationMode {
    if strict_flag || config.catalog.strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Lenient
    }
}

/// Whole US dollars with thousands separators, e.g. `$1,499`
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
