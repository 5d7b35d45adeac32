use anyhow::{Result, bail};
use serde_json::json;
use tb_catalog::Catalog;

use super::print_json;

pub fn handle(catalog: &Catalog, json: bool) -> Result<()> {
    let issues = catalog.audit();

    if json {
        print_json(&json!({
            "parts": catalog.parts().len(),
            "builds": catalog.builds().len(),
            "fingerprint": catalog.fingerprint(),
            "issues": issues,
        }))?;
    } else {
        println!(
            "Catalog: {} parts, {} builds",
            catalog.parts().len(),
            catalog.builds().len()
        );
        if let Some(fingerprint) = catalog.fingerprint() {
            println!("  Fingerprint: {fingerprint}");
        }
        if issues.is_empty() {
            println!("✓ No issues found.");
        } else {
            println!("\nIssues ({}):", issues.len());
            for issue in &issues {
                println!("  - {issue}");
            }
        }
    }

    if !issues.is_empty() {
        bail!("{} catalog issue(s) found", issues.len());
    }
    Ok(())
}
