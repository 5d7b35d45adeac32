use anyhow::Result;
use serde_json::json;
use tb_config::BudgetConfig;
use tb_core::Category;
use tb_engine::{Advisor, CurrentParts, UpgradeRecommendation};
use tracing::debug;

use super::{format_usd, print_json};

pub fn handle(
    advisor: &Advisor<'_>,
    limits: &BudgetConfig,
    budget: Option<f64>,
    parts: Vec<(Category, String)>,
    json: bool,
) -> Result<()> {
    // upgrade budgets are not clamped
    let budget = budget.unwrap_or(limits.default_upgrade);

    let mut current = CurrentParts::new();
    for (category, text) in parts {
        if let Some(selection) = advisor.select(category, &text) {
            debug!(%category, ?selection, "Current part");
            current.insert(category, selection);
        }
    }

    let recommendations = advisor.recommend_upgrades(&current, budget);
    let total: f64 = recommendations.iter().map(|r| r.price).sum();

    if json {
        return print_json(&json!({
            "budget": budget,
            "total": total,
            "recommendations": recommendations,
        }));
    }

    if recommendations.is_empty() {
        println!("No upgrades fit within {}.", format_usd(budget));
        return Ok(());
    }

    println!("Recommended upgrades ({} of {}):", format_usd(total), format_usd(budget));
    for rec in &recommendations {
        print_recommendation(rec);
    }
    Ok(())
}

fn print_recommendation(rec: &UpgradeRecommendation<'_>) {
    let current = rec
        .current
        .map(|p| p.name.as_str())
        .or(rec.current_label.as_deref())
        .unwrap_or("unknown");

    println!(
        "\n  [{}] {}: {} -> {} ({})",
        rec.priority.as_str().to_uppercase(),
        rec.category.label(),
        current,
        rec.recommended.name,
        format_usd(rec.price)
    );
    println!("    {}", rec.reason);
    match rec.current {
        Some(part) => println!(
            "    Gain: {} | Trust {} -> {}",
            rec.performance_gain, part.trust_score, rec.recommended.trust_score
        ),
        None => println!(
            "    Gain: {} | Trust {}",
            rec.performance_gain, rec.recommended.trust_score
        ),
    }
}
