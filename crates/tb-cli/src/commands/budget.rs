use anyhow::Result;
use serde_json::json;
use tb_config::BudgetConfig;
use tb_engine::Advisor;

use super::builds::print_summary;
use super::{format_usd, print_json};

pub fn handle(
    advisor: &Advisor<'_>,
    limits: &BudgetConfig,
    amount: Option<f64>,
    json: bool,
) -> Result<()> {
    let requested = amount.unwrap_or(limits.default_build);
    let budget = limits.clamp(requested);
    let best = advisor.best_build_for_budget(budget);

    if json {
        return print_json(&json!({ "budget": budget, "build": best }));
    }

    if budget != requested {
        println!(
            "Budget adjusted to {} (allowed range {} to {})",
            format_usd(budget),
            format_usd(limits.min),
            format_usd(limits.max),
        );
    }

    match best {
        Some(build) => {
            println!("Best build for {}:", format_usd(budget));
            print_summary(&build);
        }
        None => println!("Budget too low: no build fits within {}.", format_usd(budget)),
    }
    Ok(())
}
