use anyhow::{Result, anyhow};
use tb_core::{EnrichedBuild, TrustTier, pricing};
use tb_engine::Advisor;

use super::{format_usd, print_json};
use crate::cli::BuildsCommands;

pub fn handle(cmd: BuildsCommands, advisor: &Advisor<'_>) -> Result<()> {
    match cmd {
        BuildsCommands::List { json } => list(advisor, json),
        BuildsCommands::Show { slug, json } => show(advisor, &slug, json),
    }
}

fn list(advisor: &Advisor<'_>, json: bool) -> Result<()> {
    let builds = advisor.enrich_all();
    if json {
        return print_json(&builds);
    }

    if builds.is_empty() {
        println!("No builds found.");
        return Ok(());
    }

    println!("Builds:");
    for build in &builds {
        print_summary(build);
    }
    Ok(())
}

fn show(advisor: &Advisor<'_>, slug: &str, json: bool) -> Result<()> {
    let build = advisor
        .catalog()
        .build_by_slug(slug)
        .ok_or_else(|| anyhow!("No build with slug '{slug}'"))?;
    let enriched = advisor.enrich(build);
    if json {
        return print_json(&enriched);
    }

    print_summary(&enriched);
    if !build.description.is_empty() {
        println!("\n{}", build.description);
    }
    println!("  Difficulty: {}", build.difficulty);
    println!("  Updated: {}", build.last_updated);

    println!("\nComponents ({}):", enriched.components.len());
    for part in &enriched.components {
        let stock = if pricing::is_available(part) {
            ""
        } else {
            "  (out of stock)"
        };
        println!(
            "  {:<12} {:<40} {:>8}  trust {}{}",
            part.category.label(),
            part.name,
            format_usd(pricing::lowest_price(part)),
            part.trust_score,
            stock
        );
    }
    Ok(())
}

pub(crate) fn print_summary(build: &EnrichedBuild<'_>) {
    println!("  {} ({})", build.build.name, build.build.slug);
    println!(
        "    {} today, listed around {} | {} @ {} FPS | {}",
        format_usd(build.lowest_total_price),
        format_usd(build.display_price),
        build.build.target_resolution,
        build.build.target_fps,
        build.build.use_case
    );
    println!(
        "    Trust score: {} ({})",
        build.trust_score,
        TrustTier::from_score(build.trust_score).label()
    );
    if build.has_out_of_stock {
        println!("    Some components are out of stock");
    }
}
