use anyhow::{Result, anyhow};
use serde_json::json;
use tb_catalog::{Catalog, PartQuery};
use tb_core::{Category, Part, TrustTier, pricing};

use super::{format_usd, print_json};
use crate::cli::PartsCommands;

pub fn handle(cmd: PartsCommands, catalog: &Catalog) -> Result<()> {
    match cmd {
        PartsCommands::List {
            category,
            search,
            sort,
            json,
        } => {
            let query = PartQuery {
                category,
                text: search,
                sort: sort.into(),
            };
            list(catalog, &query, json)
        }
        PartsCommands::Show { id, json } => show(catalog, &id, json),
    }
}

fn list(catalog: &Catalog, query: &PartQuery, json: bool) -> Result<()> {
    let parts = catalog.list(query);
    if json {
        return print_json(&parts);
    }

    if parts.is_empty() {
        println!("No parts found.");
        return Ok(());
    }

    println!("{}", list_heading(query.category, parts.len()));
    for part in parts {
        println!(
            "  {:<24} {:<12} {:<40} {:>8}  trust {}",
            part.id,
            part.category.label(),
            part.name,
            format_usd(pricing::lowest_price(part)),
            part.trust_score
        );
    }
    Ok(())
}

fn show(catalog: &Catalog, id: &str, json: bool) -> Result<()> {
    let part = catalog
        .part(id)
        .ok_or_else(|| anyhow!("No part with id '{id}'"))?;
    let tier = TrustTier::from_score(part.trust_score);
    let alternatives = catalog.alternatives(&part.id);

    if json {
        return print_json(&json!({
            "part": part,
            "tier": tier.label(),
            "lowestPrice": pricing::lowest_price(part),
            "highestPrice": pricing::highest_price(part),
            "bestOffer": pricing::best_offer(part),
            "breakdown": part.trust_factors.breakdown(),
            "alternatives": alternatives,
        }));
    }

    println!("{} ({})", part.name, part.id);
    println!("  Category: {}", part.category.label());
    println!("  Brand: {}", part.brand);
    println!("  Price: {}", price_range(part));
    println!("  Trust score: {} ({})", part.trust_score, tier.label());
    for check in part.trust_factors.breakdown() {
        let mark = if check.good { "✓" } else { "✗" };
        println!("    {} {}: {}", mark, check.label, check.value);
    }

    if !part.specs.is_empty() {
        println!("\nSpecs:");
        for (key, value) in &part.specs {
            println!("  {key}: {value}");
        }
    }

    print_listings(catalog, part);

    if !alternatives.is_empty() {
        println!("\nAlternatives:");
        for alt in alternatives {
            println!(
                "  {} ({}) {}  trust {}",
                alt.name,
                alt.id,
                format_usd(pricing::lowest_price(alt)),
                alt.trust_score
            );
        }
    }
    Ok(())
}

fn print_listings(catalog: &Catalog, part: &Part) {
    println!("\nPrices:");
    for listing in pricing::listings_for_display(part) {
        let retailer = catalog
            .retailer(listing.retailer)
            .map_or(listing.retailer.display_name(), |info| info.name.as_str());
        let stock = if listing.in_stock {
            "In stock"
        } else {
            "Out of stock"
        };
        println!(
            "  {:<14} {:>8}  {:<12} updated {}",
            retailer,
            format_usd(listing.price),
            stock,
            listing.last_updated
        );
    }

    match pricing::best_offer(part) {
        Some(offer) => println!(
            "Best offer: {} at {} ({})",
            offer.retailer,
            format_usd(offer.price),
            offer.url
        ),
        None => println!("Out of stock everywhere"),
    }
}

fn list_heading(category: Option<Category>, count: usize) -> String {
    let title = category.map_or("Parts", Category::plural);
    format!("{title} ({count}):")
}

/// Lowest resolved price up to the highest listed one
fn price_range(part: &Part) -> String {
    let low = pricing::lowest_price(part);
    let high = pricing::highest_price(part);
    if high > low {
        format!("{} - {}", format_usd(low), format_usd(high))
    } else {
        format_usd(low)
    }
}
