//! Pricing resolution over retailer listings
//!
//! Every function here is total: [`Listings`](crate::Listings) guarantees at
//! least one listing, so a price always resolves.

use crate::{Part, RetailerListing};

/// Lowest in-stock price, falling back to the lowest price overall when
/// nothing is in stock.
pub fn lowest_price(part: &Part) -> f64 {
    let in_stock = part
        .retailers
        .iter()
        .filter(|l| l.in_stock)
        .map(|l| l.price)
        .reduce(f64::min);

    in_stock.unwrap_or_else(|| min_price(part.retailers.iter()))
}

/// Highest price across all listings, stock ignored
pub fn highest_price(part: &Part) -> f64 {
    part.retailers
        .iter()
        .map(|l| l.price)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Cheapest in-stock listing; first one wins on ties
pub fn best_offer(part: &Part) -> Option<&RetailerListing> {
    part.retailers
        .iter()
        .filter(|l| l.in_stock)
        .min_by(|a, b| a.price.total_cmp(&b.price))
}

pub fn is_available(part: &Part) -> bool {
    part.retailers.iter().any(|l| l.in_stock)
}

/// Listings ordered for a price table: in-stock first, then cheapest first
pub fn listings_for_display(part: &Part) -> Vec<&RetailerListing> {
    let mut listings: Vec<_> = part.retailers.iter().collect();
    listings.sort_by(|a, b| {
        b.in_stock
            .cmp(&a.in_stock)
            .then(a.price.total_cmp(&b.price))
    });
    listings
}

/// Sum of [`lowest_price`] over `parts`
pub fn total_lowest_price<'a>(parts: impl IntoIterator<Item = &'a Part>) -> f64 {
    parts.into_iter().map(lowest_price).sum()
}

fn min_price<'a>(listings: impl Iterator<Item = &'a RetailerListing>) -> f64 {
    listings.map(|l| l.price).fold(f64::INFINITY, f64::min)
}
