use crate::from_wei;
use crate::opensea::types::Asset;
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

// A listing passes when no order below min_eth overlaps the cutoff date.
// Orders are checked in API order; the first violation decides the verdict.
pub fn is_valid_listing(asset: &Asset, cutoff_date: NaiveDate, min_eth: f64) -> Result<bool> {
    let orders = match asset.orders.as_deref() {
        Some(orders) => orders,
        None => return Ok(true),
    };

    // no order history means the token has never been listed
    if orders.is_empty() {
        return Ok(true);
    }

    for order in orders {
        let listing_date = parse_order_date(&order.created_date)?;

        let relevant = match order.closing_date.as_deref() {
            // still open, only the listing date matters
            None | Some("") => listed_on_or_after_cutoff(listing_date, cutoff_date),
            Some(closing) => {
                let end_listing_date = parse_order_date(closing)?;
                straddles_cutoff(listing_date, end_listing_date, cutoff_date)
                    || listed_on_or_after_cutoff(listing_date, cutoff_date)
            }
        };

        if relevant && eth_price(&order.current_price)? < min_eth {
            return Ok(false);
        }
    }

    Ok(true)
}

pub fn listed_on_or_after_cutoff(listing_date: NaiveDate, cutoff_date: NaiveDate) -> bool {
    listing_date >= cutoff_date
}

pub fn straddles_cutoff(
    listing_date: NaiveDate,
    end_listing_date: NaiveDate,
    cutoff_date: NaiveDate,
) -> bool {
    listing_date < cutoff_date && end_listing_date > cutoff_date
}

// order timestamps carry the calendar date in their first 10 characters
pub fn parse_order_date(stamp: &str) -> Result<NaiveDate> {
    let date = stamp
        .get(..10)
        .ok_or_else(|| anyhow!("order date too short: {:?}", stamp))?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("bad order date: {:?}", stamp))
}

pub fn eth_price(wei: &str) -> Result<f64> {
    let raw = wei
        .parse::<f64>()
        .with_context(|| format!("bad order price: {:?}", wei))?;
    Ok(from_wei(raw))
}
