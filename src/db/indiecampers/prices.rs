use jiff::civil::Date;
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Serialize;

use super::availability::AvailabilityOffer;
use super::catalog::SUPPLIER;
use crate::error::ScrapeError;

/// The price of one available van for one week, as stored in the `prices`
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRecord {
    pub supplier: String,
    pub total_price: Decimal,
    pub location: String,
    pub start_date: Date,
    pub end_date: Date,
    pub vehicle_category: String,
    pub captured_at: Timestamp,
}

impl PriceRecord {
    pub fn from_offer(
        offer: &AvailabilityOffer,
        scraped_at: Timestamp,
    ) -> Result<PriceRecord, ScrapeError> {
        Ok(PriceRecord {
            supplier: SUPPLIER.to_string(),
            total_price: offer.total_price,
            location: offer.location_name.clone(),
            start_date: parse_date(&offer.check_in_date)?,
            end_date: parse_date(&offer.check_out_date)?,
            vehicle_category: offer.vehicle_category.clone(),
            captured_at: scraped_at,
        })
    }
}

/// Strictly YYYY-MM-DD, zero padded, no sign and no surrounding whitespace.
fn parse_date(value: &str) -> Result<Date, ScrapeError> {
    let bytes = value.as_bytes();
    let fixed_width = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !fixed_width {
        return Err(ScrapeError::DateParse {
            value: value.to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        });
    }
    Date::strptime("%Y-%m-%d", value).map_err(|e| ScrapeError::DateParse {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Keep the available offers only and turn them into price records.  A date
/// that doesn't parse fails the whole batch.  An empty result means there is
/// nothing to store.
pub fn normalize(
    offers: &[AvailabilityOffer],
    scraped_at: Timestamp,
) -> Result<Vec<PriceRecord>, ScrapeError> {
    offers
        .iter()
        .filter(|offer| offer.available)
        .map(|offer| PriceRecord::from_offer(offer, scraped_at))
        .collect()
}
