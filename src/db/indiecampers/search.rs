use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{ToSpan, Zoned};
use serde::Serialize;

use super::catalog::{CURRENT_ROUTE, LOCALE, VAN_CATEGORIES};
use crate::error::ScrapeError;

/// The format IndieCampers expects for the check-in/check-out datetimes.
const REQUEST_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// A one week search across all the van categories for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub origin_city: String,
    pub destination_city: String,
    pub check_in: Zoned,
    pub check_out: Zoned,
    pub vehicle_categories: Vec<String>,
    pub page: u32,
    pub locale: String,
}

#[derive(Debug, Serialize)]
pub struct RequestBody<'a> {
    pub booking: Booking<'a>,
    pub meta: RequestMeta,
}

#[derive(Debug, Serialize)]
pub struct Booking<'a> {
    pub checkin_city: &'a str,
    pub checkin_datetime: String,
    pub checkout_city: &'a str,
    pub checkout_datetime: String,
    pub van_categories: &'a [String],
    pub van_category: &'a str,
    pub legacy_search: bool,
    pub page: u32,
    pub locale: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RequestMeta {
    pub current_route: String,
}

impl SearchCriteria {
    /// Pick up and drop off in the same `city`.  The city is not checked
    /// against the known list.
    pub fn new(city: &str, check_in: Zoned, check_out: Zoned) -> SearchCriteria {
        SearchCriteria {
            origin_city: city.to_string(),
            destination_city: city.to_string(),
            check_in,
            check_out,
            vehicle_categories: VAN_CATEGORIES.iter().map(|e| e.to_string()).collect(),
            page: 1,
            locale: LOCALE.to_string(),
        }
    }

    /// Search the week starting on `monday`.  Aim for midday UTC so the remote
    /// service never lands on the wrong day.
    pub fn for_week(city: &str, monday: Date) -> Result<SearchCriteria, ScrapeError> {
        let check_in = monday.at(12, 0, 0, 0).to_zoned(TimeZone::UTC)?;
        let check_out = check_in.checked_add(7.days())?;
        Ok(SearchCriteria::new(city, check_in, check_out))
    }

    pub fn request_body(&self) -> RequestBody<'_> {
        RequestBody {
            booking: Booking {
                checkin_city: &self.origin_city,
                checkin_datetime: self.check_in.strftime(REQUEST_DATETIME_FORMAT).to_string(),
                checkout_city: &self.destination_city,
                checkout_datetime: self
                    .check_out
                    .strftime(REQUEST_DATETIME_FORMAT)
                    .to_string(),
                van_categories: &self.vehicle_categories,
                van_category: "",
                legacy_search: false,
                page: self.page,
                locale: &self.locale,
            },
            meta: RequestMeta {
                current_route: CURRENT_ROUTE.to_string(),
            },
        }
    }
}
