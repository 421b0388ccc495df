use std::io::Read;

use brotli::Decompressor;
use flate2::read::{GzDecoder, ZlibDecoder};
use log::debug;
use reqwest::header::CONTENT_ENCODING;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use super::catalog::request_headers;
use super::search::SearchCriteria;
use crate::error::ScrapeError;

/// One entry of the availability response.  Nulls decode to the default value,
/// the remote service is not consistent for unavailable vans.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AvailabilityOffer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub available: bool,
    #[serde(rename = "total_cost", default, deserialize_with = "null_as_default")]
    pub total_price: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_name: String,
    /// As YYYY-MM-DD
    #[serde(rename = "checkin_date", default, deserialize_with = "null_as_default")]
    pub check_in_date: String,
    #[serde(rename = "checkout_date", default, deserialize_with = "null_as_default")]
    pub check_out_date: String,
    #[serde(rename = "van_category", default, deserialize_with = "null_as_default")]
    pub vehicle_category: String,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    data: ResponseData,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseData {
    #[serde(default)]
    availability: Vec<AvailabilityOffer>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode the body of an availability response.  A `br`, `gzip` or `deflate`
/// (zlib wrapped) content encoding is undone first, anything else is read as
/// plain json.
pub fn decode_body(
    content_encoding: Option<&str>,
    body: &[u8],
) -> Result<Vec<AvailabilityOffer>, ScrapeError> {
    let reader: Box<dyn Read + '_> = match content_encoding.map(str::trim) {
        Some(e) if e.eq_ignore_ascii_case("br") => Box::new(Decompressor::new(body, 4096)),
        Some(e) if e.eq_ignore_ascii_case("gzip") => Box::new(GzDecoder::new(body)),
        Some(e) if e.eq_ignore_ascii_case("deflate") => Box::new(ZlibDecoder::new(body)),
        _ => Box::new(body),
    };
    let response: ResponseBody = serde_json::from_reader(reader)?;
    Ok(response.data.availability)
}

pub struct AvailabilityClient {
    client: reqwest::Client,
    url: String,
}

impl AvailabilityClient {
    pub fn new(url: &str) -> Result<AvailabilityClient, ScrapeError> {
        let client = reqwest::Client::builder()
            .default_headers(request_headers())
            .build()?;
        Ok(AvailabilityClient {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Post one search and return the offers on the first page.  A single
    /// attempt, with the transport default timeouts.
    pub async fn fetch(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<AvailabilityOffer>, ScrapeError> {
        let response = self
            .client
            .post(&self.url)
            .json(&criteria.request_body())
            .send()
            .await?
            .error_for_status()?;
        let content_encoding = response
            .headers()
            .get(CONTENT_ENCODING)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let body = response.bytes().await?;
        debug!(
            "received {} bytes for {}, encoding {:?}",
            body.len(),
            criteria.origin_city,
            content_encoding
        );
        decode_body(content_encoding.as_deref(), &body)
    }
}
