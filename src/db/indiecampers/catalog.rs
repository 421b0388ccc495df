// Fixed lists the IndieCampers search is run against.

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONTENT_TYPE, ORIGIN,
    REFERER, USER_AGENT,
};

pub const AVAILABILITY_URL: &str = "https://indiecampers.com/api/v3/availability";

/// Tag stored with every price record coming from this source.
pub const SUPPLIER: &str = "IndieCampers";

pub const CURRENT_ROUTE: &str = "rent-an-rv-search";

pub const LOCALE: &str = "en";

pub const CITIES: &[&str] = &[
    "anchorage",
    "chicago",
    "chicago-offers",
    "denver",
    "elkhart",
    "forest-city",
    "las-vegas",
    "los-angeles",
    "miami",
    "new-york",
    "orlando",
    "phoenix",
    "salt-lake-city",
    "san-francisco",
    "seattle",
];

pub const VAN_CATEGORIES: &[&str] = &[
    "active-long-2",
    "active-plus",
    "active-plus-2",
    "adventure-truck-2",
    "adventure-truck-3",
    "applause",
    "atlas",
    "atlas-5",
    "atlas-5-auto",
    "atlas-5-new",
    "california",
    "carado",
    "comfort-family-5",
    "comfort-long-4",
    "comfort-space-4",
    "comfort-space-8",
    "conquest",
    "conquest-plus",
    "duster",
    "etrusco",
    "etrusco-auto",
    "four-winds",
    "four-winds-plus",
    "id-buzz",
    "jimny",
    "joa",
    "jogger",
    "marco-polo",
    "maverick",
    "metris",
    "nomad",
    "nomad-auto",
    "nomad-ivy",
    "nomad-new",
    "nomad-pop-top",
    "nomad-pop-top-auto",
    "odyssey",
    "odyssey-pop-top",
    "odyssey-pop-top-auto",
    "outback",
    "ovation",
    "quest",
    "quest-auto",
    "rebel",
    "seeker",
    "sierra",
    "solis",
    "solis-air",
    "sporty",
    "tellaro",
    "trailer-towable",
    "trekker",
    "vw-california-premium",
    "vw-grand-california",
    "wander",
    "wrangler",
];

/// The headers of a browser session on indiecampers.co.uk.  Content-Length is
/// left to the transport.
pub fn request_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-GB,en-US;q=0.9,en;q=0.8"),
    );
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://indiecampers.co.uk"));
    headers.insert(REFERER, HeaderValue::from_static("https://indiecampers.co.uk/"));
    headers.insert(USER_AGENT, HeaderValue::from_static("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36"));
    headers
}
