use std::sync::Mutex;

use jiff::civil::Date;
use jiff::tz::TimeZone;
use log::info;
use mongodb::{
    bson::{doc, DateTime, Document},
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use rust_decimal::prelude::ToPrimitive;

use crate::db::indiecampers::prices::PriceRecord;
use crate::error::ScrapeError;

pub const PRICES_COLLECTION: &str = "prices";

/// Where the normalized price records end up.  Records are only ever inserted.
#[allow(async_fn_in_trait)]
pub trait PriceSink {
    /// Insert all the records in one go, return how many were inserted.
    async fn insert_many(&self, records: &[PriceRecord]) -> Result<usize, ScrapeError>;
}

/// One pooled client for the whole run.
pub struct MongoPriceSink {
    client: Client,
    collection: Collection<Document>,
}

impl MongoPriceSink {
    pub async fn connect(url: &str, database: &str) -> Result<MongoPriceSink, ScrapeError> {
        let mut options = ClientOptions::parse(url).await?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        options.max_pool_size = Some(20);
        let client = Client::with_options(options)?;
        let collection = client.database(database).collection(PRICES_COLLECTION);
        Ok(MongoPriceSink { client, collection })
    }

    /// Send a ping to confirm the deployment is reachable.
    pub async fn ping(&self) -> Result<(), ScrapeError> {
        self.client
            .database("admin")
            .run_command(doc! {"ping": 1})
            .await?;
        info!("Pinged the MongoDB deployment successfully");
        Ok(())
    }

    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

impl PriceSink for MongoPriceSink {
    async fn insert_many(&self, records: &[PriceRecord]) -> Result<usize, ScrapeError> {
        let documents = records
            .iter()
            .map(price_document)
            .collect::<Result<Vec<_>, _>>()?;
        let result = self.collection.insert_many(documents).await?;
        Ok(result.inserted_ids.len())
    }
}

/// Dates are stored as midnight UTC, the price as a double.
pub fn price_document(record: &PriceRecord) -> Result<Document, ScrapeError> {
    Ok(doc! {
        "supplier": record.supplier.as_str(),
        "total_price": record.total_price.to_f64().unwrap_or_default(),
        "location": record.location.as_str(),
        "start_date": bson_date(record.start_date)?,
        "end_date": bson_date(record.end_date)?,
        "van_type": record.vehicle_category.as_str(),
        "scraped_time": DateTime::from_millis(record.captured_at.as_millisecond()),
    })
}

fn bson_date(date: Date) -> Result<DateTime, ScrapeError> {
    let millis = date.to_zoned(TimeZone::UTC)?.timestamp().as_millisecond();
    Ok(DateTime::from_millis(millis))
}

/// Keeps the records in memory, for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryPriceSink {
    records: Mutex<Vec<PriceRecord>>,
}

impl MemoryPriceSink {
    pub fn new() -> MemoryPriceSink {
        MemoryPriceSink::default()
    }

    pub fn records(&self) -> Vec<PriceRecord> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl PriceSink for MemoryPriceSink {
    async fn insert_many(&self, records: &[PriceRecord]) -> Result<usize, ScrapeError> {
        let mut stored = self.records.lock().unwrap_or_else(|e| e.into_inner());
        stored.extend_from_slice(records);
        Ok(records.len())
    }
}
