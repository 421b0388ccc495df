use jiff::civil::Date;
use jiff::Timestamp;
use log::{error, info};

use super::availability::AvailabilityClient;
use super::prices::normalize;
use super::search::SearchCriteria;
use crate::db::mongo::PriceSink;
use crate::error::ScrapeError;

/// Scrape the IndieCampers weekly prices and store them in a [PriceSink].
pub struct IndieCampersPricesArchive<S: PriceSink> {
    client: AvailabilityClient,
    sink: S,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Inserted(usize),
    NoResults,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekResult {
    pub city: String,
    pub week: Date,
    pub outcome: Outcome,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub results: Vec<WeekResult>,
}

impl RunSummary {
    pub fn inserted(&self) -> usize {
        self.results
            .iter()
            .map(|e| match e.outcome {
                Outcome::Inserted(n) => n,
                _ => 0,
            })
            .sum()
    }

    pub fn failures(&self) -> Vec<&WeekResult> {
        self.results
            .iter()
            .filter(|e| matches!(e.outcome, Outcome::Failed(_)))
            .collect()
    }
}

impl<S: PriceSink> IndieCampersPricesArchive<S> {
    pub fn new(client: AvailabilityClient, sink: S) -> IndieCampersPricesArchive<S> {
        IndieCampersPricesArchive { client, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Fetch, normalize and store the prices for one city for the week
    /// starting on `monday`.  The capture timestamp never goes below
    /// `not_before`.  Returns the outcome and the capture timestamp used.
    pub async fn update_week(
        &self,
        city: &str,
        monday: Date,
        not_before: Timestamp,
    ) -> Result<(Outcome, Timestamp), ScrapeError> {
        let criteria = SearchCriteria::for_week(city, monday)?;
        let offers = self.client.fetch(&criteria).await?;
        let scraped_at = Timestamp::now().max(not_before);
        let records = normalize(&offers, scraped_at)?;
        if records.is_empty() {
            return Ok((Outcome::NoResults, scraped_at));
        }
        let n = self.sink.insert_many(&records).await?;
        Ok((Outcome::Inserted(n), scraped_at))
    }

    /// Go over all the weeks and cities one at a time.  A failure is logged and
    /// recorded, and the run moves on to the next combination.
    pub async fn update(&self, mondays: &[Date], cities: &[String]) -> RunSummary {
        let mut summary = RunSummary::default();
        let mut last_scraped = Timestamp::UNIX_EPOCH;
        for monday in mondays {
            for city in cities {
                info!("Getting data for {} for start date {}", city, monday);
                let outcome = match self.update_week(city, *monday, last_scraped).await {
                    Ok((outcome, scraped_at)) => {
                        last_scraped = scraped_at;
                        match &outcome {
                            Outcome::Inserted(n) => info!("  inserted {} prices", n),
                            _ => info!("  no results found"),
                        }
                        outcome
                    }
                    Err(e) => {
                        error!("Failed to update {} for {}: {}", city, monday, e);
                        Outcome::Failed(e.to_string())
                    }
                };
                summary.results.push(WeekResult {
                    city: city.clone(),
                    week: *monday,
                    outcome,
                });
            }
        }
        summary
    }
}
