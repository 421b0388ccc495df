use std::{error::Error, path::Path};

use clap::Parser;
use itertools::Itertools;
use jiff::Zoned;
use log::{error, info, warn};
use tabled::{builder::Builder, settings::Style};
use van_price_scraper::{
    calendar::MondayPolicy,
    db::{
        indiecampers::{
            availability::AvailabilityClient,
            catalog::CITIES,
            prices_archive::{IndieCampersPricesArchive, Outcome, RunSummary},
        },
        mongo::{MemoryPriceSink, MongoPriceSink},
        prod_db::ProdDb,
    },
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Environment name, e.g., test, prod
    #[arg(short, long, default_value = "prod")]
    env: String,

    /// Year to scrape, defaults to the current year
    #[arg(short, long, value_parser = clap::value_parser!(i16).range(1..=9999))]
    year: Option<i16>,

    /// Scrape every Monday of the year, not only the ones still ahead
    #[arg(long)]
    all_mondays: bool,

    /// Only scrape these cities, e.g. --city anchorage --city denver
    #[arg(short, long = "city")]
    cities: Vec<String>,

    /// Fetch and normalize the prices but don't write them to the database
    #[arg(long)]
    dry_run: bool,
}

/// Make an ASCII table with the result of every (city, week)
fn ascii_table(summary: &RunSummary) -> tabled::Table {
    let mut builder = Builder::new();
    builder.push_record(vec!["Week", "City", "Result"]);
    for result in &summary.results {
        let outcome = match &result.outcome {
            Outcome::Inserted(n) => format!("{} prices", n),
            Outcome::NoResults => "no results".to_string(),
            Outcome::Failed(e) => format!("FAILED: {}", e),
        };
        builder.push_record(vec![result.week.to_string(), result.city.clone(), outcome]);
    }
    let mut table = builder.build();
    table.with(Style::sharp());
    table
}

/// Run this job once a week
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    let env_file = format!(".env/{}.env", args.env);
    if dotenvy::from_path(Path::new(&env_file)).is_err() {
        warn!("No environment file {}, using the defaults", env_file);
    }

    let settings = ProdDb::indiecampers_prices()?;
    let today = Zoned::now().date();
    let year = args.year.unwrap_or(today.year());
    let policy = if args.all_mondays {
        MondayPolicy::All
    } else {
        MondayPolicy::Future
    };
    let mondays = policy.mondays(year, today);
    let cities: Vec<String> = if args.cities.is_empty() {
        CITIES.iter().map(|e| e.to_string()).collect()
    } else {
        args.cities.clone()
    };
    if mondays.is_empty() {
        info!("No Mondays left to scrape in {}", year);
        return Ok(());
    }

    let client = AvailabilityClient::new(&settings.availability_url)?;
    info!(
        "Scraping {} for {} weeks starting {} in {}",
        client.url(),
        mondays.len(),
        mondays[0],
        cities.iter().join(", ")
    );

    let summary = if args.dry_run {
        let archive = IndieCampersPricesArchive::new(client, MemoryPriceSink::new());
        let summary = archive.update(&mondays, &cities).await;
        for record in archive.sink().records() {
            info!("{}", serde_json::to_string(&record)?);
        }
        summary
    } else {
        let credentials = settings.credentials()?;
        let sink = MongoPriceSink::connect(
            &settings.connection_url(&credentials),
            &credentials.database,
        )
        .await?;
        sink.ping().await?;
        let archive = IndieCampersPricesArchive::new(client, sink);
        let summary = archive.update(&mondays, &cities).await;
        archive.into_sink().shutdown().await;
        summary
    };

    println!("{}", ascii_table(&summary));
    info!("{} prices inserted", summary.inserted());
    let failures = summary.failures();
    if !failures.is_empty() {
        error!(
            "{} out of {} searches failed",
            failures.len(),
            summary.results.len()
        );
        return Err(format!("{} searches failed", failures.len()).into());
    }

    Ok(())
}
