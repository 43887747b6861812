#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI front-end for the SF police report feed.
//!
//! Fetches the most recent incident window from the SF open-data API,
//! applies the user's filters, and renders a paginated report list. All
//! load failures surface as one fixed user-facing message; partial data
//! is never shown.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand};
use sf_reports_feed::{Filters, LoadError, ReportCache, filter, page};
use sf_reports_report_models::UcrCategory;
use sf_reports_source::SodaSource;

#[derive(Parser)]
#[command(name = "sf_reports", about = "San Francisco police report feed")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    list: ListArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// List recent reports (the default when no subcommand is given)
    List(ListArgs),
    /// Print the fixed set of crime categories
    Categories,
}

#[derive(Args)]
struct ListArgs {
    /// Filter by crime category (e.g., "Larceny Theft")
    #[arg(long)]
    category: Option<String>,
    /// Case-insensitive text to find in the address
    #[arg(long)]
    location: Option<String>,
    /// Inclusive start date (YYYY-MM-DD); only applies together with --end
    #[arg(long)]
    start: Option<String>,
    /// Inclusive end date (YYYY-MM-DD); only applies together with --start
    #[arg(long)]
    end: Option<String>,
    /// Page counter; shows the first page x 10 reports
    #[arg(long, default_value = "1")]
    page: usize,
    /// Include the external case-lookup URL for each report
    #[arg(long)]
    links: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Categories) => {
            for category in UcrCategory::ALL {
                println!("{category}");
            }
            Ok(())
        }
        Some(Commands::List(args)) => list(args).await,
        None => list(cli.list).await,
    }
}

async fn list(args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let filters = build_filters(&args)?;

    let cache = ReportCache::new(SodaSource::new());
    let reports = match cache.get().await {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("{}", load_failure_message(&e));
            std::process::exit(1);
        }
    };

    let filtered = filter::apply(&reports, &filters);
    let visible = page::visible(&filtered, args.page);

    println!("Showing {} of {} reports", visible.len(), filtered.len());
    for report in visible {
        println!();
        println!("Case #{}  [{}]", report.case_number, report.ucr_crime_category);
        println!("  Occurred:   {}", report.date_occurred);
        println!("  Incident:   {}", report.incident_type);
        println!("  Resolution: {}", report.location_type);
        println!("  Address:    {}", report.address);
        println!("  Position:   {}, {}", report.lat, report.long);
        if args.links {
            println!("  Details:    {}", report.case_url());
        }
    }

    if page::has_more(&filtered, args.page) {
        println!();
        println!(
            "More reports available; pass --page {} to load more.",
            args.page.saturating_add(1)
        );
    }

    Ok(())
}

/// Renders a load failure for the user: only the fixed message. The
/// underlying cause goes to the log, never to the screen.
fn load_failure_message(err: &LoadError) -> String {
    if let Some(cause) = std::error::Error::source(err) {
        log::error!("Load failed: {cause}");
    }
    err.to_string()
}

fn build_filters(args: &ListArgs) -> Result<Filters, Box<dyn std::error::Error>> {
    let category = match args.category.as_deref() {
        Some(raw) => Some(raw.parse::<UcrCategory>().map_err(|_| {
            format!("unknown category {raw:?}; run `sf_reports categories` to list them")
        })?),
        None => None,
    };

    let start = args
        .start
        .as_deref()
        .map(|s| parse_day(s).map(day_start))
        .transpose()?;
    let end = args
        .end
        .as_deref()
        .map(|s| parse_day(s).map(day_end))
        .transpose()?;

    Ok(Filters {
        start,
        end,
        category,
        location: args.location.clone(),
    })
}

fn parse_day(s: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date {s:?} (expected YYYY-MM-DD): {e}").into())
}

fn day_start(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// End-of-day timestamp, so a date-only upper bound stays inclusive of
/// the whole day. The last nanosecond keeps fractional-second records
/// (Socrata emits `.000`-style timestamps) inside the bound.
fn day_end(day: NaiveDate) -> DateTime<Utc> {
    day.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .unwrap_or_else(|| day.and_time(NaiveTime::MIN))
        .and_utc()
}

#[cfg(test)]
mod tests {
    use sf_reports_source::SourceError;

    use super::*;

    #[test]
    fn date_bounds_span_the_whole_days() {
        let day = parse_day("2024-03-01").unwrap();
        assert_eq!(day_start(day).to_string(), "2024-03-01 00:00:00 UTC");

        let end = day_end(day);
        let final_tick: DateTime<Utc> = "2024-03-01T23:59:59.999Z".parse().unwrap();
        let next_day: DateTime<Utc> = "2024-03-02T00:00:00Z".parse().unwrap();
        assert!(final_tick <= end);
        assert!(next_day > end);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_day("03/01/2024").is_err());
        assert!(parse_day("2024-13-01").is_err());
    }

    #[test]
    fn load_failure_shows_only_the_fixed_message() {
        let err = LoadError(SourceError::Format {
            message: "expected a JSON array, got null".to_string(),
        });

        let message = load_failure_message(&err);
        assert_eq!(
            message,
            "Failed to load police reports. Please try again later."
        );
        assert!(!message.contains("JSON array"));
        assert!(!message.contains("Format"));
    }
}
