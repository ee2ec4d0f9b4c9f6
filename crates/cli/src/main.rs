use anyhow::{ensure, Context, Result};
use catalog::{CarEntry, Catalog, Usage};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::Rng;
use rayon::prelude::*;
use selector::{Query, RecommendationSelector, Selection};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// CarRecs - Car Recommendation Engine
#[derive(Parser)]
#[command(name = "car-recs")]
#[command(about = "Recommends cars by budget, fuel economy and usage", long_about = None)]
struct Cli {
    /// JSON catalog to use instead of the built-in one
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get up to three car recommendations
    Recommend {
        /// Most you are willing to pay
        #[arg(long, default_value = "30000", allow_negative_numbers = true)]
        budget: i64,

        /// Minimum acceptable mileage
        #[arg(long, default_value = "15", allow_negative_numbers = true)]
        mileage: i64,

        /// Main usage: family or sports
        #[arg(long, default_value = "family")]
        usage: String,

        /// Print the recommendations as JSON
        #[arg(long)]
        json: bool,

        /// Explain which preferences had to be relaxed
        #[arg(long)]
        explain: bool,
    },

    /// List the catalog
    Catalog {
        /// Only list cars of this usage
        #[arg(long)]
        usage: Option<Usage>,
    },

    /// Run random queries in parallel to measure selection latency
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "10000")]
        requests: usize,
    },
}

/// Response body for `recommend --json`
#[derive(Serialize)]
struct RecommendResponse<'a> {
    recommendations: &'a [CarEntry],
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = load_catalog(cli.catalog.as_ref())?;
    let selector = RecommendationSelector::new(catalog);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            budget,
            mileage,
            usage,
            json,
            explain,
        } => handle_recommend(&selector, Query::from_raw(budget, mileage, &usage), json, explain)?,
        Commands::Catalog { usage } => handle_catalog(selector.catalog(), usage),
        Commands::Benchmark { requests } => handle_benchmark(&selector, requests)?,
    }

    Ok(())
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Arc<Catalog>> {
    match path {
        Some(path) => {
            let catalog = Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
            Ok(Arc::new(catalog))
        }
        None => {
            let catalog = Catalog::builtin();
            info!("Using built-in catalog ({} cars)", catalog.len());
            Ok(catalog)
        }
    }
}

/// Handle the 'recommend' command
fn handle_recommend(
    selector: &RecommendationSelector,
    query: Query,
    json: bool,
    explain: bool,
) -> Result<()> {
    let selection = selector.select_explained(&query);
    info!(
        "Selected {} car(s) for budget {}, mileage {}",
        selection.cars.len(),
        query.budget,
        query.min_mileage
    );

    if json {
        let response = RecommendResponse {
            recommendations: &selection.cars,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&response).context("Failed to serialize recommendations")?
        );
        return Ok(());
    }

    print_recommendations(&selection, explain);
    Ok(())
}

/// Handle the 'catalog' command
fn handle_catalog(catalog: &Catalog, usage: Option<Usage>) {
    let title = match usage {
        Some(usage) => format!("Catalog ({} cars):", usage),
        None => "Catalog:".to_string(),
    };
    println!("{}", title.bold().blue());

    for car in catalog.entries() {
        if usage.is_some_and(|usage| car.usage != usage) {
            continue;
        }
        println!(
            "{}{} [{}] price {} | {} kmpl | {:.0} per kmpl",
            "• ".green(),
            car.name,
            car.usage,
            car.price,
            car.mileage,
            car.value_ratio()
        );
    }
}

/// Handle the 'benchmark' command
fn handle_benchmark(selector: &RecommendationSelector, requests: usize) -> Result<()> {
    ensure!(requests > 0, "Benchmark needs at least one request");

    let max_price = selector
        .catalog()
        .entries()
        .iter()
        .map(|car| car.price)
        .max()
        .unwrap_or(0);
    let max_budget = i64::try_from(max_price).unwrap_or(i64::MAX);

    // Random queries across the whole price range
    let mut rng = rand::rng();
    let queries: Vec<Query> = (0..requests)
        .map(|_| {
            let usage = Usage::ALL[rng.random_range(0..Usage::ALL.len())];
            Query::new(
                rng.random_range(0..=max_budget),
                rng.random_range(0..=35),
                usage,
            )
        })
        .collect();

    let start = Instant::now();
    let mut timings: Vec<Duration> = queries
        .par_iter()
        .map(|query| {
            let started = Instant::now();
            let cars = selector.select(query);
            std::hint::black_box(cars);
            started.elapsed()
        })
        .collect();
    let wall_time = start.elapsed();

    timings.sort();
    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    let throughput = requests as f64 / wall_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {}", requests);
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Value at fraction `p` of a sorted, non-empty slice
fn percentile(sorted: &[Duration], p: f64) -> Duration {
    let index = ((sorted.len() as f64 * p) as usize).min(sorted.len() - 1);
    sorted[index]
}

/// Helper function to format and print recommendations
fn print_recommendations(selection: &Selection, explain: bool) {
    println!("{}", "Car Recommendations:".bold().blue());

    if selection.cars.is_empty() {
        println!("{}", "The catalog is empty.".yellow());
        return;
    }

    for (i, car) in selection.cars.iter().enumerate() {
        println!(
            "{}. {} [{}] - price {}, {} kmpl ({:.0} per kmpl)",
            (i + 1).to_string().green(),
            car.name.bold(),
            car.usage,
            car.price,
            car.mileage,
            car.value_ratio()
        );
        println!("   {}", car.reason);
        if let Some(url) = &car.info_url {
            println!("   {}", url.dimmed());
        }
    }

    if explain {
        println!();
        println!("{} {}", "Why:".cyan(), selection.path);
        if selection.usage_relaxed {
            println!(
                "{} no affordable car matched the requested usage, so every usage was considered",
                "Note:".cyan()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_defaults() {
        let cli = Cli::try_parse_from(["car-recs", "recommend"]).unwrap();
        match cli.command {
            Commands::Recommend {
                budget,
                mileage,
                usage,
                json,
                explain,
            } => {
                assert_eq!(budget, 30000);
                assert_eq!(mileage, 15);
                assert_eq!(usage, "family");
                assert!(!json);
                assert!(!explain);
            }
            _ => panic!("expected recommend"),
        }
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn test_negative_budget_is_accepted() {
        let cli = Cli::try_parse_from(["car-recs", "recommend", "--budget", "-5"]).unwrap();
        assert!(matches!(cli.command, Commands::Recommend { budget: -5, .. }));
    }

    #[test]
    fn test_catalog_usage_is_parsed() {
        let cli = Cli::try_parse_from(["car-recs", "catalog", "--usage", "sports"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Catalog {
                usage: Some(Usage::Sports)
            }
        ));

        assert!(Cli::try_parse_from(["car-recs", "catalog", "--usage", "truck"]).is_err());
    }

    #[test]
    fn test_percentile() {
        let timings: Vec<Duration> = (1..=100).map(Duration::from_micros).collect();
        assert_eq!(percentile(&timings, 0.50), Duration::from_micros(51));
        assert_eq!(percentile(&timings, 0.99), Duration::from_micros(100));
        assert_eq!(percentile(&timings[..1], 0.95), Duration::from_micros(1));
    }

    #[test]
    fn test_json_response_shape() {
        let cars = vec![CarEntry::new("Tata Nano", 400000, 28, Usage::Family, "Cheap")];
        let response = RecommendResponse {
            recommendations: &cars,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["recommendations"][0]["name"], "Tata Nano");
        assert_eq!(json["recommendations"][0]["type"], "family");
    }
}
