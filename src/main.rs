use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use racemeteo::{RaceMeteoConfig, VERSION, WeatherAdvisor};

fn print_usage() {
    println!("RaceMeteo v{VERSION} - race-day weather advisories for club cycling");
    println!();
    println!("Usage: racemeteo <location> <date> [--json]");
    println!();
    println!("  <location>   race location, e.g. \"Annecy\"");
    println!("  <date>       race date, YYYY-MM-DD");
    println!("  --json       print the raw reading as JSON");
}

fn init_logging(config: &RaceMeteoConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = RaceMeteoConfig::load().context("Failed to load configuration")?;
    init_logging(&config);

    let mut json_output = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    let [location, date] = positional.as_slice() else {
        print_usage();
        bail!("expected exactly <location> and <date> arguments");
    };

    let advisor = WeatherAdvisor::new(&config.weather);
    match advisor.weather_for_race(location, date).await {
        Ok(Some(reading)) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&reading)?);
            } else {
                println!("Weather for {location} on {date}:");
                println!("  {}", reading.summary());
                println!();
                println!("Recommendations:");
                for recommendation in &reading.recommendations {
                    println!("  - {recommendation}");
                }
            }
        }
        Ok(None) => {
            println!("No weather data available for {location} on {date}");
        }
        Err(err) => {
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
