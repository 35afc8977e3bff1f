use clap::Subcommand;
use deskclock_core::{Config, WeatherClient, WeatherPanel, WeatherReport};

use super::{open_store, renderer};

#[derive(Subcommand)]
pub enum WeatherAction {
    /// Weather for a city (defaults to the saved city)
    Now {
        /// City name; remembered for next time once the lookup succeeds
        #[arg(long)]
        city: Option<String>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Weather at your IP-based location
    Here {
        #[arg(long)]
        json: bool,
    },
    /// Remember a city without fetching
    SetCity { city: String },
}

fn print_report(config: &Config, report: &WeatherReport, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", renderer(config).weather(report));
    }
    Ok(())
}

pub fn run(action: WeatherAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();
    let config = Config::load_or_default();
    let panel = WeatherPanel::new(&store);
    let client = WeatherClient::new(config.weather_api_key()).with_units(&config.weather.units);
    if client.is_demo() {
        eprintln!("weather: no API key set (config set weather.api_key <key>), showing demo data");
    }
    let rt = tokio::runtime::Runtime::new()?;

    match action {
        WeatherAction::Now { city, json } => {
            let report = match (city, panel.saved_city()) {
                (Some(input), _) => rt.block_on(panel.lookup_city(&client, &input))?,
                (None, Some(saved)) => rt.block_on(client.fetch_city(&saved))?,
                (None, None) => {
                    println!("Enter a city to see the weather.");
                    return Ok(());
                }
            };
            print_report(&config, &report, json)?;
        }
        WeatherAction::Here { json } => {
            let report = rt.block_on(client.fetch_here())?;
            print_report(&config, &report, json)?;
        }
        WeatherAction::SetCity { city } => {
            let city = panel.submit_city(&city)?;
            println!("{city}");
        }
    }
    Ok(())
}
