use std::{collections::HashMap, time::Duration};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use futures::{stream, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use tb_takeaway::{
    constants::{DEFAULT_ENDPOINT_REPLACE_TOKEN, DEFAULT_LANGUAGE},
    Client, ClientConfigBuilder, Coordinates, CountryCode, Endpoint, OrderingMode,
    RestaurantLocation,
};
use tokio::time;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct CliArgs {
    #[command(subcommand)]
    pub subcommand: Command,

    #[command(flatten)]
    pub global_opts: GlobalOpts,
}

#[derive(Args, Debug)]
struct GlobalOpts {
    #[arg(short = 'l', long, global = true, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    #[arg(
        short = 'e',
        long,
        global = true,
        help = "Endpoint format, `$language` is replaced with the language"
    )]
    pub endpoint: Option<String>,

    #[arg(
        short = 'H',
        long = "header",
        global = true,
        value_parser = parse_header,
        help = "Extra header as KEY=VALUE, may be repeated"
    )]
    pub headers: Vec<(String, String)>,

    #[arg(long, global = true, default_value_t = 10)]
    pub timeout_secs: u64,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[clap(name = "current-time", about = "Get the server time for a restaurant")]
    CurrentTime {
        #[arg(short = 'r', long)]
        restaurant_id: String,
        #[arg(short = 'c', long, default_value = "DE")]
        country: CountryCode,
        #[arg(short = 'm', long, default_value = "delivery")]
        mode: OrderingMode,
    },

    #[clap(name = "restaurants", about = "List restaurants for a postal code")]
    Restaurants {
        #[command(flatten)]
        search: SearchOpts,
    },

    #[clap(name = "countries", about = "List available countries")]
    Countries,

    #[clap(name = "restaurant", about = "Get restaurant details including the menu")]
    Restaurant {
        #[command(flatten)]
        restaurant: RestaurantOpts,
    },

    #[clap(name = "checkout", about = "Get restaurant checkout details")]
    Checkout {
        #[command(flatten)]
        restaurant: RestaurantOpts,
    },

    #[clap(name = "reviews", about = "Get one page of restaurant reviews")]
    Reviews {
        #[arg(short = 'r', long)]
        restaurant_id: String,
        #[arg(short = 'p', long, default_value_t = 1)]
        page: u32,
    },

    #[clap(name = "all-menus", about = "Get the menu of every restaurant for a postal code")]
    AllMenus {
        #[command(flatten)]
        search: SearchOpts,

        #[arg(short = 'o', long, help = "Output file")]
        output_path: Option<String>,
    },
}

#[derive(Args, Debug)]
struct SearchOpts {
    #[arg(short = 'p', long)]
    pub postcode: String,
    #[arg(short = 'c', long, default_value = "DE")]
    pub country: CountryCode,
    #[arg(long, requires = "longitude")]
    pub latitude: Option<String>,
    #[arg(long, requires = "latitude")]
    pub longitude: Option<String>,
}

#[derive(Args, Debug)]
struct RestaurantOpts {
    #[arg(short = 'r', long)]
    pub restaurant_id: String,
    #[arg(short = 'c', long, default_value = "DE")]
    pub country: CountryCode,
    #[arg(short = 'p', long, default_value = "")]
    pub postcode: String,
    #[arg(long, requires = "longitude")]
    pub latitude: Option<String>,
    #[arg(long, requires = "latitude")]
    pub longitude: Option<String>,
    #[arg(long, default_value = "")]
    pub client_id: String,
}

fn coordinates(latitude: Option<&str>, longitude: Option<&str>) -> Option<Coordinates> {
    latitude
        .zip(longitude)
        .map(|(latitude, longitude)| Coordinates::new(latitude, longitude))
}

impl RestaurantOpts {
    fn location(&self) -> RestaurantLocation {
        RestaurantLocation {
            postcode: self.postcode.clone(),
            coordinates: coordinates(self.latitude.as_deref(), self.longitude.as_deref()),
            client_id: self.client_id.clone(),
        }
    }
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))
}

fn build_client(opts: &GlobalOpts) -> Result<Client> {
    let mut config = ClientConfigBuilder::default();
    config
        .language(opts.language.as_str())
        .timeout(Duration::from_secs(opts.timeout_secs))
        .headers(opts.headers.iter().cloned().collect::<HashMap<_, _>>());
    if let Some(endpoint) = &opts.endpoint {
        config.endpoint(Endpoint::try_new(
            endpoint.clone(),
            DEFAULT_ENDPOINT_REPLACE_TOKEN.to_string(),
        )?);
    }
    Ok(Client::from_config(config.build()?)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let client = build_client(&args.global_opts)?;

    match args.subcommand {
        Command::CurrentTime {
            restaurant_id,
            country,
            mode,
        } => {
            let current = client
                .get_current_time(country, &restaurant_id, mode)
                .await?;
            println!("{}", serde_json::to_string(&current)?);
        }
        Command::Restaurants { search } => {
            let restaurants = client
                .get_restaurants(
                    &search.postcode,
                    search.country,
                    coordinates(search.latitude.as_deref(), search.longitude.as_deref()),
                )
                .await?;
            println!("{}", serde_json::to_string(&restaurants)?);
        }
        Command::Countries => {
            let countries = client.get_countries_data().await?;
            println!("{}", serde_json::to_string(&countries)?);
        }
        Command::Restaurant { restaurant } => {
            let detail = client
                .get_restaurant_data(
                    &restaurant.restaurant_id,
                    restaurant.country,
                    &restaurant.location(),
                )
                .await?;
            println!("{}", serde_json::to_string(&detail)?);
        }
        Command::Checkout { restaurant } => {
            let detail = client
                .get_restaurant_checkout_data(
                    &restaurant.restaurant_id,
                    restaurant.country,
                    &restaurant.location(),
                )
                .await?;
            println!("{}", serde_json::to_string(&detail)?);
        }
        Command::Reviews {
            restaurant_id,
            page,
        } => {
            let reviews = client.get_restaurant_reviews(&restaurant_id, page).await?;
            println!("{}", serde_json::to_string(&reviews)?);
        }
        Command::AllMenus {
            search,
            output_path,
        } => {
            let listing = client
                .get_restaurants(
                    &search.postcode,
                    search.country,
                    coordinates(search.latitude.as_deref(), search.longitude.as_deref()),
                )
                .await?;
            info!(
                postcode = %search.postcode,
                restaurants = listing.restaurants.len(),
                "fetching menus"
            );
            let location = RestaurantLocation {
                postcode: search.postcode.clone(),
                coordinates: coordinates(search.latitude.as_deref(), search.longitude.as_deref()),
                ..Default::default()
            };

            // Get menus in batches of 5
            let progress = ProgressBar::new(listing.restaurants.len() as u64);
            progress.set_style(ProgressStyle::with_template(
                "[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?);
            let mut menus = Vec::new();
            let delay_between_batches = Duration::from_secs(1);
            for restaurant_batch in listing.restaurants.chunks(5) {
                let menu_batch = stream::iter(restaurant_batch)
                    .map(|restaurant| {
                        let client = client.clone();
                        let location = location.clone();
                        async move {
                            match client
                                .get_restaurant_data(&restaurant.id, search.country, &location)
                                .await
                            {
                                Ok(detail) => json!({
                                    "restaurant": restaurant.id,
                                    "name": restaurant.name,
                                    "menu": detail.menu,
                                }),
                                Err(e) => {
                                    warn!(restaurant = %restaurant.id, error = %e, "failed to get menu");
                                    json!({
                                        "restaurant": restaurant.id,
                                        "name": restaurant.name,
                                        "error": e.to_string(),
                                    })
                                }
                            }
                        }
                    })
                    .buffer_unordered(5)
                    .collect::<Vec<_>>()
                    .await;
                menus.extend(menu_batch);
                progress.inc(restaurant_batch.len() as u64);
                time::sleep(delay_between_batches).await;
            }
            progress.finish();
            let json_output = serde_json::to_string_pretty(&menus)?;
            if let Some(output_path) = output_path {
                std::fs::write(output_path, json_output)?;
            } else {
                println!("{}", json_output);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_header_splits_once() {
        assert_eq!(
            parse_header("X-Token=a=b"),
            Ok(("X-Token".to_string(), "a=b".to_string()))
        );
        assert!(parse_header("novalue").is_err());
        assert!(parse_header("=value").is_err());
    }

    #[test]
    fn cli_parses_subcommand_options() {
        let args = CliArgs::try_parse_from([
            "takeawaycli",
            "-l",
            "nl",
            "restaurants",
            "-p",
            "1012",
            "-c",
            "NL",
        ])
        .unwrap();
        assert_eq!(args.global_opts.language, "nl");
        match args.subcommand {
            Command::Restaurants { search } => {
                assert_eq!(search.postcode, "1012");
                assert_eq!(search.country, CountryCode::NL);
                assert!(search.latitude.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn build_client_applies_options() {
        let args = CliArgs::try_parse_from([
            "takeawaycli",
            "-H",
            "X-Test=1",
            "-e",
            "http://localhost/$language/android.php",
            "countries",
        ])
        .unwrap();

        let client = build_client(&args.global_opts).unwrap();

        assert_eq!(client.base_url(), "http://localhost/de/android.php");
        assert_eq!(client.headers()["x-test"], "1");
    }
}
