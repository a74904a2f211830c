use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tb_takeaway::{
    constants::DEFAULT_ENDPOINT_REPLACE_TOKEN, Client, ClientConfigBuilder, CountryCode, Endpoint,
    RestaurantLocation,
};
use tokio_stream::{self, StreamExt};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'l', long, default_value = "de")]
    language: String,
    #[arg(
        short = 'e',
        long,
        help = "Endpoint format to use. Defaults to the citymeal Android endpoint."
    )]
    endpoint: Option<String>,
    #[arg(short = 'c', long, default_value = "DE")]
    country: CountryCode,
    #[arg(
        short = 'p',
        long = "postcode",
        help = "Postal code to fetch restaurant menus for."
    )]
    postcode: String,
    #[arg(short = 'n', long, help = "Only fetch menus for the first N restaurants.")]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = ClientConfigBuilder::default();
    config.language(args.language.as_str());
    if let Some(url) = args.endpoint {
        config.endpoint(Endpoint::try_new(
            url,
            DEFAULT_ENDPOINT_REPLACE_TOKEN.to_string(),
        )?);
    }
    let http_client = reqwest::Client::builder()
        .gzip(true)
        .brotli(true)
        .build()?;
    let client = Client::with_http_client(config.build()?, http_client)?;
    let listing = client
        .get_restaurants(&args.postcode, args.country, None)
        .await?;
    let location = RestaurantLocation {
        postcode: args.postcode.clone(),
        ..Default::default()
    };
    let country = args.country;
    let restaurants = listing
        .restaurants
        .into_iter()
        .take(args.limit.unwrap_or(usize::MAX));
    let menus = tokio_stream::iter(restaurants)
        .then(|restaurant| {
            let client = client.clone();
            let location = location.clone();
            async move {
                match client
                    .get_restaurant_data(&restaurant.id, country, &location)
                    .await
                {
                    Ok(detail) => Some(json!({"restaurant": restaurant, "menu": detail.menu})),
                    Err(e) => {
                        warn!(restaurant = %restaurant.id, error = %e, "skipping restaurant");
                        None
                    }
                }
            }
        })
        .filter_map(|menu| menu)
        .collect::<Vec<_>>()
        .await;

    println!("{}", serde_json::to_string_pretty(&menus)?);
    Ok(())
}
