use anyhow::Result;
use clap::Parser;
use tb_takeaway::{
    constants::DEFAULT_ENDPOINT_REPLACE_TOKEN, restaurants::RestaurantList, Client,
    ClientConfigBuilder, CountryCode, Endpoint,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'l', long, default_value = "de")]
    language: String,
    #[arg(short = 'e', long)]
    endpoint: Option<String>,
    #[arg(short = 'c', long, default_value = "DE")]
    country: CountryCode,
    #[arg(short = 'p', long = "postcode", help = "Postal code to search restaurants for.")]
    postcode: String,
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
    let client = Client::from_config(config.build()?)?;
    let restaurants = client
        .get_restaurants(&args.postcode, args.country, None)
        .await?;
    println!("{}", serde_json::to_string::<RestaurantList>(&restaurants)?);
    Ok(())
}
