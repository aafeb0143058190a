//! Look up genomes for a species and print their IDs
//!
//! ```bash
//! LOG_LEVEL=debug cargo run -p bvbrc-client --example genome_lookup -- "Mycobacterium tuberculosis"
//! ```

use bvbrc_client::{settings, BvbrcClient, ClientConfig, Core, QueryOptions};
use bvbrc_common::logging::{init_logging, LogConfig};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = init_logging(&LogConfig::from_env()?)?;

    let species = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Mycobacterium tuberculosis".to_string());

    let mut config = ClientConfig::from_env()?;
    if config.token.is_none() {
        if let Some(path) = settings::default_token_path().filter(|p| p.exists()) {
            config.token = Some(settings::load_token_from_file(&path)?);
        }
    }

    let client = BvbrcClient::from_config(&config)?;
    let options = QueryOptions::new()
        .select(["genome_id", "genome_name", "genome_status"])
        .sort("+genome_id")
        .limit(10);

    let genomes = client
        .resource(Core::Genome)
        .get_by("species", &species, &options)
        .await?;

    match genomes.as_array() {
        Some(rows) => {
            info!(species = %species, count = rows.len(), "Fetched genomes");
            for row in rows {
                println!(
                    "{}\t{}\t{}",
                    row["genome_id"].as_str().unwrap_or("-"),
                    row["genome_name"].as_str().unwrap_or("-"),
                    row["genome_status"].as_str().unwrap_or("-"),
                );
            }
        }
        None => warn!(response = %genomes, "Expected a JSON array"),
    }

    Ok(())
}
