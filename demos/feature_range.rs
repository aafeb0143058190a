//! List features of a genome inside a coordinate window
//!
//! ```bash
//! cargo run -p bvbrc-client --example feature_range -- 83332.12 1000 20000
//! ```

use bvbrc_client::rql::{and, eq, gt, lt};
use bvbrc_client::{BvbrcClient, QueryOptions};
use bvbrc_common::logging::{init_logging, LogConfig};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct Feature {
    patric_id: Option<String>,
    gene: Option<String>,
    start: u64,
    end: u64,
    strand: String,
    product: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = init_logging(&LogConfig::from_env()?)?;

    let mut args = std::env::args().skip(1);
    let genome_id = args.next().unwrap_or_else(|| "83332.12".to_string());
    let start: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(1);
    let end: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(20_000);

    let client = BvbrcClient::from_env()?;
    let filter = and([
        eq("genome_id", &genome_id),
        eq("annotation", "PATRIC"),
        gt("start", start),
        lt("end", end),
    ]);
    let options = QueryOptions::new()
        .select(["patric_id", "gene", "start", "end", "strand", "product"])
        .sort("+start")
        .limit(200);

    let features: Vec<Feature> = client.query_as("genome_feature", &filter, &options).await?;
    info!(genome_id = %genome_id, count = features.len(), "Fetched features");

    for f in features {
        println!(
            "{}\t{}\t{}..{}\t{}\t{}",
            f.patric_id.as_deref().unwrap_or("-"),
            f.gene.as_deref().unwrap_or("-"),
            f.start,
            f.end,
            f.strand,
            f.product.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}
