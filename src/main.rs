use std::path::PathBuf;

use anyhow::Result;
use tripplanner::{TripPlanner, TripPlannerConfig, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional first argument: path to a TOML config file
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = TripPlannerConfig::load_from_path(config_path)?;

    logging::init(&config.logging)?;
    tracing::info!("TripPlanner {} starting", tripplanner::VERSION);

    let planner = TripPlanner::from_config(&config)?;
    web::run(planner, &config.server).await
}
