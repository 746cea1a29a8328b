mod config;
mod dynamodb;
mod error;
mod importer;
mod logging;
mod record;

use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};

use crate::config::ImportConfig;
use crate::importer::{Importer, RunStatus};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv::dotenv().ok();
    logging::init_logging(logging::level_from_env())?;

    let config = match ImportConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return Ok(ExitCode::from(RunStatus::Aborted.exit_code()));
        }
    };

    info!(
        "Loading data from {} to DynamoDB table {}",
        config.csv_file_path.display(),
        config.table_name
    );

    let sdk_config = aws_config::load_from_env().await;
    let ddb = dynamodb::DynamoDb::new(&sdk_config);

    let summary = Importer::new(&ddb, &config.table_name)
        .load(&config.csv_file_path)
        .await;

    Ok(ExitCode::from(summary.status().exit_code()))
}
