//! Terminal client entry point.
use std::io;

use anyhow::Result;
use tokio::io::BufReader;
use wumpus_client::{App, ClientConfig, logging};
use wumpus_runtime::Runtime;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    logging::setup_logging(config.log_dir.as_deref(), config.session_id.as_deref())?;

    let runtime = Runtime::builder().config(config.runtime.clone()).build();
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();

    App::new(config, runtime).run(stdin, &mut stdout).await
}
