use eyre::Result;
use store::client::Client;
use store::config::Config;

use crate::cli::args::DbArgs;

pub async fn init(args: &DbArgs) -> Result<()> {
    let config = Config::from(args);

    Client::init(&config).await?;
    tracing::info!("Store tables ready at {}", config.database_url);

    Ok(())
}
