use clap::Parser;

use phonebook::config::{Cli, ServerConfig};
use phonebook::http::Server;
use phonebook::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_cli(Cli::parse());
    logging::init_logger(config.verbose);

    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    Server::new(config).run().await?;
    Ok(())
}
