//! Command line driver for the playlist client

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    cli::run().await?;
    Ok(())
}
