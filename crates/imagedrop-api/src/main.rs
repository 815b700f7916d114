use imagedrop_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    imagedrop_api::telemetry::init(&config);

    // Initialize the application (database, storage, routes)
    let (_state, router) = imagedrop_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    imagedrop_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
