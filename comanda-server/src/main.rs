use comanda_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv before config so .env values are seen)
    let _ = dotenv::dotenv();

    // 2. Configuration
    let config = Config::from_env();

    // 3. Logging
    let log_dir = config.log_dir();
    init_logger_with_file(Some(&config.log_level), log_dir.to_str());

    print_banner();
    tracing::info!("Comanda server starting...");

    // 4. State (database + order hub)
    let state = ServerState::initialize(&config).await;

    // 5. HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
