use log::{error, info};
use spotify_playlist_api_tests::config;
use spotify_playlist_api_tests::spotify::SpotifyClient;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    if let Err(e) = check_credentials().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Fetches a token and the configured playlist to confirm the config is usable before running the suite.
async fn check_credentials() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config()?;
    let client = SpotifyClient::new(&config)?;

    client.tokens.get_token().await?;
    info!("Access token obtained from {}", config.spotify.account_base_uri);

    let response = client.playlists().get(&config.data.get_playlist_id).await?;
    println!(
        "GET playlist {} -> {}",
        config.data.get_playlist_id,
        response.status_code()
    );
    Ok(())
}
