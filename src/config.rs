use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;
use toml;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_BASE_URI: &str = "https://api.spotify.com";
pub const DEFAULT_ACCOUNT_BASE_URI: &str = "https://accounts.spotify.com";

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub spotify: SpotifyConfig,
    pub data: DataConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub user_id: String,
    #[serde(default = "default_base_uri")]
    pub base_uri: String,
    #[serde(default = "default_account_base_uri")]
    pub account_base_uri: String,
}

/// Playlist ids the read and update cases run against.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DataConfig {
    pub get_playlist_id: String,
    pub update_playlist_id: String,
}

fn default_base_uri() -> String {
    DEFAULT_BASE_URI.to_string()
}

fn default_account_base_uri() -> String {
    DEFAULT_ACCOUNT_BASE_URI.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            spotify: SpotifyConfig {
                client_id: "your_spotify_client_id".to_string(),
                client_secret: "your_spotify_client_secret".to_string(),
                refresh_token: "your_spotify_refresh_token".to_string(),
                user_id: "your_spotify_user_id".to_string(),
                base_uri: default_base_uri(),
                account_base_uri: default_account_base_uri(),
            },
            data: DataConfig {
                get_playlist_id: "playlist_id_to_fetch".to_string(),
                update_playlist_id: "playlist_id_to_update".to_string(),
            },
        }
    }
}

/// Loads `config.toml`, or the file named by `SPOTIFY_CONFIG`.
pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let config_path = env::var("SPOTIFY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config_from(config_path)
}

pub fn load_config_from<P: AsRef<Path>>(config_path: P) -> Result<Config, Box<dyn std::error::Error>> {
    let config_path = config_path.as_ref();

    if !config_path.exists() {
        let toml_string = toml::to_string_pretty(&Config::default())?;

        let mut file = fs::File::create(config_path)?;
        file.write_all(toml_string.as_bytes())?;

        return Err(format!(
            "Configuration file not found. A default '{}' has been created. Please update it with your credentials.",
            config_path.display()
        )
        .into());
    }

    let config_str = fs::read_to_string(config_path)?;
    let mut config: Config = toml::from_str(&config_str)?;
    apply_env_overrides(&mut config);
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(base_uri) = env::var("SPOTIFY_BASE_URI") {
        log::debug!("Overriding base URI with {}", base_uri);
        config.spotify.base_uri = base_uri;
    }
    if let Ok(account_base_uri) = env::var("SPOTIFY_ACCOUNT_BASE_URI") {
        log::debug!("Overriding account base URI with {}", account_base_uri);
        config.spotify.account_base_uri = account_base_uri;
    }
}
