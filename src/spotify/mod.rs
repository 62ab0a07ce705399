pub mod auth;
pub mod playlist;
pub mod rest;

use crate::config::Config;
use auth::TokenManager;
use rest::RestClient;
use std::sync::Arc;

pub const BASE_PATH: &str = "/v1";
pub const API: &str = "/api";
pub const TOKEN: &str = "/token";
pub const USERS: &str = "/users";
pub const PLAYLISTS: &str = "/playlists";

/// Expected statuses, paired with the error message the API sends for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Code200,
    Code201,
    Code400,
    Code401,
}

impl StatusCode {
    pub fn code(self) -> u16 {
        match self {
            StatusCode::Code200 => 200,
            StatusCode::Code201 => 201,
            StatusCode::Code400 => 400,
            StatusCode::Code401 => 401,
        }
    }

    pub fn msg(self) -> &'static str {
        match self {
            StatusCode::Code200 | StatusCode::Code201 => "",
            StatusCode::Code400 => "Missing required field: name",
            StatusCode::Code401 => "Invalid access token",
        }
    }
}

pub struct SpotifyClient {
    pub rest: RestClient,
    pub tokens: Arc<TokenManager>,
    pub user_id: String,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let tokens = Arc::new(TokenManager::new(&config.spotify)?);
        Ok(Self::with_tokens(config, tokens))
    }

    /// Builds a client that shares an existing token cache.
    pub fn with_tokens(config: &Config, tokens: Arc<TokenManager>) -> Self {
        Self {
            rest: RestClient::new(&config.spotify.base_uri),
            tokens,
            user_id: config.spotify.user_id.clone(),
        }
    }

    pub fn playlists(&self) -> playlist::PlaylistApi<'_> {
        playlist::PlaylistApi::new(self)
    }
}
