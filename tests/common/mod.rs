#![allow(dead_code)]

use pretty_assertions::assert_eq;
use spotify_playlist_api_tests::config::{Config, DataConfig, SpotifyConfig};
use spotify_playlist_api_tests::spotify::playlist::{ApiError, Playlist};
use spotify_playlist_api_tests::spotify::StatusCode;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn playlist_builder(name: &str, description: &str, public: bool) -> Playlist {
    Playlist::builder()
        .name(name)
        .description(description)
        .public(public)
        .build()
}

pub fn assert_playlist_equal(response_playlist: &Playlist, request_playlist: &Playlist) {
    assert_eq!(response_playlist.name, request_playlist.name);
    assert_eq!(response_playlist.description, request_playlist.description);
    assert_eq!(response_playlist.public, request_playlist.public);
}

pub fn assert_status_code(actual_status_code: u16, expected: StatusCode) {
    assert_eq!(actual_status_code, expected.code());
}

pub fn assert_error(error: &ApiError, expected: StatusCode) {
    assert_eq!(error.error.status, expected.code());
    assert_eq!(error.error.message, expected.msg());
}

/// Points both the Web API and the accounts service at one local server.
pub fn mock_config(server_url: &str) -> Config {
    Config {
        spotify: SpotifyConfig {
            client_id: "test-client-id".to_string(),
            client_secret: "test-client-secret".to_string(),
            refresh_token: "test-refresh-token".to_string(),
            user_id: "tester".to_string(),
            base_uri: server_url.to_string(),
            account_base_uri: server_url.to_string(),
        },
        data: DataConfig {
            get_playlist_id: "get-id".to_string(),
            update_playlist_id: "update-id".to_string(),
        },
    }
}
