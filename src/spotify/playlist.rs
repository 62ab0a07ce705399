use crate::spotify::rest::ApiResponse;
use crate::spotify::{SpotifyClient, PLAYLISTS, USERS};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Playlist {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_urls: Option<ExternalUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<Followers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
    // Track paging objects are passed through untyped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: String,
    pub display_name: Option<String>,
    pub href: Option<String>,
    pub uri: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Followers {
    pub href: Option<String>,
    pub total: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

impl Playlist {
    pub fn builder() -> PlaylistBuilder {
        PlaylistBuilder::default()
    }
}

#[derive(Default)]
pub struct PlaylistBuilder {
    playlist: Playlist,
}

impl PlaylistBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.playlist.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.playlist.description = Some(description.into());
        self
    }

    pub fn public(mut self, public: bool) -> Self {
        self.playlist.public = Some(public);
        self
    }

    pub fn build(self) -> Playlist {
        self.playlist
    }
}

/// Error envelope returned by the Web API on 4xx responses.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ApiError {
    pub error: ErrorDetail,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ErrorDetail {
    pub status: u16,
    pub message: String,
}

pub struct PlaylistApi<'a> {
    client: &'a SpotifyClient,
}

impl<'a> PlaylistApi<'a> {
    pub fn new(client: &'a SpotifyClient) -> Self {
        Self { client }
    }

    pub async fn post(&self, playlist: &Playlist) -> Result<ApiResponse, Box<dyn Error>> {
        let token = self.client.tokens.get_token().await?;
        self.post_with_token(&token, playlist).await
    }

    pub async fn post_with_token(&self, token: &str, playlist: &Playlist) -> Result<ApiResponse, Box<dyn Error>> {
        let path = format!("{}/{}{}", USERS, self.client.user_id, PLAYLISTS);
        self.client.rest.post(&path, token, playlist).await
    }

    pub async fn get(&self, playlist_id: &str) -> Result<ApiResponse, Box<dyn Error>> {
        let token = self.client.tokens.get_token().await?;
        self.client
            .rest
            .get(&format!("{}/{}", PLAYLISTS, playlist_id), &token)
            .await
    }

    pub async fn update(&self, playlist_id: &str, playlist: &Playlist) -> Result<ApiResponse, Box<dyn Error>> {
        let token = self.client.tokens.get_token().await?;
        self.client
            .rest
            .update(&format!("{}/{}", PLAYLISTS, playlist_id), &token, playlist)
            .await
    }
}
