use crate::config::SpotifyConfig;
use crate::spotify::{API, TOKEN};
use log::{debug, info, warn};
use oauth2::basic::BasicClient;
use oauth2::reqwest::async_http_client;
use oauth2::{AuthUrl, ClientId, ClientSecret, RefreshToken, TokenResponse, TokenUrl};
use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

// Renew this long before the server-side expiry.
const EXPIRY_MARGIN_SECS: u64 = 60;

struct CachedToken {
    access_token: String,
    expires_at: u64,
}

/// Holds the bearer token for every call, renewing it through the refresh-token grant.
pub struct TokenManager {
    client: BasicClient,
    refresh_token: RefreshToken,
    cached: Mutex<Option<CachedToken>>,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn is_token_expired(expires_at: u64) -> bool {
    now_secs().saturating_add(EXPIRY_MARGIN_SECS) >= expires_at
}

impl TokenManager {
    pub fn new(config: &SpotifyConfig) -> Result<Self, Box<dyn Error>> {
        let account_base_uri = config.account_base_uri.trim_end_matches('/');
        let client = BasicClient::new(
            ClientId::new(config.client_id.clone()),
            Some(ClientSecret::new(config.client_secret.clone())),
            AuthUrl::new(format!("{}/authorize", account_base_uri))?,
            Some(TokenUrl::new(format!("{}{}{}", account_base_uri, API, TOKEN))?),
        );

        Ok(Self {
            client,
            refresh_token: RefreshToken::new(config.refresh_token.clone()),
            cached: Mutex::new(None),
        })
    }

    pub async fn get_token(&self) -> Result<String, Box<dyn Error>> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if !is_token_expired(token.expires_at) {
                return Ok(token.access_token.clone());
            }
            info!("Access token expired, renewing");
        }

        let token = self.renew_token().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }

    async fn renew_token(&self) -> Result<CachedToken, Box<dyn Error>> {
        debug!("Requesting access token with refresh token grant");
        let token_result = self
            .client
            .exchange_refresh_token(&self.refresh_token)
            .request_async(async_http_client)
            .await
            .map_err(|e| format!("ABORT!!! Renew token failed: {}", e))?;

        let access_token = token_result.access_token().secret().to_string();
        let expires_at = match token_result.expires_in() {
            Some(expires_in) => now_secs().saturating_add(expires_in.as_secs()),
            None => {
                warn!("Token response carried no expires_in, it will be renewed on next use");
                now_secs()
            }
        };

        Ok(CachedToken { access_token, expires_at })
    }
}
