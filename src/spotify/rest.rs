use crate::spotify::BASE_PATH;
use log::debug;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Status and body of a finished call, read eagerly so assertions stay synchronous.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: reqwest::StatusCode,
    body: String,
}

impl ApiResponse {
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Box<dyn std::error::Error>> {
        if self.body.is_empty() {
            return Err("Empty response body".into());
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_uri: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: format!("{}{}", base_uri.trim_end_matches('/'), BASE_PATH),
        }
    }

    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, token: &str, payload: &T) -> Result<ApiResponse, Box<dyn std::error::Error>> {
        let request = self
            .request_spec(Method::POST, path)
            .bearer_auth(token)
            .json(payload);
        self.extract(request).await
    }

    pub async fn get(&self, path: &str, token: &str) -> Result<ApiResponse, Box<dyn std::error::Error>> {
        let request = self.request_spec(Method::GET, path).bearer_auth(token);
        self.extract(request).await
    }

    pub async fn update<T: Serialize + ?Sized>(&self, path: &str, token: &str, payload: &T) -> Result<ApiResponse, Box<dyn std::error::Error>> {
        let request = self
            .request_spec(Method::PUT, path)
            .bearer_auth(token)
            .json(payload);
        self.extract(request).await
    }

    fn request_spec(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
    }

    async fn extract(&self, request: RequestBuilder) -> Result<ApiResponse, Box<dyn std::error::Error>> {
        let request = request.build()?;
        debug!("Request: {} {}", request.method(), request.url());
        if let Some(body) = request.body().and_then(|b| b.as_bytes()) {
            debug!("Request body: {}", String::from_utf8_lossy(body));
        }

        // Non-2xx statuses are returned as data; only transport failures are errors.
        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Response: {} {}", status, body);

        Ok(ApiResponse { status, body })
    }
}
