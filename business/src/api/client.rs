//! REST client for the library backend.
//!
//! All endpoints live under `{api_url}/{Resource::PATH}`. Non-success
//! responses are normalized into [`ApiError::Status`].

use libris_states::State;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::BusinessConfig;
use crate::api::{ApiError, ApiResult, Page, PageQuery};
use crate::models::{EntityId, Resource};

#[derive(Debug, Clone)]
pub struct ApiClient {
    api_url: String,
    http: reqwest::Client,
}

impl State for ApiClient {}

impl ApiClient {
    /// `api_url` is the full API root, e.g. `http://localhost:8080/api`.
    pub fn new(api_url: impl Into<String>) -> ApiResult<Self> {
        let api_url = api_url.into().trim_end_matches('/').to_owned();
        if api_url.is_empty() {
            return Err(ApiError::InvalidConfig("API URL is empty".to_owned()));
        }

        Ok(Self {
            api_url,
            http: reqwest::Client::new(),
        })
    }

    pub fn from_config(config: &BusinessConfig) -> ApiResult<Self> {
        Self::new(config.api_url())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn collection_url<T: Resource>(&self) -> String {
        format!("{}/{}", self.api_url, T::PATH)
    }

    fn item_url<T: Resource>(&self, id: EntityId) -> String {
        format!("{}/{}/{id}", self.api_url, T::PATH)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("accept", "application/json")
    }

    /// `GET /{path}?page&size&search&status&sort`
    pub async fn list<T: Resource>(&self, query: &PageQuery) -> ApiResult<Page<T>> {
        let url = self.collection_url::<T>();
        log::debug!("GET {url} {:?}", query.to_query_pairs());

        let response = self
            .request(Method::GET, &url)
            .query(&query.to_query_pairs())
            .send()
            .await?;

        decode(response).await
    }

    /// `GET /{path}/{id}`
    pub async fn get<T: Resource>(&self, id: EntityId) -> ApiResult<T> {
        let response = self
            .request(Method::GET, &self.item_url::<T>(id))
            .send()
            .await?;

        decode(response).await
    }

    /// `POST /{path}`
    pub async fn create<T: Resource>(&self, draft: &T::Draft) -> ApiResult<T> {
        let response = self
            .request(Method::POST, &self.collection_url::<T>())
            .json(draft)
            .send()
            .await?;

        decode(response).await
    }

    /// `PUT /{path}/{id}`
    pub async fn update<T: Resource>(&self, id: EntityId, draft: &T::Draft) -> ApiResult<T> {
        let response = self
            .request(Method::PUT, &self.item_url::<T>(id))
            .json(draft)
            .send()
            .await?;

        decode(response).await
    }

    /// `DELETE /{path}/{id}`
    pub async fn delete<T: Resource>(&self, id: EntityId) -> ApiResult<()> {
        let response = self
            .request(Method::DELETE, &self.item_url::<T>(id))
            .send()
            .await?;

        ensure_success(response).await.map(drop)
    }

    /// `POST /{path}/{id}/{action}`, e.g. `loans/3/return`.
    ///
    /// The business rule behind the action runs on the server.
    pub async fn invoke<T: Resource>(&self, id: EntityId, action: &str) -> ApiResult<()> {
        let url = format!("{}/{action}", self.item_url::<T>(id));
        log::debug!("POST {url}");

        let response = self.request(Method::POST, &url).send().await?;

        ensure_success(response).await.map(drop)
    }
}

async fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    let err = ApiError::from_status(status, &body);
    log::warn!("{err}");
    Err(err)
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = ensure_success(response).await?;
    let body = response.bytes().await?;

    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
}
