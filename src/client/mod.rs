//! Typed HTTP client for the CRM API plus the state store and view models the
//! single-page front end is built on.

pub mod store;
pub mod views;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::handlers::messages::{GenerateMessageRequest, GenerateMessageResponse};

pub use store::{CrmState, CrmStore};

pub mod paths {
    pub const RETAILERS: &str = "/api/retailers";
    pub const VENDORS: &str = "/api/vendors";
    pub const LEADS: &str = "/api/leads";
    pub const DEALS: &str = "/api/deals";
    pub const PROPOSALS: &str = "/api/proposals";
    pub const TICKETS: &str = "/api/tickets";
    pub const PROFILE: &str = "/api/profile";
    pub const GENERATE_MESSAGE: &str = "/api/generate-message";
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed to {path}: {status} - {body}")]
    Status { path: String, status: u16, body: String },
}

#[derive(Clone)]
pub struct CrmClient {
    http: Client,
    base_url: String,
}

impl CrmClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            http: Client::builder().build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, req: reqwest::RequestBuilder, path: &str) -> Result<reqwest::Response, ClientError> {
        let res = req.send().await?;
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                path: path.to_string(),
                status,
                body,
            });
        }
        Ok(res)
    }

    /// GET a JSON document.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let res = self.execute(self.http.get(self.url(path)), path).await?;
        Ok(res.json().await?)
    }

    /// Send a JSON body and decode the JSON reply.
    pub async fn send<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.http.request(method, self.url(path)).json(body);
        let res = self.execute(req, path).await?;
        Ok(res.json().await?)
    }

    /// Send a JSON body and ignore the reply (used for `204 No Content`).
    pub async fn send_without_reply<B>(&self, method: Method, path: &str, body: &B) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        let req = self.http.request(method, self.url(path)).json(body);
        self.execute(req, path).await?;
        Ok(())
    }

    pub async fn generate_message(&self, request: &GenerateMessageRequest) -> Result<String, ClientError> {
        let reply: GenerateMessageResponse = self
            .send(Method::POST, paths::GENERATE_MESSAGE, request)
            .await?;
        Ok(reply.message)
    }
}
