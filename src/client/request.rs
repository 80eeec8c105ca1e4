use http::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::NalogClient;
use crate::error::ApiError;
use crate::utils::constants::{
    HEADER_ACCEPT, HEADER_ACCEPT_LANGUAGE, HEADER_CONTENT_TYPE, HEADER_REFERRER,
    HEADER_REFERRER_POLICY,
};

/// Headers the web cabinet sends with every request
pub fn fixed_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(HEADER_ACCEPT));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(HEADER_ACCEPT_LANGUAGE));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(HEADER_CONTENT_TYPE));
    headers.insert(
        HeaderName::from_static("referrer"),
        HeaderValue::from_static(HEADER_REFERRER),
    );
    headers.insert(
        HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static(HEADER_REFERRER_POLICY),
    );
    headers
}

impl NalogClient {
    /// Generic call: POST with `body` when given, GET otherwise.
    /// Returns the response envelope as is.
    pub async fn call_method(
        &mut self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        match body {
            Some(body) => self.post(path, body).await,
            None => self.get(path).await,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&mut self, path: &str) -> Result<T, ApiError> {
        let response = self.authorized(Method::GET, path).await?.send().await?;
        decode(response).await
    }

    pub(crate) async fn post<B, T>(&mut self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.authorized(Method::POST, path).await?.json(body).send().await?;
        decode(response).await
    }

    /// POST without a bearer token, used by the auth endpoints
    pub(crate) async fn post_unauthorized<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(method = %Method::POST, path, "calling auth method");
        let response = self
            .http
            .post(self.url(path))
            .headers(fixed_headers())
            .json(body)
            .send()
            .await?;
        decode(response).await
    }

    /// Request builder carrying a live bearer token
    pub(crate) async fn authorized(
        &mut self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, ApiError> {
        let token = self.ensure_token().await?;
        debug!(%method, path, "calling method");
        Ok(self
            .http
            .request(method, self.url(path))
            .headers(fixed_headers())
            .bearer_auth(token))
    }
}

/// Parse the JSON envelope. The HTTP status is not consulted: the endpoints
/// report rejections inside the body.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        warn!(%status, error = %e, "response body is not a valid envelope");
        ApiError::Decode(e)
    })
}
