//! Client for the self-employed receipts API.
//!
//! Every public operation maps to exactly one remote call. Authenticated calls
//! first make sure the session holds a live access token and refresh it when
//! it has expired; the refresh is the only extra round trip the client ever
//! makes on its own.
//!
//! The client owns its [`Session`] and mutates it through `&mut self`, so one
//! instance serves one caller at a time. Sharing it across tasks is left to the
//! caller (e.g. behind a mutex); concurrent refreshes are not coordinated.

pub mod auth;
pub mod income;
pub mod request;

use reqwest::Client;

use crate::config::settings::SettingsConfig;
use crate::error::ApiError;
use crate::models::ReceiptFormat;
use crate::session::{DeviceInfo, Session};
use crate::utils::constants::PATH_RECEIPT;

#[derive(Debug)]
pub struct NalogClient {
    api_url: String,
    http: Client,
    session: Session,
}

impl NalogClient {
    /// Unauthenticated client with a freshly generated device descriptor
    pub fn new(settings: &SettingsConfig) -> Self {
        let device_info = DeviceInfo::new(settings.device.as_ref());
        Self::with_session(settings, Session::new(device_info))
    }

    /// Client resuming an existing session
    pub fn with_session(settings: &SettingsConfig, session: Session) -> Self {
        Self {
            api_url: settings.api_url().trim_end_matches('/').to_owned(),
            http: Client::new(),
            session,
        }
    }

    /// Use a custom HTTP client (proxy, timeouts, connection reuse).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// Build a client and log in with the taxpayer's password.
    pub async fn connect(
        settings: &SettingsConfig,
        inn: &str,
        password: &str,
    ) -> Result<Self, ApiError> {
        let mut client = Self::new(settings);
        client.authenticate(inn, password).await?;
        Ok(client)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn device_info(&self) -> &DeviceInfo {
        self.session.device_info()
    }

    /// Taxpayer ID learned from the last successful login
    pub fn inn(&self) -> Option<&str> {
        self.session.inn()
    }

    /// Public URL of a receipt. Makes no network call.
    ///
    /// Pass [`ReceiptFormat::Print`] for the printable page; note that
    /// `ReceiptFormat::default()` is `Json`, the download default.
    pub fn income_link(
        &self,
        receipt_uuid: &str,
        format: &ReceiptFormat,
    ) -> Result<String, ApiError> {
        let path = self.receipt_path(receipt_uuid, format)?;
        Ok(self.url(&path))
    }

    fn receipt_path(&self, receipt_uuid: &str, format: &ReceiptFormat) -> Result<String, ApiError> {
        let inn = self.inn().ok_or(ApiError::NotAuthenticated)?;
        Ok(format!("{}/{}/{}/{}", PATH_RECEIPT, inn, receipt_uuid, format))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}
