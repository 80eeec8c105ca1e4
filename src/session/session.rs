use crate::session::device::DeviceInfo;
use crate::session::token::Token;

/// Authentication state held by a single client.
///
/// Owned exclusively by [`NalogClient`](crate::client::NalogClient) and
/// mutated through `&mut self`. Nothing here is synchronized: a client shared
/// between tasks must be wrapped by the caller, and two refreshes racing on
/// copies of the same session would overwrite each other's refresh token.
#[derive(Debug, Clone)]
pub struct Session {
    inn: Option<String>,
    token: Option<Token>,
    refresh_token: String,
    device_info: DeviceInfo,
}

impl Session {
    pub fn new(device_info: DeviceInfo) -> Self {
        Self {
            inn: None,
            token: None,
            refresh_token: String::new(),
            device_info,
        }
    }

    /// Rebuild a session from previously issued tokens
    pub fn restore(
        device_info: DeviceInfo,
        inn: impl Into<String>,
        token: Token,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            inn: Some(inn.into()),
            token: Some(token),
            refresh_token: refresh_token.into(),
            device_info,
        }
    }

    pub fn inn(&self) -> Option<&str> {
        self.inn.as_deref()
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    pub fn has_refresh_token(&self) -> bool {
        !self.refresh_token.is_empty()
    }

    /// Current access token, if any and not expired
    pub fn usable_token(&self) -> Option<&str> {
        self.token
            .as_ref()
            .filter(|token| token.is_usable())
            .map(|token| token.value.as_str())
    }

    pub(crate) fn store_login(&mut self, inn: String, token: Token, refresh_token: String) {
        self.inn = Some(inn);
        self.token = Some(token);
        self.refresh_token = refresh_token;
    }

    /// Refresh responses may or may not rotate the refresh token
    pub(crate) fn store_refresh(&mut self, token: Token, refresh_token: Option<String>) {
        self.token = Some(token);
        if let Some(refresh_token) = refresh_token.filter(|t| !t.is_empty()) {
            self.refresh_token = refresh_token;
        }
    }
}
