use serde::{Deserialize, Serialize};

use crate::session::DeviceInfo;

/// `POST auth/lkfl` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub device_info: &'a DeviceInfo,
}

/// `POST auth/token` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest<'a> {
    pub device_info: &'a DeviceInfo,
    pub refresh_token: &'a str,
}

/// Envelope returned by both auth endpoints.
///
/// Every field is optional: the endpoints answer rejections with the same
/// shape, carrying only `message`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub token_expire_in: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub inn: Option<String>,
}

impl AuthResponse {
    pub fn refresh_token(&self) -> Option<&str> {
        non_empty(&self.refresh_token)
    }

    pub fn token(&self) -> Option<&str> {
        non_empty(&self.token)
    }

    pub fn inn(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| non_empty(&p.inn))
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
