// tests/common/mod.rs
pub use httpmock::MockServer;
pub use serde_json::{json, Value};

use chrono::{Duration, SecondsFormat, Utc};

use crate::config::settings::SettingsConfig;
use crate::session::{DeviceInfo, Session, Token};
use crate::NalogClient;

pub const API_PREFIX: &str = "/api/v1";
pub const INN: &str = "771234567890";

/// Mock API on an ephemeral port and settings pointing at it
pub async fn start_api() -> (MockServer, SettingsConfig) {
    let server = MockServer::start_async().await;
    let settings = SettingsConfig::default().with_api_url(format!("{}{}", server.base_url(), API_PREFIX));
    (server, settings)
}

pub fn api_path(path: &str) -> String {
    format!("{}/{}", API_PREFIX, path)
}

/// `tokenExpireIn` the way the service formats it
pub fn expiry_in(seconds: i64) -> String {
    (Utc::now() + Duration::seconds(seconds)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn login_envelope(token: &str, refresh_token: &str, ttl_seconds: i64) -> Value {
    json!({
        "token": token,
        "tokenExpireIn": expiry_in(ttl_seconds),
        "refreshToken": refresh_token,
        "refreshTokenExpiresIn": null,
        "profile": {
            "inn": INN,
            "displayName": "Иванов Иван Иванович",
            "status": "ACTIVE"
        }
    })
}

/// Client holding an access token that lives for `ttl_seconds` (negative = expired)
pub fn client_with_token(settings: &SettingsConfig, token: &str, ttl_seconds: i64) -> NalogClient {
    let expires_at = (Utc::now() + Duration::seconds(ttl_seconds)).fixed_offset();
    let session = Session::restore(
        DeviceInfo::default(),
        INN,
        Token::new(token.to_owned(), expires_at),
        "refresh-1",
    );
    NalogClient::with_session(settings, session)
}
