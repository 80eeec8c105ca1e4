use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::settings::DeviceConfig;
use crate::utils::constants::{
    DEVICE_APP_VERSION, DEVICE_ID_ALPHABET, DEVICE_ID_LEN, DEVICE_OS, DEVICE_SOURCE_TYPE,
    DEVICE_USER_AGENT,
};

/// Device descriptor attached to every auth request.
///
/// The `sourceDeviceId` is generated once per client instance and never
/// changes afterwards; the auth service binds refresh tokens to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub app_version: String,
    pub source_type: String,
    pub source_device_id: String,
    pub meta_details: MetaDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDetails {
    pub user_agent: String,
    pub os: String,
}

impl DeviceInfo {
    pub fn new(device_config: Option<&DeviceConfig>) -> Self {
        let pick = |field: fn(&DeviceConfig) -> &Option<String>, default: &str| {
            device_config
                .and_then(|c| field(c).clone())
                .unwrap_or_else(|| default.to_owned())
        };
        Self {
            app_version: pick(|c| &c.app_version, DEVICE_APP_VERSION),
            source_type: pick(|c| &c.source_type, DEVICE_SOURCE_TYPE),
            source_device_id: generate_device_id(),
            meta_details: MetaDetails {
                user_agent: pick(|c| &c.user_agent, DEVICE_USER_AGENT),
                os: pick(|c| &c.os, DEVICE_OS),
            },
        }
    }
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Random lowercase alphanumeric identifier, `DEVICE_ID_LEN` chars long
pub fn generate_device_id() -> String {
    let mut rng = rand::rng();
    (0..DEVICE_ID_LEN)
        .map(|_| DEVICE_ID_ALPHABET[rng.random_range(0..DEVICE_ID_ALPHABET.len())] as char)
        .collect()
}
