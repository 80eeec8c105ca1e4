//! # nalog-client
//!
//! Client for the self-employed income receipts API (`lknpd.nalog.ru`):
//! password authentication, bearer token refresh on expiry, and the income
//! operations built on top of them.
//!
//! Modules:
//! - `client` — `NalogClient`, one method per remote operation
//! - `session` — token state and the device descriptor
//! - `models` — request bodies and response envelopes
//! - `config` — YAML settings for the command line front end
//! - `helpers` — timestamp and expiry rules

pub mod client;
pub mod config;
pub mod error;
pub mod helpers;
pub mod models;
pub mod session;
pub mod tests;
pub mod utils;


pub use crate::client::NalogClient;
pub use crate::config::settings::{ServiceConfig, SettingsConfig};
pub use crate::error::ApiError;
pub use crate::models::{Receipt, ReceiptFormat};
pub use crate::session::{DeviceInfo, Session, Token};
