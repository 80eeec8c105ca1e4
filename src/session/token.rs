use chrono::{DateTime, FixedOffset};

use crate::helpers::time::is_expired;

/// Bearer token with the expiry reported by the auth endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub expires_at: DateTime<FixedOffset>,
}

impl Token {
    pub fn new(value: String, expires_at: DateTime<FixedOffset>) -> Self {
        Self { value, expires_at }
    }

    /// Check if token can still be sent
    pub fn is_usable(&self) -> bool {
        !self.value.is_empty() && !is_expired(&self.expires_at)
    }
}
