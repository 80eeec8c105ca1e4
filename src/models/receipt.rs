use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::utils::constants::{RECEIPT_FORMAT_JSON, RECEIPT_FORMAT_PRINT};

/// Last path segment of `receipt/{inn}/{uuid}/{format}`.
///
/// The default is `Json`, the default of receipt downloads. Links are usually
/// built for [`ReceiptFormat::Print`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReceiptFormat {
    #[default]
    Json,
    Print,
    /// Any other rendering the service offers, e.g. `pdf`
    Other(String),
}

impl ReceiptFormat {
    pub fn as_str(&self) -> &str {
        match self {
            ReceiptFormat::Json => RECEIPT_FORMAT_JSON,
            ReceiptFormat::Print => RECEIPT_FORMAT_PRINT,
            ReceiptFormat::Other(format) => format,
        }
    }

    /// Compares the rendered segment, so `Other("json")` counts too
    pub fn is_json(&self) -> bool {
        self.as_str() == RECEIPT_FORMAT_JSON
    }
}

impl fmt::Display for ReceiptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReceiptFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            RECEIPT_FORMAT_JSON => ReceiptFormat::Json,
            RECEIPT_FORMAT_PRINT => ReceiptFormat::Print,
            other => ReceiptFormat::Other(other.to_owned()),
        })
    }
}

/// Approved receipt as downloaded
#[derive(Debug, Clone, PartialEq)]
pub enum Receipt {
    Json(Value),
    Raw(Vec<u8>),
}

impl Receipt {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Receipt::Json(value) => Some(value),
            Receipt::Raw(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Receipt::Raw(bytes) => Some(bytes),
            Receipt::Json(_) => None,
        }
    }
}
