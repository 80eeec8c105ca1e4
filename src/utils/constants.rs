//! Shared constants and invariants

pub const API_URL_DEFAULT: &str = "https://lknpd.nalog.ru/api/v1";
pub const TIMEZONE_OFFSET_HOURS_DEFAULT: i32 = 3;
/// FixedOffset accepts strictly less than a day in either direction
pub const TIMEZONE_OFFSET_HOURS_MAX: i32 = 23;

// Endpoints
pub const PATH_AUTH_PASSWORD: &str = "auth/lkfl";
pub const PATH_AUTH_REFRESH: &str = "auth/token";
pub const PATH_USER: &str = "user";
pub const PATH_INCOME: &str = "income";
pub const PATH_CANCEL: &str = "cancel";
pub const PATH_RECEIPT: &str = "receipt";

// Fixed request headers
pub const HEADER_ACCEPT: &str = "application/json, text/plain, */*";
pub const HEADER_ACCEPT_LANGUAGE: &str = "ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7";
pub const HEADER_CONTENT_TYPE: &str = "application/json";
pub const HEADER_REFERRER: &str = "https://lknpd.nalog.ru/";
pub const HEADER_REFERRER_POLICY: &str = "strict-origin-when-cross-origin";

// Device descriptor defaults
pub const DEVICE_APP_VERSION: &str = "1.0.0";
pub const DEVICE_SOURCE_TYPE: &str = "iso";
pub const DEVICE_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 11_2_2) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/88.0.4324.192 Safari/537.36";
pub const DEVICE_OS: &str = "ios";
pub const DEVICE_ID_LEN: usize = 32;
pub const DEVICE_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

// Default envelope error messages
pub const MSG_AUTH_FAILED: &str = "Authorization failed";
pub const MSG_REFRESH_FAILED: &str = "Failed to refresh token";
pub const MSG_ADD_INCOME_FAILED: &str = "Failed to add income";
pub const MSG_CANCEL_INCOME_FAILED: &str = "Failed to cancel income";

// Receipt formats
pub const RECEIPT_FORMAT_JSON: &str = "json";
pub const RECEIPT_FORMAT_PRINT: &str = "print";
