//! Request bodies and response envelopes of the receipts API

pub mod auth;
pub mod income;
pub mod receipt;

pub use auth::{AuthResponse, PasswordAuthRequest, Profile, RefreshTokenRequest};
pub use income::{
    CancelRequest, CancelResponse, IncomeClient, IncomeRequest, IncomeResponse, IncomeService,
    IncomeType, PaymentType,
};
pub use receipt::{Receipt, ReceiptFormat};

/// Envelope `message` or the operation's default
pub(crate) fn rejection_message(message: Option<String>, default: &str) -> String {
    message.unwrap_or_else(|| default.to_owned())
}
