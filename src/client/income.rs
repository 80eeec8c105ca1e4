use chrono::{DateTime, FixedOffset};
use http::Method;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{info, warn};

use crate::client::request::decode;
use crate::client::NalogClient;
use crate::error::ApiError;
use crate::helpers::time::operation_time;
use crate::models::{
    rejection_message, CancelRequest, CancelResponse, IncomeRequest, IncomeResponse, Receipt,
    ReceiptFormat,
};
use crate::utils::constants::{
    MSG_ADD_INCOME_FAILED, MSG_CANCEL_INCOME_FAILED, PATH_CANCEL, PATH_INCOME, PATH_USER,
};

impl NalogClient {
    /// Taxpayer profile, returned unmodified.
    pub async fn get_user_info(&mut self) -> Result<Value, ApiError> {
        self.get(PATH_USER).await
    }

    /// Register a cash income from an anonymous individual.
    ///
    /// `timezone_offset_hours` is the taxpayer's offset from UTC; the request
    /// time is "now" on that wall clock. `occurred_at` overrides the operation
    /// time, which otherwise equals the request time.
    ///
    /// Returns the receipt UUID assigned by the service.
    pub async fn add_income(
        &mut self,
        timezone_offset_hours: i32,
        amount: Decimal,
        name: &str,
        quantity: Decimal,
        occurred_at: Option<DateTime<FixedOffset>>,
    ) -> Result<String, ApiError> {
        let request_time = operation_time(timezone_offset_hours)?;
        let request = IncomeRequest::single_service(
            &request_time,
            occurred_at.as_ref(),
            amount,
            name,
            quantity,
        );
        self.create_income(&request).await
    }

    /// Submit a prepared income body.
    pub async fn create_income(&mut self, request: &IncomeRequest) -> Result<String, ApiError> {
        let response: IncomeResponse = self.post(PATH_INCOME, request).await?;

        if let Some(receipt_uuid) = response.approved_receipt_uuid().map(str::to_owned) {
            info!(%receipt_uuid, total_amount = %request.total_amount, "income registered");
            return Ok(receipt_uuid);
        }
        let message = rejection_message(response.message, MSG_ADD_INCOME_FAILED);
        warn!(%message, "income rejected");
        Err(ApiError::IncomeCreation(message))
    }

    /// Cancel a registered income. Returns the server's `incomeInfo` unchanged.
    pub async fn cancel_income(
        &mut self,
        timezone_offset_hours: i32,
        receipt_uuid: &str,
        comment: &str,
    ) -> Result<Value, ApiError> {
        let request_time = operation_time(timezone_offset_hours)?;
        let request = CancelRequest::new(receipt_uuid, comment, &request_time);
        let mut response: CancelResponse = self.post(PATH_CANCEL, &request).await?;

        if let Some(income_info) = response.take_income_info() {
            info!(%receipt_uuid, "income cancelled");
            return Ok(income_info);
        }
        let message = rejection_message(response.message, MSG_CANCEL_INCOME_FAILED);
        warn!(%receipt_uuid, %message, "income cancellation rejected");
        Err(ApiError::IncomeCancellation(message))
    }

    /// Download an approved receipt. `json` is parsed, any other format is
    /// returned as raw bytes (e.g. a PDF or the print page).
    pub async fn get_approved_income(
        &mut self,
        receipt_uuid: &str,
        format: &ReceiptFormat,
    ) -> Result<Receipt, ApiError> {
        let path = self.receipt_path(receipt_uuid, format)?;
        let response = self.authorized(Method::GET, &path).await?.send().await?;

        if format.is_json() {
            Ok(Receipt::Json(decode(response).await?))
        } else {
            Ok(Receipt::Raw(response.bytes().await?.to_vec()))
        }
    }
}
