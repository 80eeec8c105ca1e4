use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::helpers::time::format_timestamp;
use crate::models::auth::non_empty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Cash,
    Account,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncomeType {
    FromIndividual,
    FromLegalEntity,
    FromForeignAgency,
}

/// Buyer block of an income. Blank fields mean an anonymous individual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeClient {
    pub contact_phone: String,
    pub display_name: String,
    pub inn: String,
    pub income_type: IncomeType,
}

impl IncomeClient {
    pub fn anonymous() -> Self {
        Self {
            contact_phone: String::new(),
            display_name: String::new(),
            inn: String::new(),
            income_type: IncomeType::FromIndividual,
        }
    }
}

/// One service line. Amounts travel as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeService {
    pub name: String,
    pub amount: String,
    pub quantity: String,
}

/// `POST income` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRequest {
    pub operation_time: String,
    pub request_time: String,
    pub services: Vec<IncomeService>,
    pub total_amount: String,
    pub client: IncomeClient,
    pub payment_type: PaymentType,
    pub ignore_max_total_income_restriction: bool,
}

impl IncomeRequest {
    /// Cash income from an anonymous individual with a single service line.
    ///
    /// `totalAmount` is the line amount as given; quantity does not multiply it.
    pub fn single_service(
        request_time: &DateTime<FixedOffset>,
        operation_time: Option<&DateTime<FixedOffset>>,
        amount: Decimal,
        name: &str,
        quantity: Decimal,
    ) -> Self {
        let request_time = format_timestamp(request_time);
        let operation_time = operation_time
            .map(format_timestamp)
            .unwrap_or_else(|| request_time.clone());
        let amount = decimal_to_string(amount);

        Self {
            operation_time,
            request_time,
            services: vec![IncomeService {
                name: name.to_owned(),
                amount: amount.clone(),
                quantity: decimal_to_string(quantity),
            }],
            total_amount: amount,
            client: IncomeClient::anonymous(),
            payment_type: PaymentType::Cash,
            ignore_max_total_income_restriction: false,
        }
    }
}

fn decimal_to_string(value: Decimal) -> String {
    value.normalize().to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeResponse {
    #[serde(default)]
    pub approved_receipt_uuid: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl IncomeResponse {
    pub fn approved_receipt_uuid(&self) -> Option<&str> {
        non_empty(&self.approved_receipt_uuid)
    }
}

/// `POST cancel` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRequest {
    pub receipt_uuid: String,
    pub comment: String,
    pub partner_code: Option<String>,
    pub request_time: String,
}

impl CancelRequest {
    pub fn new(receipt_uuid: &str, comment: &str, request_time: &DateTime<FixedOffset>) -> Self {
        Self {
            receipt_uuid: receipt_uuid.to_owned(),
            comment: comment.to_owned(),
            partner_code: None,
            request_time: format_timestamp(request_time),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    #[serde(default)]
    pub income_info: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl CancelResponse {
    /// `incomeInfo` when the server sent a non-empty value
    pub fn take_income_info(&mut self) -> Option<Value> {
        self.income_info.take().filter(|info| match info {
            Value::Null => false,
            Value::Object(map) => !map.is_empty(),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => true,
        })
    }
}
