#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use httpmock::Method::POST;
    use rust_decimal::Decimal;

    use crate::error::ApiError;
    use crate::models::{IncomeClient, IncomeRequest, IncomeType, PaymentType};
    use crate::tests::common::*;

    #[tokio::test]
    async fn add_income_returns_receipt_uuid() {
        let (server, settings) = start_api().await;
        let income = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(api_path("income"))
                    .header("authorization", "Bearer access-1")
                    .body_includes(r#""totalAmount":"1000""#)
                    .body_includes(r#""services":[{"name":"Consulting","amount":"1000","quantity":"1"}]"#)
                    .body_includes(r#""paymentType":"CASH""#)
                    .body_includes(r#""incomeType":"FROM_INDIVIDUAL""#)
                    .body_includes(r#""ignoreMaxTotalIncomeRestriction":false"#)
                    .body_includes("+03:00");
                then.status(200).json_body(json!({ "approvedReceiptUuid": "200abc123" }));
            })
            .await;

        let mut client = client_with_token(&settings, "access-1", 600);
        let receipt_uuid = client
            .add_income(3, Decimal::from(1000), "Consulting", Decimal::from(1), None)
            .await
            .unwrap();

        income.assert_async().await;
        assert_eq!(receipt_uuid, "200abc123");
    }

    #[tokio::test]
    async fn add_income_sends_explicit_operation_time() {
        let (server, settings) = start_api().await;
        let income = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(api_path("income"))
                    .body_includes(r#""operationTime":"2024-04-30T18:30:00.000+03:00""#);
                then.status(200).json_body(json!({ "approvedReceiptUuid": "200abc124" }));
            })
            .await;

        let occurred_at = FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 4, 30, 18, 30, 0)
            .unwrap();
        let mut client = client_with_token(&settings, "access-1", 600);
        client
            .add_income(3, Decimal::from(500), "Design", Decimal::from(2), Some(occurred_at))
            .await
            .unwrap();
        income.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_income_carries_server_message() {
        let (server, settings) = start_api().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(api_path("income"));
                then.status(400).json_body(json!({
                    "code": "validation.failed",
                    "message": "Превышен лимит дохода"
                }));
            })
            .await;

        let mut client = client_with_token(&settings, "access-1", 600);
        let err = client
            .add_income(3, Decimal::from(1000), "Consulting", Decimal::from(1), None)
            .await
            .unwrap_err();
        assert!(matches!(&err, ApiError::IncomeCreation(m) if m == "Превышен лимит дохода"));
    }

    #[tokio::test]
    async fn income_without_receipt_uuid_uses_default_message() {
        let (server, settings) = start_api().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(api_path("income"));
                then.status(200).json_body(json!({ "approvedReceiptUuid": null }));
            })
            .await;

        let mut client = client_with_token(&settings, "access-1", 600);
        let err = client
            .add_income(3, Decimal::from(1000), "Consulting", Decimal::from(1), None)
            .await
            .unwrap_err();
        assert_eq!(err.message(), Some("Failed to add income"));
    }

    #[tokio::test]
    async fn invalid_offset_fails_without_request() {
        let (_server, settings) = start_api().await;
        let mut client = client_with_token(&settings, "access-1", 600);
        let err = client
            .add_income(30, Decimal::from(1000), "Consulting", Decimal::from(1), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidTimezoneOffset(30)));
    }

    #[tokio::test]
    async fn cancel_income_returns_income_info_unchanged() {
        let (server, settings) = start_api().await;
        let income_info = json!({
            "approvedReceiptUuid": "200abc123",
            "name": "Consulting",
            "totalAmount": 1000,
            "cancellationInfo": {
                "operationTime": "2024-05-01T15:00:00+03:00",
                "comment": "Возврат средств"
            }
        });
        let cancel = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(api_path("cancel"))
                    .header("authorization", "Bearer access-1")
                    .body_includes(r#""receiptUuid":"200abc123""#)
                    .body_includes(r#""comment":"Возврат средств""#)
                    .body_includes(r#""partnerCode":null"#)
                    .body_includes("+03:00");
                then.status(200).json_body(json!({ "incomeInfo": income_info.clone() }));
            })
            .await;

        let mut client = client_with_token(&settings, "access-1", 600);
        let info = client
            .cancel_income(3, "200abc123", "Возврат средств")
            .await
            .unwrap();
        cancel.assert_async().await;
        assert_eq!(info, income_info);
    }

    #[tokio::test]
    async fn cancel_without_income_info_fails_even_on_200() {
        let (server, settings) = start_api().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(api_path("cancel"));
                then.status(200).json_body(json!({ "message": "Чек уже аннулирован" }));
            })
            .await;

        let mut client = client_with_token(&settings, "access-1", 600);
        let err = client
            .cancel_income(3, "200abc123", "Возврат средств")
            .await
            .unwrap_err();
        assert!(matches!(&err, ApiError::IncomeCancellation(m) if m == "Чек уже аннулирован"));
    }

    #[tokio::test]
    async fn cancel_without_message_uses_default() {
        let (server, settings) = start_api().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(api_path("cancel"));
                then.status(200).json_body(json!({}));
            })
            .await;

        let mut client = client_with_token(&settings, "access-1", 600);
        let err = client.cancel_income(3, "200abc123", "x").await.unwrap_err();
        assert_eq!(err.message(), Some("Failed to cancel income"));
    }

    #[tokio::test]
    async fn generic_call_posts_body_or_gets() {
        let (server, settings) = start_api().await;
        let post = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(api_path("incomes/summary"))
                    .json_body(json!({ "year": 2024 }));
                then.status(200).json_body(json!({ "total": 15000 }));
            })
            .await;
        let get = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET).path(api_path("taxes"));
                then.status(200).json_body(json!({ "debt": 0 }));
            })
            .await;

        let mut client = client_with_token(&settings, "access-1", 600);
        let summary = client
            .call_method("incomes/summary", Some(&json!({ "year": 2024 })))
            .await
            .unwrap();
        let taxes = client.call_method("/taxes", None).await.unwrap();

        post.assert_async().await;
        get.assert_async().await;
        assert_eq!(summary["total"], 15000);
        assert_eq!(taxes["debt"], 0);
    }

    #[tokio::test]
    async fn prepared_income_from_legal_entity_by_transfer() {
        let (server, settings) = start_api().await;
        let income = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(api_path("income"))
                    .body_includes(r#""paymentType":"ACCOUNT""#)
                    .body_includes(r#""incomeType":"FROM_LEGAL_ENTITY""#)
                    .body_includes(r#""inn":"7707083893""#)
                    .body_includes(r#""displayName":"ООО Ромашка""#);
                then.status(200).json_body(json!({ "approvedReceiptUuid": "200abc125" }));
            })
            .await;

        let request_time = crate::helpers::time::operation_time(3).unwrap();
        let mut request = IncomeRequest::single_service(
            &request_time,
            None,
            Decimal::from(25000),
            "Разработка сайта",
            Decimal::from(1),
        );
        request.payment_type = PaymentType::Account;
        request.client = IncomeClient {
            contact_phone: String::new(),
            display_name: "ООО Ромашка".into(),
            inn: "7707083893".into(),
            income_type: IncomeType::FromLegalEntity,
        };

        let mut client = client_with_token(&settings, "access-1", 600);
        let receipt_uuid = client.create_income(&request).await.unwrap();
        income.assert_async().await;
        assert_eq!(receipt_uuid, "200abc125");
    }
}
