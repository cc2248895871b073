use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use fxdeals_core::deals::DealRequest;

pub const SUCCESS_MESSAGE: &str = "Successful";

/// Wire names of the request fields, in the order their errors are reported.
const FIELD_ORDER: [(&str, &str); 4] = [
    ("unique_id", "uniqueId"),
    ("from_currency", "fromCurrency"),
    ("to_currency", "toCurrency"),
    ("amount", "amount"),
];

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    #[serde(rename = "00")]
    Success,
    #[serde(rename = "01")]
    Failure,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub code: ResponseCode,
    pub message: String,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self {
            code: ResponseCode::Success,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub code: ResponseCode,
    pub messages: Vec<String>,
}

impl ErrorResponse {
    pub fn new(messages: Vec<String>) -> Self {
        Self {
            code: ResponseCode::Failure,
            messages,
        }
    }
}

/// Body of `POST /api/v1/fx-deals/submit`.
///
/// Every field is optional at the JSON level so that missing values surface as
/// field errors instead of parse errors.
#[derive(Deserialize, Validate, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DealRequestBody {
    #[validate(
        required(message = "must not be blank"),
        custom = "not_blank",
        length(max = 63, message = "Should not be more than 63 characters")
    )]
    pub unique_id: Option<String>,

    #[validate(
        required(message = "must not be blank"),
        custom = "not_blank",
        length(max = 3, message = "Should not be more than 3 characters")
    )]
    pub from_currency: Option<String>,

    #[validate(
        required(message = "must not be blank"),
        custom = "not_blank",
        length(max = 3, message = "Should not be more than 3 characters")
    )]
    pub to_currency: Option<String>,

    #[serde(
        default,
        deserialize_with = "rust_decimal::serde::arbitrary_precision_option::deserialize"
    )]
    #[validate(required(message = "must not be null"))]
    pub amount: Option<Decimal>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::from("must not be blank"));
        return Err(err);
    }
    Ok(())
}

/// Flattens validation errors into `<field>: <message>` lines.
pub fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    let by_field = errors.field_errors();
    let mut messages = Vec::new();
    for (rust_name, wire_name) in FIELD_ORDER {
        let field_errors = by_field
            .get(rust_name)
            .or_else(|| by_field.get(wire_name));
        let Some(field_errors) = field_errors else {
            continue;
        };
        for err in field_errors.iter() {
            let text = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());
            messages.push(format!("{}: {}", wire_name, text));
        }
    }
    messages
}

impl TryFrom<DealRequestBody> for DealRequest {
    type Error = Vec<String>;

    fn try_from(body: DealRequestBody) -> Result<Self, Self::Error> {
        body.validate().map_err(|e| field_messages(&e))?;
        // `required` has already rejected every `None`.
        Ok(DealRequest {
            unique_id: body.unique_id.unwrap_or_default(),
            from_currency: body.from_currency.unwrap_or_default(),
            to_currency: body.to_currency.unwrap_or_default(),
            amount: body.amount.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxdeals_core::deals::{CURRENCY_CODE_MAX_LENGTH, UNIQUE_ID_MAX_LENGTH};
    use rust_decimal_macros::dec;

    fn valid_body() -> DealRequestBody {
        DealRequestBody {
            unique_id: Some("deal-1".to_string()),
            from_currency: Some("USD".to_string()),
            to_currency: Some("JOD".to_string()),
            amount: Some(dec!(1500.75)),
        }
    }

    #[test]
    fn test_valid_body_converts_unchanged() {
        let request = DealRequest::try_from(valid_body()).unwrap();
        assert_eq!(request.unique_id, "deal-1");
        assert_eq!(request.from_currency, "USD");
        assert_eq!(request.to_currency, "JOD");
        assert_eq!(request.amount, dec!(1500.75));
    }

    #[test]
    fn test_empty_body_reports_every_field_in_order() {
        let messages = DealRequest::try_from(DealRequestBody::default()).unwrap_err();
        assert_eq!(
            messages,
            vec![
                "uniqueId: must not be blank",
                "fromCurrency: must not be blank",
                "toCurrency: must not be blank",
                "amount: must not be null",
            ]
        );
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let body = DealRequestBody {
            to_currency: Some("  ".to_string()),
            ..valid_body()
        };
        let messages = DealRequest::try_from(body).unwrap_err();
        assert_eq!(messages, vec!["toCurrency: must not be blank"]);
    }

    #[test]
    fn test_unique_id_length_limit() {
        let at_limit = DealRequestBody {
            unique_id: Some("a".repeat(UNIQUE_ID_MAX_LENGTH as usize)),
            ..valid_body()
        };
        assert!(DealRequest::try_from(at_limit).is_ok());

        let over = DealRequestBody {
            unique_id: Some("a".repeat(UNIQUE_ID_MAX_LENGTH as usize + 1)),
            ..valid_body()
        };
        assert_eq!(
            DealRequest::try_from(over).unwrap_err(),
            vec!["uniqueId: Should not be more than 63 characters"]
        );
    }

    #[test]
    fn test_currency_length_limit() {
        let over = DealRequestBody {
            from_currency: Some("U".repeat(CURRENCY_CODE_MAX_LENGTH as usize + 1)),
            ..valid_body()
        };
        assert_eq!(
            DealRequest::try_from(over).unwrap_err(),
            vec!["fromCurrency: Should not be more than 3 characters"]
        );
    }

    #[test]
    fn test_shape_checks_do_not_judge_amount_sign() {
        let body = DealRequestBody {
            amount: Some(dec!(-5)),
            ..valid_body()
        };
        assert!(DealRequest::try_from(body).is_ok());
    }

    #[test]
    fn test_body_deserializes_camel_case_and_nulls() {
        let body: DealRequestBody = serde_json::from_str(
            r#"{"uniqueId":"d-9","fromCurrency":"EUR","toCurrency":null,"amount":10.5}"#,
        )
        .unwrap();
        assert_eq!(body.unique_id.as_deref(), Some("d-9"));
        assert_eq!(body.to_currency, None);
        assert_eq!(body.amount, Some(dec!(10.5)));
    }

    #[test]
    fn test_amount_keeps_every_submitted_digit() {
        for (raw, expected) in [
            ("1234567890.123456789", dec!(1234567890.123456789)),
            ("99999999999999999.99", dec!(99999999999999999.99)),
            ("0.000000000000000001", dec!(0.000000000000000001)),
        ] {
            let json = format!(
                r#"{{"uniqueId":"d-1","fromCurrency":"USD","toCurrency":"EUR","amount":{}}}"#,
                raw
            );
            let body: DealRequestBody = serde_json::from_str(&json).unwrap();
            assert_eq!(body.amount, Some(expected), "amount {}", raw);
        }
    }

    #[test]
    fn test_missing_and_null_amount_are_field_errors() {
        for json in [
            r#"{"uniqueId":"d-1","fromCurrency":"USD","toCurrency":"EUR"}"#,
            r#"{"uniqueId":"d-1","fromCurrency":"USD","toCurrency":"EUR","amount":null}"#,
        ] {
            let body: DealRequestBody = serde_json::from_str(json).unwrap();
            assert_eq!(
                DealRequest::try_from(body).unwrap_err(),
                vec!["amount: must not be null"]
            );
        }
    }

    #[test]
    fn test_envelopes_serialize_with_string_codes() {
        let ok = serde_json::to_value(ApiResponse::success()).unwrap();
        assert_eq!(ok, serde_json::json!({"code": "00", "message": "Successful"}));

        let err = serde_json::to_value(ErrorResponse::new(vec!["x".into()])).unwrap();
        assert_eq!(err, serde_json::json!({"code": "01", "messages": ["x"]}));
    }
}
