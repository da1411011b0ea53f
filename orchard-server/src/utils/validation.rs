//! Input validation helpers
//!
//! Request DTOs declare their rules with `validator` derives; handlers call
//! [`validate_payload`] to turn violations into a 400 `ValidationFailed`
//! carrying the offending fields. A payload whose only problem is a
//! non-positive price reports `AppleInvalidPrice` instead.

use crate::utils::{AppError, ErrorCode};
use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

// ── Text length limits ──────────────────────────────────────────────

/// Names: apple varieties, customers, contact senders
pub const MAX_NAME_LEN: u64 = 100;

/// Apple descriptions
pub const MAX_DESCRIPTION_LEN: u64 = 500;

/// Phone numbers
pub const MAX_PHONE_LEN: u64 = 20;

/// Contact message bodies
pub const MAX_MESSAGE_LEN: u64 = 5000;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: u64 = 500;

const POSITIVE_PRICE: &str = "positive_price";

/// Prices must be strictly positive
pub fn positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(ValidationError::new(POSITIVE_PRICE)
            .with_message("price must be greater than zero".into()));
    }
    Ok(())
}

/// Validate a payload, mapping failures through [`validation_error`]
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(validation_error)
}

/// Convert `validator` errors into an [`AppError`] with one detail per field
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let price_only = !fields.is_empty()
        && fields
            .iter()
            .flat_map(|(_, violations)| violations.iter())
            .all(|v| v.code == POSITIVE_PRICE);
    let code = if price_only {
        ErrorCode::AppleInvalidPrice
    } else {
        ErrorCode::ValidationFailed
    };

    let mut err = AppError::with_message(
        code,
        format!(
            "Invalid fields: {}",
            fields
                .iter()
                .map(|(field, _)| field.as_ref())
                .collect::<Vec<&str>>()
                .join(", ")
        ),
    );

    for (field, violations) in fields {
        let messages: Vec<String> = violations
            .iter()
            .map(|v| {
                v.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| v.code.to_string())
            })
            .collect();
        err = err.with_detail(field.to_string(), messages);
    }

    err
}
