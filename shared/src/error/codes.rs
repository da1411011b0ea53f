//! Unified error codes for the orchard storefront
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Catalog errors (65xx: file upload)
//! - 7xxx: Content and contact errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no line items
    OrderEmpty = 4002,
    /// Quantity below the minimum or off the 5 kg step
    OrderInvalidQuantity = 4003,
    /// Unknown order status
    OrderInvalidStatus = 4004,
    /// Delivery requested but not offered for this order
    DeliveryUnavailable = 4005,
    /// Delivery requested without address or coordinates
    DeliveryDetailsMissing = 4006,
    /// Pickup date/time missing
    PickupRequired = 4007,

    // ==================== 6xxx: Catalog ====================
    /// Apple variety not found
    AppleNotFound = 6001,
    /// Apple variety has an invalid price
    AppleInvalidPrice = 6002,

    // ==================== 65xx: File Upload ====================
    /// File too large
    FileTooLarge = 6501,
    /// Unsupported file format
    UnsupportedFileFormat = 6502,
    /// Invalid/corrupted image file
    InvalidImageFile = 6503,
    /// No file provided in request
    NoFileProvided = 6504,
    /// Empty file provided
    EmptyFile = 6505,
    /// No filename provided
    NoFilename = 6506,
    /// Filename rejected (path traversal, separators)
    InvalidFilename = 6507,
    /// Uploaded file not found
    FileNotFound = 6508,
    /// File storage failed
    FileStorageFailed = 6509,

    // ==================== 7xxx: Content ====================
    /// Unknown site content section
    ContentSectionNotFound = 7001,
    /// Contact message not found
    ContactMessageNotFound = 7101,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Database not connected (development mode)
    DatabaseUnavailable = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Select at least one variety",
            ErrorCode::OrderInvalidQuantity => {
                "Quantity must be at least 10 kg, in 5 kg increments"
            }
            ErrorCode::OrderInvalidStatus => "Invalid order status",
            ErrorCode::DeliveryUnavailable => "Delivery unavailable",
            ErrorCode::DeliveryDetailsMissing => "Delivery address and coordinates are required",
            ErrorCode::PickupRequired => "Pickup date and time are required",

            // Catalog
            ErrorCode::AppleNotFound => "Apple not found",
            ErrorCode::AppleInvalidPrice => "Apple price must be greater than zero",

            // Upload
            ErrorCode::FileTooLarge => "File too large",
            ErrorCode::UnsupportedFileFormat => "Unsupported file format",
            ErrorCode::InvalidImageFile => "Invalid image file",
            ErrorCode::NoFileProvided => "No file provided",
            ErrorCode::EmptyFile => "Empty file provided",
            ErrorCode::NoFilename => "Filename is required",
            ErrorCode::InvalidFilename => "Invalid filename",
            ErrorCode::FileNotFound => "File not found",
            ErrorCode::FileStorageFailed => "Failed to store file",

            // Content
            ErrorCode::ContentSectionNotFound => "Content section not found",
            ErrorCode::ContactMessageNotFound => "Message not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::DatabaseUnavailable => "Database connection failed",
        }
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderEmpty),
            4003 => Ok(ErrorCode::OrderInvalidQuantity),
            4004 => Ok(ErrorCode::OrderInvalidStatus),
            4005 => Ok(ErrorCode::DeliveryUnavailable),
            4006 => Ok(ErrorCode::DeliveryDetailsMissing),
            4007 => Ok(ErrorCode::PickupRequired),

            // Catalog
            6001 => Ok(ErrorCode::AppleNotFound),
            6002 => Ok(ErrorCode::AppleInvalidPrice),

            // Upload
            6501 => Ok(ErrorCode::FileTooLarge),
            6502 => Ok(ErrorCode::UnsupportedFileFormat),
            6503 => Ok(ErrorCode::InvalidImageFile),
            6504 => Ok(ErrorCode::NoFileProvided),
            6505 => Ok(ErrorCode::EmptyFile),
            6506 => Ok(ErrorCode::NoFilename),
            6507 => Ok(ErrorCode::InvalidFilename),
            6508 => Ok(ErrorCode::FileNotFound),
            6509 => Ok(ErrorCode::FileStorageFailed),

            // Content
            7001 => Ok(ErrorCode::ContentSectionNotFound),
            7101 => Ok(ErrorCode::ContactMessageNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::DatabaseUnavailable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
