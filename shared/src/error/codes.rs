//! Unified error codes for the variant engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Product and variant errors
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
    /// Operation completed successfully
    Success = 0,

    // ==================== 6xxx: Product ====================
    /// Variant price is not a valid decimal
    VariantInvalidPrice = 6202,
    /// Variant quantity is not a valid integer
    VariantInvalidQuantity = 6203,
    /// Variant weight is not a valid decimal
    VariantInvalidWeight = 6204,
    /// Two variants share the same SKU
    VariantDuplicateSku = 6205,
    /// Too many option groups
    OptionGroupLimitReached = 6301,
    /// Two option groups share the same name
    OptionGroupNameDuplicate = 6302,
    /// Two values of one option group share the same text
    OptionValueDuplicate = 6303,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",

            // Product
            ErrorCode::VariantInvalidPrice => "Variant has invalid price",
            ErrorCode::VariantInvalidQuantity => "Variant has invalid quantity",
            ErrorCode::VariantInvalidWeight => "Variant has invalid weight",
            ErrorCode::VariantDuplicateSku => "Variant SKU is used more than once",
            ErrorCode::OptionGroupLimitReached => "Option group limit reached",
            ErrorCode::OptionGroupNameDuplicate => "Option group name already exists",
            ErrorCode::OptionValueDuplicate => "Option value already exists in this group",

            // System
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),

            // Product
            6202 => Ok(ErrorCode::VariantInvalidPrice),
            6203 => Ok(ErrorCode::VariantInvalidQuantity),
            6204 => Ok(ErrorCode::VariantInvalidWeight),
            6205 => Ok(ErrorCode::VariantDuplicateSku),
            6301 => Ok(ErrorCode::OptionGroupLimitReached),
            6302 => Ok(ErrorCode::OptionGroupNameDuplicate),
            6303 => Ok(ErrorCode::OptionValueDuplicate),

            // System
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
