//! Domain errors raised by the product and order services.

use thiserror::Error;

use crate::constants::SUCCESS_CODE;
use crate::error::{CoreError, CoreResult};
use crate::result_code::ResultCode;

/// A domain failure carrying the code and message reported to API consumers.
///
/// Usually built from a [`ResultCode`]; [`SellError::custom`] covers outcomes
/// that have no registry entry, such as form validation messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SellError {
    code: i32,
    message: String,
    kind: Option<ResultCode>,
}

impl SellError {
    /// ## Summary
    /// Builds the error reported for a registry entry.
    #[must_use]
    pub fn new(kind: ResultCode) -> Self {
        Self {
            code: kind.code(),
            message: kind.message().to_owned(),
            kind: Some(kind),
        }
    }

    /// ## Summary
    /// Builds an error with an arbitrary code and message.
    ///
    /// Codes are not checked against the registry; `kind` stays empty even
    /// when `code` happens to match an entry.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidInput` if `code` is the success code, which
    /// no error envelope may carry.
    pub fn custom(code: i32, message: impl Into<String>) -> CoreResult<Self> {
        if code == SUCCESS_CODE {
            return Err(CoreError::InvalidInput(format!(
                "code {SUCCESS_CODE} is reserved for success"
            )));
        }

        Ok(Self {
            code,
            message: message.into(),
            kind: None,
        })
    }

    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The registry entry this error was built from, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<ResultCode> {
        self.kind
    }
}

impl From<ResultCode> for SellError {
    fn from(kind: ResultCode) -> Self {
        Self::new(kind)
    }
}

pub type SellResult<T> = std::result::Result<T, SellError>;
