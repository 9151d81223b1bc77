//! JSON envelope returned by every API endpoint.

use serde::{Deserialize, Serialize};

use crate::constants::{SUCCESS_CODE, SUCCESS_MESSAGE};
use crate::error::SellError;

/// `{"code": .., "msg": .., "data": ..}`; `data` is omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultVo<T> {
    pub code: i32,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResultVo<T> {
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: SUCCESS_MESSAGE.to_owned(),
            data: Some(data),
        }
    }

    #[must_use]
    pub fn success_empty() -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: SUCCESS_MESSAGE.to_owned(),
            data: None,
        }
    }

    #[must_use]
    pub fn error(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl From<&SellError> for ResultVo<()> {
    fn from(err: &SellError) -> Self {
        Self::error(err.code(), err.message())
    }
}
