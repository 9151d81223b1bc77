//! Core vocabulary of the sell backend: the result-code registry, the domain
//! error built from it, and the JSON envelope used to report both.

pub mod config;
pub mod constants;
pub mod error;
pub mod response;
pub mod result_code;

pub use error::{CoreError, CoreResult, SellError, SellResult};
pub use response::ResultVo;
pub use result_code::{ResultCode, ResultCodeEntry};
