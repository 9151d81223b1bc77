//! Read-only catalog of the result-code registry.
//!
//! ## Summary
//! Lets API consumers translate the `code` of an error envelope into its
//! symbolic name and message without hard-coding the table.

use salvo::prelude::Json;
use salvo::{Request, Router, handler};
use sell_core::{CoreError, ResultCode, ResultCodeEntry, ResultVo};

use super::RESULT_CODES_ROUTE_COMPONENT;
use crate::error::AppResult;

/// ## Summary
/// Lists every registry entry in declaration order.
#[handler]
async fn list() -> Json<ResultVo<Vec<ResultCodeEntry>>> {
    let entries = ResultCode::values()
        .iter()
        .map(|entry| entry.entry())
        .collect();

    Json(ResultVo::success(entries))
}

/// ## Summary
/// Returns the registry entry for the `code` path parameter.
///
/// ## Errors
/// `InvalidInput` if the parameter is not an integer, `NotFound` if no entry
/// carries that code.
#[handler]
async fn get(req: &mut Request) -> AppResult<Json<ResultVo<ResultCodeEntry>>> {
    let raw = req
        .param::<String>("code")
        .ok_or(CoreError::InvariantViolation("code path parameter missing"))?;

    let code = raw
        .parse::<i32>()
        .map_err(|_err| CoreError::InvalidInput(format!("'{raw}' is not a result code")))?;

    let entry = ResultCode::try_from(code)?;
    tracing::debug!(code, name = entry.name(), "Resolved result code");

    Ok(Json(ResultVo::success(entry.entry())))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(RESULT_CODES_ROUTE_COMPONENT)
        .get(list)
        .push(Router::with_path("{code}").get(get))
}
