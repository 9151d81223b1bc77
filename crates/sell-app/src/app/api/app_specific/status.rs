use salvo::prelude::Json;
use salvo::{Depot, Router, handler};
use sell_core::{ResultCode, ResultVo};
use serde::Serialize;

use crate::config::get_config_from_depot;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct AppStatus {
    bind_addr: String,
    logging_level: String,
    result_codes: usize,
}

/// ## Summary
/// Reports the running configuration and the size of the result-code registry.
///
/// ## Errors
/// Fails with an invariant violation if `ConfigHandler` is not installed.
#[handler]
async fn status(depot: &mut Depot) -> AppResult<Json<ResultVo<AppStatus>>> {
    let settings = get_config_from_depot(depot)?;

    Ok(Json(ResultVo::success(AppStatus {
        bind_addr: settings.server.bind_addr(),
        logging_level: settings.logging.level.clone(),
        result_codes: ResultCode::values().len(),
    })))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("status").get(status)
}
