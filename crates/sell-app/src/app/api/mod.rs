mod app_specific;
mod result_codes;

use salvo::Router;

// Re-export route constants from core
pub use sell_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, APP_ROUTE_COMPONENT, APP_ROUTE_PREFIX,
    RESULT_CODES_ROUTE_COMPONENT, RESULT_CODES_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(result_codes::routes())
}
