/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";
pub const APP_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", APP_ROUTE_COMPONENT);

pub const RESULT_CODES_ROUTE_COMPONENT: &str = "result-codes";
pub const RESULT_CODES_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", RESULT_CODES_ROUTE_COMPONENT);

/// Envelope code reported for successful responses. Never a registry code.
pub const SUCCESS_CODE: i32 = 0;
pub const SUCCESS_MESSAGE: &str = "Success";
