use salvo::Response;
use salvo::http::StatusCode;
use salvo::prelude::Json;
use salvo::writing::Scribe;
use sell_core::{CoreError, ResultCode, ResultVo, SellError};
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    SellError(#[from] SellError),

    #[error(transparent)]
    CoreError(#[from] CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl From<ResultCode> for AppError {
    fn from(kind: ResultCode) -> Self {
        Self::SellError(SellError::new(kind))
    }
}

impl AppError {
    /// ## Summary
    /// HTTP status used when this error is rendered.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SellError(err) => err.kind().map_or(StatusCode::BAD_REQUEST, status_for),
            Self::CoreError(CoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::CoreError(CoreError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::CoreError(
                CoreError::InvalidConfiguration(_) | CoreError::InvariantViolation(_),
            ) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// ## Summary
    /// Envelope written as the response body.
    ///
    /// Domain errors keep their registry code; core errors have none and
    /// report the HTTP status instead.
    #[must_use]
    pub fn to_result_vo(&self) -> ResultVo<()> {
        match self {
            Self::SellError(err) => ResultVo::from(err),
            Self::CoreError(err) => {
                ResultVo::error(i32::from(self.status_code().as_u16()), err.to_string())
            }
        }
    }
}

/// Maps a registry entry to the HTTP status it is reported with.
#[must_use]
pub const fn status_for(kind: ResultCode) -> StatusCode {
    match kind {
        ResultCode::ProductNotExist | ResultCode::OrderNotExist | ResultCode::OrderdetailNotExist => {
            StatusCode::NOT_FOUND
        }
        ResultCode::ProductStockError
        | ResultCode::OrderStatusError
        | ResultCode::OrderPayStatusError => StatusCode::CONFLICT,
        ResultCode::OrderDetailEmpty => StatusCode::BAD_REQUEST,
        ResultCode::OrderUpdateFail => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl Scribe for AppError {
    fn render(self, res: &mut Response) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Request rejected");
        }

        res.status_code(status);
        res.render(Json(self.to_result_vo()));
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use salvo::{Router, handler};
    use serde_json::{Value, json};

    use super::*;

    #[handler]
    async fn pay_order() -> AppResult<&'static str> {
        Err(ResultCode::OrderPayStatusError.into())
    }

    #[handler]
    async fn cancel_order() -> AppResult<&'static str> {
        Err(SellError::custom(1, "openid must not be empty")?.into())
    }

    #[handler]
    async fn confirm_order() -> AppResult<&'static str> {
        Err(SellError::custom(0, "openid must not be empty")?.into())
    }

    #[test]
    fn test_status_for_every_entry() {
        assert_eq!(status_for(ResultCode::ProductNotExist), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ResultCode::ProductStockError), StatusCode::CONFLICT);
        assert_eq!(status_for(ResultCode::OrderNotExist), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ResultCode::OrderdetailNotExist), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ResultCode::OrderStatusError), StatusCode::CONFLICT);
        assert_eq!(
            status_for(ResultCode::OrderUpdateFail),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(status_for(ResultCode::OrderDetailEmpty), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ResultCode::OrderPayStatusError), StatusCode::CONFLICT);
    }

    #[test]
    fn test_core_error_envelope_uses_status() {
        let err = AppError::from(CoreError::NotFound("result code 99".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_result_vo(),
            ResultVo::error(404, "Not found: result code 99")
        );
    }

    #[test]
    fn test_custom_sell_error_is_bad_request() {
        let err = AppError::from(SellError::custom(1, "bad form").expect("non-zero code"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_result_vo(), ResultVo::error(1, "bad form"));
    }

    #[tokio::test]
    async fn test_render_sell_error() {
        let router = Router::with_path("pay").post(pay_order);

        let mut res = TestClient::post("http://127.0.0.1:5800/pay")
            .send(router)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        let body: Value = res.take_json().await.expect("json body");
        assert_eq!(body, json!({"code": 17, "msg": "Order payment failed"}));
    }

    #[tokio::test]
    async fn test_render_custom_error() {
        let router = Router::with_path("cancel").post(cancel_order);

        let mut res = TestClient::post("http://127.0.0.1:5800/cancel")
            .send(router)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        let body: Value = res.take_json().await.expect("json body");
        assert_eq!(body, json!({"code": 1, "msg": "openid must not be empty"}));
    }

    #[tokio::test]
    async fn test_render_success_code_rejected() {
        let router = Router::with_path("confirm").post(confirm_order);

        let mut res = TestClient::post("http://127.0.0.1:5800/confirm")
            .send(router)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        let body: Value = res.take_json().await.expect("json body");
        assert_eq!(
            body,
            json!({"code": 400, "msg": "Invalid input: code 0 is reserved for success"})
        );
    }
}
