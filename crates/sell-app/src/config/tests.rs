//! Tests for configuration module.

use salvo::http::StatusCode;
use salvo::test::{ResponseExt, TestClient};
use salvo::{Depot, Router, handler};

use super::*;

fn test_settings() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    }
}

#[handler]
async fn bind_addr(depot: &mut Depot) -> AppResult<String> {
    let settings = get_config_from_depot(depot)?;
    Ok(settings.server.bind_addr())
}

#[test_log::test(tokio::test)]
async fn test_config_handler_injects_settings() {
    tracing::debug!("Testing config injection");

    let router = Router::new()
        .hoop(ConfigHandler::new(test_settings()))
        .push(Router::with_path("addr").get(bind_addr));

    let mut res = TestClient::get("http://127.0.0.1:5800/addr")
        .send(router)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::OK));
    assert_eq!(
        res.take_string().await.expect("body"),
        "127.0.0.1:5800"
    );
}

#[tokio::test]
async fn test_missing_config_is_invariant_violation() {
    let router = Router::with_path("addr").get(bind_addr);

    let res = TestClient::get("http://127.0.0.1:5800/addr")
        .send(router)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[test]
fn test_settings_clone() {
    let settings = test_settings();
    let cloned = settings.clone();

    assert_eq!(cloned.server.port, settings.server.port);
    assert_eq!(cloned.logging.level, "debug");
    assert!(format!("{cloned:?}").contains("LoggingConfig"));
}
