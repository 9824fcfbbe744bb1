//! Product catalogue and health endpoints over real HTTP.

#![allow(clippy::unwrap_used)]

use solecraft_client::ClientError;
use solecraft_core::{ProductId, SneakerConfiguration};
use solecraft_integration_tests::TestServer;

#[tokio::test]
async fn test_default_product_selected_on_load() {
    let server = TestServer::start().await;
    let session = server.customizer();

    let product = session.load_default_product().await.unwrap();

    let store = session.store();
    assert_eq!(store.product_id(), Some(product.id));
    assert_eq!(store.product_name(), "Classic Runner");
    assert_eq!(store.base_price().to_string(), "$149.99");
    assert_eq!(store.configuration(), &product.default_config);
}

#[tokio::test]
async fn test_reset_ignores_product_defaults() {
    let server = TestServer::start().await;
    let session = server.customizer();

    let trail = session
        .api()
        .list_products()
        .await
        .unwrap()
        .into_iter()
        .find(|p| p.name == "Trail Blazer")
        .unwrap();
    let mut on_trail = session.save_design("Trail", ["x"]).await.unwrap();
    on_trail.product_id = trail.id;
    on_trail.configuration = trail.default_config.clone();
    session.load_design(&on_trail).await.unwrap();

    session.reset();

    let store = session.store();
    assert_eq!(store.configuration(), &SneakerConfiguration::builtin_default());
    assert_eq!(store.product_name(), "Trail Blazer");
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let server = TestServer::start().await;
    let api = server.client_for(solecraft_core::UserId::generate());

    let err = api.get_product(ProductId::generate()).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = TestServer::start().await;
    let http = reqwest::Client::new();

    let live = http
        .get(server.base_url.join("health").unwrap())
        .send()
        .await
        .unwrap();
    assert!(live.status().is_success());

    let ready = http
        .get(server.base_url.join("health/ready").unwrap())
        .send()
        .await
        .unwrap();
    assert!(ready.status().is_success());
    assert!(ready.headers().contains_key("x-request-id"));
}
