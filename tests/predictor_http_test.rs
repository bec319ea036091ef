use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Json;
use btcsim::domain::errors::PredictorError;
use btcsim::domain::features::FeatureVector;
use btcsim::domain::ports::{MarketDataSource, Predictor};
use btcsim::infrastructure::HttpPredictionClient;
use btcsim::infrastructure::core::HttpClientFactory;
use serde_json::{Value, json};
use std::time::Duration;

fn current_data() -> Value {
    json!({
        "sma_7": 42000.0,
        "sma_30": 41000.0,
        "rsi": 55.43,
        "price_lag_1": 43100.0,
        "price_lag_7": 42500.0,
        "volatility": 120.5,
        "current_price": 43250.75
    })
}

// Echoes yesterday's price plus a fixed move so the request body is observable
async fn predict(Json(features): Json<FeatureVector>) -> Json<Value> {
    Json(json!({
        "predicted_price": features.price_lag_1 + 500.0,
        "currency": "USD"
    }))
}

fn backend() -> Router {
    Router::new()
        .route("/current-data", get(|| async { Json(current_data()) }))
        .route("/predict", post(predict))
}

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fake backend");
    });
    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> HttpPredictionClient {
    let http = HttpClientFactory::create_client(Duration::from_secs(5), 0);
    HttpPredictionClient::new(base_url, http).expect("valid base url")
}

#[tokio::test]
async fn test_current_data_round_trip() {
    let base = spawn_backend(backend()).await;
    let client = client_for(&base);

    let snapshot = client.current_snapshot().await.expect("snapshot");

    assert_eq!(snapshot.current_price, 43250.75);
    assert_eq!(snapshot.features.sma_7, 42000.0);
    assert_eq!(snapshot.features.sma_30, 41000.0);
    assert_eq!(snapshot.features.rsi, 55.43);
    assert_eq!(snapshot.features.price_lag_7, 42500.0);
    assert_eq!(snapshot.features.volatility, 120.5);
}

#[tokio::test]
async fn test_predict_posts_feature_vector() {
    let base = spawn_backend(backend()).await;
    let client = client_for(&base);

    let features = FeatureVector::default().with_price_lag_1(44000.0);
    let predicted = client.predict(&features).await.expect("prediction");

    assert_eq!(predicted, 44500.0);
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let base = spawn_backend(Router::new().nest("/api", backend())).await;
    let client = client_for(&format!("{}/api", base));

    assert!(client.current_data_url().path().ends_with("/api/current-data"));
    let predicted = client
        .predict(&FeatureVector::default().with_price_lag_1(100.0))
        .await
        .expect("prediction");
    assert_eq!(predicted, 600.0);
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let router = Router::new().route(
        "/predict",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model not loaded") }),
    );
    let base = spawn_backend(router).await;
    let client = client_for(&base);

    let err = client
        .predict(&FeatureVector::default())
        .await
        .expect_err("500 must fail");

    match err {
        PredictorError::Status { status, .. } => assert_eq!(status, 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_field_maps_to_decode() {
    let router = Router::new().route(
        "/predict",
        post(|| async { Json(json!({ "price": 1.0 })) }),
    );
    let base = spawn_backend(router).await;
    let client = client_for(&base);

    let err = client
        .predict(&FeatureVector::default())
        .await
        .expect_err("bad body must fail");

    assert!(matches!(err, PredictorError::Decode { .. }), "{:?}", err);
}

#[tokio::test]
async fn test_unreachable_backend_maps_to_request() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = client_for(&format!("http://{}", addr));
    let err = client
        .current_snapshot()
        .await
        .expect_err("nothing listening");

    assert!(matches!(err, PredictorError::Request { .. }), "{:?}", err);
}
