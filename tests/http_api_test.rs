use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use interactome::config::DashboardConfig;
use interactome::http::{router, AppState};
use interactome::kegg::StaticPathwaySource;
use interactome::pipeline::NetworkPipeline;
use interactome::string_db::{parse_interactions, ScoreScale, StaticInteractionSource};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const ALZHEIMER_EXCERPT: &str = include_str!("fixtures/hsa05010_excerpt.txt");
const STRING_NETWORK: &str = include_str!("fixtures/string_network.json");

fn app() -> Router {
    let body: Value = serde_json::from_str(STRING_NETWORK).unwrap();
    let pipeline = NetworkPipeline::new(
        Arc::new(DashboardConfig::default()),
        Arc::new(StaticPathwaySource::new().with_record("hsa05010", ALZHEIMER_EXCERPT)),
        Arc::new(StaticInteractionSource::new(parse_interactions(&body, ScoreScale::Unit))),
    );
    router(AppState { pipeline: Arc::new(pipeline) })
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_network(payload: Value) -> (StatusCode, Value) {
    let request = Request::post("/api/network")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(request).await
}

#[tokio::test]
async fn test_status() {
    let (status, body) = get("/api/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["diseases"], 4);
}

#[tokio::test]
async fn test_disease_catalog() {
    let (status, body) = get("/api/diseases").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["pathway_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["hsa05010", "hsa05016", "hsa05012", "hsa04930"]);
}

#[tokio::test]
async fn test_gene_list() {
    let (status, body) = get("/api/genes/hsa05010").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 9);
    assert_eq!(body["genes"][0]["symbol"], "APP");
}

#[tokio::test]
async fn test_gene_list_rejects_bad_id() {
    let (status, body) = get("/api/genes/hsa-05010").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_network_by_disease_name() {
    let (status, body) = post_network(json!({ "disease": "alzheimer's" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pathway_id"], "hsa05010");
    assert_eq!(body["metrics"]["interaction_count"], 6);
    assert_eq!(body["nodes"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_network_with_overlay() {
    let (status, body) = post_network(json!({
        "disease": "hsa05010",
        "confidence": 900,
        "overlay_csv": "Symbol,LogFC\nAPP,3.1\n",
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["confidence"], 900);

    let app = body["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|n| n["symbol"] == "APP")
        .unwrap();
    assert_eq!(app["color"], "#FF4B4B");
}

#[tokio::test]
async fn test_unknown_disease_is_not_found() {
    let (status, body) = post_network(json!({ "disease": "Gout" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Gout"));
}

#[tokio::test]
async fn test_bad_overlay_is_unprocessable() {
    let (status, _) = post_network(json!({
        "disease": "hsa05010",
        "overlay_csv": "Gene,Fold\nAPP,2.0\n",
    }))
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_record_is_bad_gateway() {
    // Catalogued, but the source has no record for it
    let (status, body) = post_network(json!({ "disease": "Huntington's" })).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("hsa05016"));
}

#[tokio::test]
async fn test_out_of_range_confidence_is_bad_request() {
    let (status, _) = post_network(json!({ "disease": "hsa05010", "confidence": 5000 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unrepresentable_overrides_are_bad_request() {
    for payload in [
        json!({ "disease": "hsa05010", "confidence": 70000 }),
        json!({ "disease": "hsa05010", "confidence": -1 }),
        json!({ "disease": "hsa05010", "spacing": "wide" }),
        json!({ "confidence": 400 }),
    ] {
        let (status, body) = post_network(payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", payload);
        assert!(body["error"].is_string(), "{}", payload);
    }
}

#[tokio::test]
async fn test_unbounded_spacing_is_bad_request() {
    let (status, body) = post_network(json!({ "disease": "hsa05010", "spacing": 1e200 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("spacing"));
}

#[tokio::test]
async fn test_malformed_json_body_is_bad_request() {
    let request = Request::post("/api/network")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
