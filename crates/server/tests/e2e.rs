use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use models::Consignment;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use service::consignment::ConsignmentRepository;
use service::errors::ServiceError;
use tokio::net::TcpListener;

use server::routes::shipping::{CREATE_CONSIGNMENT_PATH, GET_CONSIGNMENTS_PATH};
use server::{startup, ServerState};

struct TestApp {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn start_server(state: ServerState) -> anyhow::Result<TestApp> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    let handle = tokio::spawn(async move {
        if let Err(e) = startup::serve(listener, state, std::future::pending()).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url, handle })
}

async fn create(c: &reqwest::Client, app: &TestApp, body: serde_json::Value) -> anyhow::Result<serde_json::Value> {
    let res = c.post(app.url(CREATE_CONSIGNMENT_PATH)).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(res.json().await?)
}

async fn list(c: &reqwest::Client, app: &TestApp, body: serde_json::Value) -> anyhow::Result<Vec<Consignment>> {
    let res = c.post(app.url(GET_CONSIGNMENTS_PATH)).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    Ok(serde_json::from_value(body["consignments"].clone())?)
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let res = reqwest::get(app.url("/health")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_echoes_consignment() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let c = reqwest::Client::new();
    let consignment = json!({
        "id": "c-1",
        "description": "This is a test consignment",
        "weight": 550,
        "containers": [
            {"customer_id": "cust001", "user_id": "user001", "origin": "Manchester, United Kingdom"}
        ],
        "vessel_id": "vessel001"
    });

    let body = create(&c, &app, consignment).await?;
    assert_eq!(body["created"], true);
    assert_eq!(body["consignment"]["id"], "c-1");
    assert_eq!(body["consignment"]["weight"], 550);
    assert_eq!(body["consignment"]["containers"][0]["origin"], "Manchester, United Kingdom");
    assert_eq!(body["consignment"]["containers"][0]["id"], "");
    Ok(())
}

#[tokio::test]
async fn e2e_get_with_no_creates_is_empty() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let c = reqwest::Client::new();
    assert!(list(&c, &app, json!({})).await?.is_empty());

    // no body at all
    let res = c.post(app.url(GET_CONSIGNMENTS_PATH)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["consignments"], json!([]));
    assert_eq!(body["created"], false);
    Ok(())
}

#[tokio::test]
async fn e2e_listing_keeps_creation_order() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let c = reqwest::Client::new();
    create(&c, &app, json!({"id": "A"})).await?;
    create(&c, &app, json!({"id": "B"})).await?;

    let all = list(&c, &app, json!({})).await?;
    assert_eq!(all, vec![Consignment::with_id("A"), Consignment::with_id("B")]);
    Ok(())
}

#[tokio::test]
async fn e2e_filters_in_get_request_are_ignored() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let c = reqwest::Client::new();
    create(&c, &app, json!({"id": "A", "vessel_id": "v1"})).await?;
    create(&c, &app, json!({"id": "B", "vessel_id": "v2"})).await?;

    let plain = list(&c, &app, json!({})).await?;
    let filtered = list(&c, &app, json!({"vessel_id": "v1", "limit": 1})).await?;
    assert_eq!(plain, filtered);
    assert_eq!(filtered.len(), 2);
    Ok(())
}

#[tokio::test]
async fn e2e_duplicate_records_are_accepted() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let c = reqwest::Client::new();
    create(&c, &app, json!({"id": "same"})).await?;
    create(&c, &app, json!({"id": "same"})).await?;
    create(&c, &app, json!({})).await?;
    assert_eq!(list(&c, &app, json!({})).await?.len(), 3);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn e2e_hundred_concurrent_creates() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let c = reqwest::Client::new();

    let mut handles = Vec::new();
    for i in 0..100 {
        let c = c.clone();
        let url = app.url(CREATE_CONSIGNMENT_PATH);
        handles.push(tokio::spawn(async move {
            c.post(url).json(&json!({"id": format!("id-{i}")})).send().await
        }));
    }
    for h in handles {
        assert_eq!(h.await??.status(), HttpStatusCode::OK);
    }

    let all = list(&c, &app, json!({})).await?;
    assert_eq!(all.len(), 100);
    let mut ids: Vec<String> = all.into_iter().map(|c| c.id).collect();
    ids.sort();
    let mut expected: Vec<String> = (0..100).map(|i| format!("id-{i}")).collect();
    expected.sort();
    assert_eq!(ids, expected);
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_create_is_rejected() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let c = reqwest::Client::new();
    let res = c
        .post(app.url(CREATE_CONSIGNMENT_PATH))
        .header("content-type", "application/json")
        .body("{\"id\": ")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "INVALID_ARGUMENT");
    assert!(list(&c, &app, json!({})).await?.is_empty());
    Ok(())
}

struct BrokenStore;

#[async_trait]
impl ConsignmentRepository for BrokenStore {
    async fn create(&self, _consignment: Consignment) -> Result<Consignment, ServiceError> {
        Err(ServiceError::storage("store unavailable"))
    }

    async fn get_all(&self) -> Vec<Consignment> {
        Vec::new()
    }
}

#[tokio::test]
async fn e2e_store_failure_reports_internal() -> anyhow::Result<()> {
    let app = start_server(ServerState::new(Arc::new(BrokenStore))).await?;
    let c = reqwest::Client::new();
    let res = c.post(app.url(CREATE_CONSIGNMENT_PATH)).json(&json!({"id": "A"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "INTERNAL");
    assert_eq!(body["message"], "storage error: store unavailable");

    // listing still succeeds
    assert!(list(&c, &app, json!({})).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_reflection_describes_schema() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;

    let res = reqwest::get(app.url("/reflection/openapi.json")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc = res.json::<serde_json::Value>().await?;
    assert!(doc["paths"][CREATE_CONSIGNMENT_PATH]["post"].is_object());
    assert!(doc["paths"][GET_CONSIGNMENTS_PATH]["post"].is_object());
    assert!(doc["components"]["schemas"]["ConsignmentDoc"].is_object());
    assert!(doc["components"]["schemas"]["ContainerDoc"].is_object());

    let res = reqwest::get(app.url("/reflection/services")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(
        body,
        json!({"services": [{
            "name": "shipping.ShippingService",
            "methods": ["CreateConsignment", "GetConsignments"]
        }]})
    );
    Ok(())
}
