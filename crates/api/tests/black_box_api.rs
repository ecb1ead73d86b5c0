use mercadofacil_infra::AppConfig;
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with(AppConfig::default()).await
    }

    async fn spawn_with(config: AppConfig) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = mercadofacil_api::app::build_app(&config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn valid_body() -> serde_json::Value {
    json!({
        "barcode": "7899137500117",
        "name": "Produto Dez Alterado",
        "manufacturer": "Empresa Dez",
        "price": 500.0,
    })
}

#[tokio::test]
async fn health_is_public_and_tagged_with_request_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let minted = res.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(minted).is_ok());

    let res = client
        .get(srv.url("/health"))
        .header("x-request-id", "caller-supplied-id")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "caller-supplied-id");
}

#[tokio::test]
async fn blank_request_id_is_replaced() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .get(srv.url("/v1/produtos/10"))
        .header("x-request-id", "   ")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let minted = res.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(minted).is_ok(), "got {minted:?}");
}

#[tokio::test]
async fn seeded_product_is_served() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(srv.url("/v1/produtos/10")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["id"], 10);
    assert_eq!(body["barcode"], "7899137500100");
    assert_eq!(body["name"], "Produto Dez");
    assert_eq!(body["manufacturer"], "Empresa Dez");
    assert_eq!(body["price"], 450.0);
}

#[tokio::test]
async fn valid_alteration_returns_stored_product() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(srv.url("/v1/produtos/10"))
        .json(&valid_body())
        .send()
        .await
        .unwrap();
    if res.status() != StatusCode::OK {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        panic!("expected 200 OK from alter, got {status} body={body}");
    }
    let altered: serde_json::Value = res.json().await.unwrap();
    assert_eq!(altered["id"], 10);
    assert_eq!(altered["barcode"], "7899137500117");
    assert_eq!(altered["price"], 500.0);

    let fetched: serde_json::Value = client
        .get(srv.url("/v1/produtos/10"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, altered);
}

#[tokio::test]
async fn alteration_accepts_portuguese_field_names() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(srv.url("/v1/produtos/10"))
        .json(&json!({
            "codigoBarra": "7899137500117",
            "nome": "Produto Dez",
            "fabricante": "Empresa Dez",
            "preco": 99.9,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["price"], 99.9);
}

#[tokio::test]
async fn invalid_alterations_are_rejected_with_exact_message() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let cases = [
        (json!({ "name": "x", "manufacturer": "y", "price": 1.0 }), "missing_attributes", "Atributos faltando!"),
        (json!({ "barcode": "7899137500117", "name": "", "manufacturer": "y", "price": 1.0 }), "missing_attributes", "Atributos faltando!"),
        (json!({ "barcode": "7899137500117", "name": "x", "manufacturer": "y", "price": 0.0 }), "invalid_price", "Preco invalido!"),
        (json!({ "barcode": "7899137500117", "name": "x", "manufacturer": "y", "price": -3.5 }), "invalid_price", "Preco invalido!"),
        (json!({ "barcode": "78991375001170", "name": "x", "manufacturer": "y", "price": 1.0 }), "barcode_too_long", "Codigo de barra com mais de 13 numeros!"),
        (json!({ "barcode": "7899137500104", "name": "x", "manufacturer": "y", "price": 1.0 }), "invalid_check_digit", "Codigo de barra com digito verificador incorreto!"),
        (json!({ "barcode": "9879137500104", "name": "x", "manufacturer": "y", "price": 1.0 }), "invalid_country_code", "Codigo de barra com país errado"),
        (json!({ "barcode": "7895137500104", "name": "x", "manufacturer": "y", "price": 1.0 }), "invalid_manufacturer_code", "Codigo de barra com empresa errada!"),
    ];

    for (body, code, message) in cases {
        let res = client
            .put(srv.url("/v1/produtos/10"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body={body}");
        let err: serde_json::Value = res.json().await.unwrap();
        assert_eq!(err["error"], code, "body={body}");
        assert_eq!(err["message"], message, "body={body}");
    }

    // Nothing above reached the store.
    let stored: serde_json::Value = client
        .get(srv.url("/v1/produtos/10"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stored["barcode"], "7899137500100");
    assert_eq!(stored["name"], "Produto Dez");
}

#[tokio::test]
async fn unknown_and_malformed_ids() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(srv.url("/v1/produtos/999"))
        .json(&valid_body())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.get(srv.url("/v1/produtos/999")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.get(srv.url("/v1/produtos/abc")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "invalid_id");
}

#[tokio::test]
async fn create_list_delete_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Create
    let res = client
        .post(srv.url("/v1/produtos"))
        .json(&json!({ "nome": "Rascunho", "preco": 0.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created["id"], 11);
    assert_eq!(created["name"], "Rascunho");

    // List
    let items: Vec<serde_json::Value> = client
        .get(srv.url("/v1/produtos"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(items.iter().map(|p| p["id"].as_u64().unwrap()).collect::<Vec<_>>(), vec![10, 11]);

    // Delete
    let res = client.delete(srv.url("/v1/produtos/11")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = client.delete(srv.url("/v1/produtos/11")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unseeded_store_starts_empty() {
    let srv = TestServer::spawn_with(AppConfig {
        seed_fixtures: false,
        ..AppConfig::default()
    })
    .await;

    let items: Vec<serde_json::Value> = reqwest::get(srv.url("/v1/produtos"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(items.is_empty());

    let res = reqwest::get(srv.url("/v1/produtos/10")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
