// Testes contra um Postgres real: `#[sqlx::test]` cria um banco novo por
// teste (a partir de DATABASE_URL) e aplica ./migrations antes de rodar.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use controle_proc::{config::AppState, routes};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

fn app(pool: &PgPool) -> Router {
    routes::app(AppState::from_pool(pool.clone()))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn seed_product(pool: &PgPool, nome: &str, quantidade: i32) -> i32 {
    sqlx::query_scalar("INSERT INTO produtos (nome, quantidade) VALUES ($1, $2) RETURNING id")
        .bind(nome)
        .bind(quantidade)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn quantity_of(pool: &PgPool, id: i32) -> Option<i32> {
    sqlx::query_scalar("SELECT quantidade FROM produtos WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

// =============================================================================
//  ESTOQUE
// =============================================================================

#[sqlx::test]
async fn created_product_shows_up_in_stock_listing(pool: PgPool) {
    let app = app(&pool);

    let (status, created) = call(
        &app,
        Method::POST,
        "/api/produtos",
        Some(json!({
            "nome": "Parafuso 6mm",
            "categoria": "Ferragens",
            "quantidade": 120,
            "preco": 0.35,
            "dta": "2024-03-10",
            "fornecedor": "Metalúrgica Silva"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["id"].is_i64());
    assert_eq!(created["nome"], "Parafuso 6mm");

    let (status, list) = call(&app, Method::GET, "/api/estoque", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], created["id"]);
    assert_eq!(list[0]["quantidade"], 120);
    assert_eq!(list[0]["fornecedor"], "Metalúrgica Silva");
}

#[sqlx::test]
async fn name_filter_ignores_case(pool: PgPool) {
    seed_product(&pool, "Parafuso 6mm", 10).await;
    seed_product(&pool, "Porca 6mm", 10).await;
    let app = app(&pool);

    let (status, list) = call(&app, Method::GET, "/api/estoque?nome=PARAF", None).await;

    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["nome"], "Parafuso 6mm");

    // '%' é literal, não curinga
    let (_, list) = call(&app, Method::GET, "/api/estoque?nome=%25", None).await;
    assert_eq!(list.as_array().map(Vec::len), Some(0));
}

#[sqlx::test]
async fn missing_product_update_and_delete_are_404(pool: PgPool) {
    let app = app(&pool);

    let (status, body) = call(
        &app,
        Method::PUT,
        "/api/estoque/999",
        Some(json!({ "nome": "X", "quantidade": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Produto não encontrado");

    let (status, _) = call(&app, Method::DELETE, "/api/estoque/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn entry_adds_to_stock(pool: PgPool) {
    let id = seed_product(&pool, "Parafuso 6mm", 10).await;
    let app = app(&pool);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/entradas",
        Some(json!({
            "produto_nome": "Parafuso 6mm",
            "quantidade": 5,
            "data_entrada": "2024-03-10",
            "fornecedor": "ACME",
            "fatura": "NF-123"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["entry"]["quantidade"], 5);
    assert_eq!(body["updatedProduct"]["quantidade"], 15);
    assert_eq!(quantity_of(&pool, id).await, Some(15));
}

#[sqlx::test]
async fn entry_for_unknown_product_is_404_and_writes_nothing(pool: PgPool) {
    let app = app(&pool);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/entradas",
        Some(json!({ "produto_nome": "Inexistente", "quantidade": 5 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Produto não encontrado");
    assert_eq!(count(&pool, "entradas").await, 0);
}

#[sqlx::test]
async fn exit_up_to_stock_succeeds(pool: PgPool) {
    let id = seed_product(&pool, "Parafuso 6mm", 10).await;
    let app = app(&pool);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/saidas",
        Some(json!({ "produto_nome": "Parafuso 6mm", "quantidade": 10, "recebedor": "Obra 3" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["exit"]["quantidade"], 10);
    assert_eq!(body["updatedProduct"]["quantidade"], 0);
    assert_eq!(quantity_of(&pool, id).await, Some(0));
}

#[sqlx::test]
async fn exit_above_stock_is_400_and_leaves_stock_untouched(pool: PgPool) {
    let id = seed_product(&pool, "Parafuso 6mm", 10).await;
    let app = app(&pool);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/saidas",
        Some(json!({ "produto_nome": "Parafuso 6mm", "quantidade": 11 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Quantidade insuficiente em estoque");
    assert_eq!(quantity_of(&pool, id).await, Some(10));
    assert_eq!(count(&pool, "saidas").await, 0);
}

// =============================================================================
//  USUÁRIOS
// =============================================================================

#[sqlx::test]
async fn login_requires_exact_credentials(pool: PgPool) {
    let app = app(&pool);

    let (status, created) = call(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "nome": "Maria Souza", "email": "maria@empresa.com", "senha": "s3nha" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.get("senha").is_none());

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({ "email": "maria@empresa.com", "senha": "s3nha" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "nome": "Maria Souza" }));

    for (email, senha) in [
        ("maria@empresa.com", "S3NHA"),
        ("maria@empresa.com", "s3nha "),
        ("outra@empresa.com", "s3nha"),
    ] {
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/login",
            Some(json!({ "email": email, "senha": senha })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{email} / {senha}");
        assert_eq!(body["message"], "Usuário ou senha inválidos");
    }
}

#[sqlx::test]
async fn legacy_plaintext_password_still_logs_in(pool: PgPool) {
    sqlx::query("INSERT INTO users (nome, email, senha) VALUES ('João', 'joao@empresa.com', 'antiga')")
        .execute(&pool)
        .await
        .unwrap();
    let app = app(&pool);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({ "email": "joao@empresa.com", "senha": "antiga" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nome"], "João");

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({ "email": "joao@empresa.com", "senha": "Antiga" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
//  PEDIDOS
// =============================================================================

#[sqlx::test]
async fn order_is_stored_with_all_items(pool: PgPool) {
    let app = app(&pool);

    let (status, created) = call(
        &app,
        Method::POST,
        "/api/pedidos",
        Some(json!({
            "cliente": "Loja Central",
            "endereco": "Rua A, 10",
            "items": [
                { "nome_produto": "Parafuso 6mm", "quantidade": 100, "preco": 0.35 },
                { "nome_produto": "Porca 6mm", "quantidade": 100, "preco": 0.20 },
                { "nome_produto": "Arruela", "quantidade": 50, "preco": 0.10 }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "Pedido cadastrado com sucesso!");
    let id = created["id"].as_i64().unwrap();

    let (status, detail) = call(&app, Method::GET, &format!("/api/pedidos/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["cliente"], "Loja Central");
    assert_eq!(detail["status"], "pendente");
    assert_eq!(detail["items"].as_array().map(Vec::len), Some(3));
}

#[sqlx::test]
async fn failing_item_rolls_back_the_whole_order(pool: PgPool) {
    let app = app(&pool);

    // NUMERIC(12, 2) estoura no segundo item
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/pedidos",
        Some(json!({
            "cliente": "Loja Central",
            "endereco": "Rua A, 10",
            "items": [
                { "nome_produto": "Parafuso 6mm", "quantidade": 1, "preco": 1.0 },
                { "nome_produto": "Caro demais", "quantidade": 1, "preco": 100000000000.0 }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Erro no servidor");
    assert_eq!(count(&pool, "pedidos").await, 0);
    assert_eq!(count(&pool, "itens_pedido").await, 0);
}

#[sqlx::test]
async fn deleting_missing_order_is_404_with_error_field(pool: PgPool) {
    let app = app(&pool);

    let (status, body) = call(&app, Method::DELETE, "/api/pedidos/4242", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Pedido não encontrado" }));
}

#[sqlx::test]
async fn deleting_order_removes_its_items(pool: PgPool) {
    let app = app(&pool);
    let (_, created) = call(
        &app,
        Method::POST,
        "/api/pedidos",
        Some(json!({
            "cliente": "Loja Central",
            "items": [{ "nome_produto": "Parafuso 6mm", "quantidade": 1, "preco": 1.0 }]
        })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = call(&app, Method::DELETE, &format!("/api/pedidos/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Pedido excluído com sucesso");
    assert_eq!(count(&pool, "itens_pedido").await, 0);

    let (status, _) = call(&app, Method::GET, &format!("/api/pedidos/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
//  CANDIDATOS
// =============================================================================

async fn seed_candidate(pool: &PgPool) -> i32 {
    sqlx::query_scalar("INSERT INTO candidatos (nome, funcao) VALUES ('Ana', 'Analista') RETURNING id")
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn step_of(pool: &PgPool, id: i32, column: &str) -> (Option<String>, Option<DateTime<Utc>>) {
    sqlx::query_as(&format!("SELECT {column}, {column}_date FROM candidatos WHERE id = $1"))
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
async fn passos_route_stores_the_sent_status_and_date(pool: PgPool) {
    let id = seed_candidate(&pool).await;
    let app = app(&pool);

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/candidatos/{id}/passos/entrevista_rh"),
        Some(json!({ "status": "reprovado" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Entrevista com RH atualizada com sucesso");
    let (value, date) = step_of(&pool, id, "entrevista_rh").await;
    assert_eq!(value.as_deref(), Some("reprovado"));
    assert!(date.is_some());
}

#[sqlx::test]
async fn step_route_only_touches_the_status_column(pool: PgPool) {
    let id = seed_candidate(&pool).await;
    let app = app(&pool);

    let (status, _) = call(
        &app,
        Method::PUT,
        &format!("/api/rh/candidatos/{id}/entrevista_tecnica"),
        Some(json!({ "status": true })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let (value, date) = step_of(&pool, id, "entrevista_tecnica").await;
    assert_eq!(value.as_deref(), Some("true"));
    assert!(date.is_none());

    let (status, _) = call(
        &app,
        Method::PUT,
        "/api/rh/candidatos/999/entrevista_tecnica",
        Some(json!({ "status": "aprovado" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn dated_step_route_returns_the_row(pool: PgPool) {
    let id = seed_candidate(&pool).await;
    let app = app(&pool);

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/api/rh/candidatos/{id}/steps/contratacao_concluida"),
        Some(json!({ "status": "sim", "date": "2024-05-02T12:00:00Z" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["contratacao_concluida"], "sim");
    let (_, date) = step_of(&pool, id, "contratacao_concluida").await;
    assert_eq!(date.map(|d| d.to_rfc3339()), Some("2024-05-02T12:00:00+00:00".to_string()));
}

#[sqlx::test]
async fn active_flag_accepts_the_active_alias(pool: PgPool) {
    let id = seed_candidate(&pool).await;
    let app = app(&pool);

    let (status, _) = call(
        &app,
        Method::PUT,
        &format!("/candidatos/{id}/ativo"),
        Some(json!({ "active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let ativo: Option<bool> = sqlx::query_scalar("SELECT ativo FROM candidatos WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(ativo, Some(false));
}

// =============================================================================
//  PROCESSOS DINÂMICOS
// =============================================================================

#[sqlx::test]
async fn process_lifecycle(pool: PgPool) {
    let app = app(&pool);

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/adcProcessos",
        Some(json!({ "processName": "Onboarding", "tableName": "onboarding", "columns": ["colaborador", "etapa"] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, processes) = call(&app, Method::GET, "/api/processes", None).await;
    assert_eq!(processes, json!([{ "title": "Onboarding", "path": "onboarding" }]));

    let (_, columns) = call(&app, Method::GET, "/api/onboarding", None).await;
    assert_eq!(columns, json!({ "columns": ["id", "colaborador", "etapa"] }));

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/onboarding",
        Some(json!({ "colaborador": "Ana", "etapa": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, rows) = call(&app, Method::GET, "/api/onboarding/data", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows, json!([{ "id": 1, "colaborador": "Ana", "etapa": "2" }]));

    let (status, _) = call(&app, Method::DELETE, "/api/processos/onboarding", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&pool, "processos").await, 0);

    let (status, _) = call(&app, Method::GET, "/api/onboarding/data", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn insert_with_case_duplicated_keys_is_400(pool: PgPool) {
    let app = app(&pool);
    call(
        &app,
        Method::POST,
        "/api/adcProcessos",
        Some(json!({ "processName": "Onboarding", "tableName": "onboarding", "columns": ["etapa"] })),
    )
    .await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/onboarding",
        Some(json!({ "etapa": "a", "ETAPA": "b" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("etapa"));
    let rows: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "onboarding""#)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
}
