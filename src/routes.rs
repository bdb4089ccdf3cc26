// src/routes.rs

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{config::AppState, docs::ApiDoc, handlers};

async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from server" }))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// CORS liberado para qualquer origem (o front roda em outra porta)
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn app(app_state: AppState) -> Router {
    let user_routes = Router::new()
        .route(
            "/users",
            get(handlers::auth::list_users).post(handlers::auth::create_user),
        )
        .route("/login", post(handlers::auth::login));

    let inventory_routes = Router::new()
        .route("/produtos", post(handlers::inventory::create_product))
        .route("/estoque", get(handlers::inventory::list_stock))
        // Rota estática tem prioridade sobre '/estoque/{id}'
        .route("/estoque/movimentacao", get(handlers::inventory::stock_movements))
        .route(
            "/estoque/{id}",
            put(handlers::inventory::update_product).delete(handlers::inventory::delete_product),
        )
        .route("/entradas", post(handlers::inventory::add_stock_entry))
        .route("/saidas", post(handlers::inventory::add_stock_exit))
        .route("/historico", get(handlers::inventory::stock_history));

    let order_routes = Router::new()
        .route(
            "/",
            get(handlers::operations::list_orders).post(handlers::operations::create_order),
        )
        .route(
            "/{id}",
            get(handlers::operations::get_order).delete(handlers::operations::delete_order),
        )
        .route("/{id}/status", put(handlers::operations::update_order_status));

    let sales_routes = Router::new()
        .route("/mais-vendidos", get(handlers::dashboard::best_sellers))
        .route("/menos-vendidos", get(handlers::dashboard::worst_sellers))
        .route("/tendencias", get(handlers::dashboard::sales_trends))
        .route("/relatorios-financeiros", get(handlers::dashboard::financial_report));

    // Tabela 'candidatos'
    let candidate_routes = Router::new()
        .route("/", get(handlers::recruitment::list_candidates))
        .route("/{id}/status", put(handlers::recruitment::update_candidate_status))
        .route("/{id}/ativo", put(handlers::recruitment::update_candidate_active))
        .route("/{id}/passos/{step}", put(handlers::recruitment::complete_candidate_step));

    // Lista em memória + etapas persistidas
    let hr_routes = Router::new()
        .route(
            "/candidatos",
            get(handlers::recruitment::list_scratch_candidates)
                .post(handlers::recruitment::add_scratch_candidate),
        )
        .route("/candidatos/{id}/status", put(handlers::recruitment::update_scratch_status))
        .route("/candidatos/{id}/ativo", put(handlers::recruitment::update_scratch_active))
        .route("/candidatos/{id}/{step}", put(handlers::recruitment::update_candidate_step))
        .route(
            "/candidatos/{id}/steps/{step}",
            put(handlers::recruitment::update_candidate_step_with_date),
        );

    let process_routes = Router::new()
        .route("/adcProcessos", post(handlers::processes::create_process))
        .route("/processes", get(handlers::processes::list_processes))
        .route("/processos/{titulo}", delete(handlers::processes::delete_process))
        // Rotas estáticas de '/api' têm prioridade sobre estas
        .route(
            "/{table_name}",
            get(handlers::processes::table_columns).post(handlers::processes::insert_row),
        )
        .route("/{table_name}/data", get(handlers::processes::fetch_rows));

    let api_routes = Router::new()
        .route("/hello", get(hello))
        .merge(user_routes)
        .merge(inventory_routes)
        .nest("/pedidos", order_routes)
        .nest("/vendas", sales_routes)
        .nest("/rh", hr_routes)
        .merge(process_routes);

    // Combina tudo no router principal
    Router::new()
        .nest("/api", api_routes)
        .nest("/candidatos", candidate_routes)
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(app_state)
}
