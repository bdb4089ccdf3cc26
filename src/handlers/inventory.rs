// src/handlers/inventory.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    models::{
        inventory::{
            CreateProductPayload, CreateStockEntryPayload, CreateStockExitPayload, MovementPeriod,
            Product, ProductFilter, StockEntryResult, StockExitResult, StockHistoryEntry,
            StockMovementReport, UpdateProductPayload,
        },
        MessageResponse,
    },
};

// =============================================================================
//  1. PRODUTOS
// =============================================================================

// POST /api/produtos
#[utoipa::path(
    post,
    path = "/api/produtos",
    tag = "Inventory",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Produto criado", body = Product)
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let product = app_state
        .inventory_service
        .create_product(&payload)
        .await
        .map_err(|e| e.to_api_error("Erro ao adicionar produto"))?;

    Ok((StatusCode::CREATED, Json(product)))
}

// GET /api/estoque
#[utoipa::path(
    get,
    path = "/api/estoque",
    tag = "Inventory",
    params(ProductFilter),
    responses(
        (status = 200, description = "Produtos que atendem aos filtros", body = Vec<Product>)
    )
)]
pub async fn list_stock(
    State(app_state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let products = app_state
        .inventory_service
        .search_products(&filter)
        .await
        .map_err(|e| e.to_api_error("Erro ao obter estoque"))?;

    Ok((StatusCode::OK, Json(products)))
}

// PUT /api/estoque/{id}
#[utoipa::path(
    put,
    path = "/api/estoque/{id}",
    tag = "Inventory",
    request_body = UpdateProductPayload,
    params(("id" = i32, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto atualizado", body = MessageResponse),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .inventory_service
        .update_product(id, &payload)
        .await
        .map_err(|e| e.to_api_error("Erro ao atualizar produto"))?;

    Ok(Json(MessageResponse::new("Produto atualizado com sucesso")))
}

// DELETE /api/estoque/{id}
#[utoipa::path(
    delete,
    path = "/api/estoque/{id}",
    tag = "Inventory",
    params(("id" = i32, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto excluído", body = MessageResponse),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .inventory_service
        .delete_product(id)
        .await
        .map_err(|e| e.to_api_error("Erro ao excluir produto"))?;

    Ok(Json(MessageResponse::new("Produto excluído com sucesso")))
}

// =============================================================================
//  2. MOVIMENTAÇÃO DE ESTOQUE
// =============================================================================

// POST /api/entradas
#[utoipa::path(
    post,
    path = "/api/entradas",
    tag = "Inventory",
    request_body = CreateStockEntryPayload,
    responses(
        (status = 201, description = "Entrada registrada e estoque somado", body = StockEntryResult),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn add_stock_entry(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateStockEntryPayload>,
) -> Result<impl IntoResponse, ApiError> {
    const CONTEXT: &str = "Erro ao registrar entrada de produto";

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(CONTEXT))?;

    let result = app_state
        .inventory_service
        .register_entry(&payload)
        .await
        .map_err(|e| e.to_api_error(CONTEXT))?;

    Ok((StatusCode::CREATED, Json(result)))
}

// POST /api/saidas
#[utoipa::path(
    post,
    path = "/api/saidas",
    tag = "Inventory",
    request_body = CreateStockExitPayload,
    responses(
        (status = 201, description = "Saída registrada e estoque baixado", body = StockExitResult),
        (status = 400, description = "Quantidade insuficiente em estoque"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn add_stock_exit(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateStockExitPayload>,
) -> Result<impl IntoResponse, ApiError> {
    const CONTEXT: &str = "Erro ao registrar saída de produto";

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(CONTEXT))?;

    let result = app_state
        .inventory_service
        .register_exit(&payload)
        .await
        .map_err(|e| e.to_api_error(CONTEXT))?;

    Ok((StatusCode::CREATED, Json(result)))
}

// GET /api/estoque/movimentacao
#[utoipa::path(
    get,
    path = "/api/estoque/movimentacao",
    tag = "Inventory",
    params(MovementPeriod),
    responses(
        (status = 200, description = "Entradas e saídas no período", body = StockMovementReport)
    )
)]
pub async fn stock_movements(
    State(app_state): State<AppState>,
    Query(period): Query<MovementPeriod>,
) -> Result<impl IntoResponse, ApiError> {
    let report = app_state
        .inventory_service
        .movements_between(period.data_inicio, period.data_fim)
        .await
        .map_err(|e| e.to_api_error("Erro ao obter movimentações de estoque"))?;

    Ok((StatusCode::OK, Json(report)))
}

// GET /api/historico
#[utoipa::path(
    get,
    path = "/api/historico",
    tag = "Inventory",
    responses(
        (status = 200, description = "Entradas e saídas, mais recentes primeiro", body = Vec<StockHistoryEntry>)
    )
)]
pub async fn stock_history(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let history = app_state
        .inventory_service
        .stock_history()
        .await
        .map_err(|e| e.to_api_error("Erro ao obter histórico de estoque"))?;

    Ok(Json(history))
}
