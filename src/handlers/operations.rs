// src/handlers/operations.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    models::{
        operations::{CreateOrderPayload, Order, OrderCreated, OrderDetail, UpdateOrderStatusPayload},
        MessageResponse,
    },
};

// Mensagem genérica de falha das rotas de pedidos
const ORDER_ERROR: &str = "Erro no servidor";

// GET /api/pedidos
#[utoipa::path(
    get,
    path = "/api/pedidos",
    tag = "Orders",
    responses(
        (status = 200, description = "Todos os pedidos", body = Vec<Order>)
    )
)]
pub async fn list_orders(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let orders = app_state
        .operations_service
        .list_orders()
        .await
        .map_err(|e| e.to_api_error(ORDER_ERROR))?;

    Ok(Json(orders))
}

// GET /api/pedidos/{id}
#[utoipa::path(
    get,
    path = "/api/pedidos/{id}",
    tag = "Orders",
    params(("id" = i32, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Pedido com os itens", body = OrderDetail),
        (status = 404, description = "Pedido não encontrado")
    )
)]
pub async fn get_order(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = app_state
        .operations_service
        .get_order_detail(id)
        .await
        .map_err(|e| e.to_api_error(ORDER_ERROR))?;

    Ok(Json(detail))
}

// POST /api/pedidos
#[utoipa::path(
    post,
    path = "/api/pedidos",
    tag = "Orders",
    request_body = CreateOrderPayload,
    responses(
        (status = 201, description = "Pedido e itens gravados", body = OrderCreated)
    )
)]
pub async fn create_order(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(ORDER_ERROR))?;

    let detail = app_state
        .operations_service
        .create_order(&payload)
        .await
        .map_err(|e| e.to_api_error(ORDER_ERROR))?;

    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            message: "Pedido cadastrado com sucesso!".to_string(),
            id: detail.header.id,
        }),
    ))
}

// DELETE /api/pedidos/{id}
#[utoipa::path(
    delete,
    path = "/api/pedidos/{id}",
    tag = "Orders",
    params(("id" = i32, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Pedido excluído", body = MessageResponse),
        (status = 404, description = "Pedido não encontrado")
    )
)]
pub async fn delete_order(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .operations_service
        .delete_order(id)
        .await
        .map_err(|e| match e {
            AppError::OrderNotFound => e.to_api_error(ORDER_ERROR).with_error_field(),
            other => other.to_api_error(ORDER_ERROR),
        })?;

    Ok(Json(MessageResponse::new("Pedido excluído com sucesso")))
}

// PUT /api/pedidos/{id}/status
#[utoipa::path(
    put,
    path = "/api/pedidos/{id}/status",
    tag = "Orders",
    request_body = UpdateOrderStatusPayload,
    params(("id" = i32, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Status alterado", body = MessageResponse),
        (status = 404, description = "Pedido não encontrado")
    )
)]
pub async fn update_order_status(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .operations_service
        .update_status(id, payload.status.as_deref())
        .await
        .map_err(|e| e.to_api_error(ORDER_ERROR))?;

    Ok(Json(MessageResponse::new("Status do pedido atualizado com sucesso!")))
}
