// src/models/operations.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// --- Pedidos ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    #[schema(example = 42)]
    pub id: i32,
    #[schema(example = "Padaria Central")]
    pub cliente: Option<String>,
    #[schema(example = "Rua das Flores, 100")]
    pub endereco: Option<String>,
    #[schema(example = "pendente")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OrderItem {
    pub id: i32,
    pub pedido_id: i32,
    #[schema(example = "Farinha 5kg")]
    pub nome_produto: Option<String>,
    #[schema(example = 3)]
    pub quantidade: Option<i32>,
    #[schema(example = 27.9)]
    pub preco: Option<Decimal>,
}

// Pedido com os itens "achatados" no mesmo objeto: { ...pedido, items: [...] }
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub header: Order,
    pub items: Vec<OrderItem>,
}

// --- Payloads ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct OrderItemPayload {
    pub nome_produto: Option<String>,

    #[validate(range(min = 1, message = "A quantidade deve ser positiva."))]
    pub quantidade: Option<i32>,

    pub preco: Option<Decimal>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderPayload {
    pub cliente: Option<String>,
    pub endereco: Option<String>,

    #[validate(nested)]
    pub items: Vec<OrderItemPayload>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderCreated {
    #[schema(example = "Pedido cadastrado com sucesso!")]
    pub message: String,
    #[schema(example = 42)]
    pub id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusPayload {
    #[schema(example = "enviado")]
    pub status: Option<String>,
}
