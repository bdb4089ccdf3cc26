// src/models/inventory.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::common::serde_utils::empty_string_as_none;

// --- 1. Produtos ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    #[schema(example = 7)]
    pub id: i32,
    #[schema(example = "Parafuso 6mm")]
    pub nome: Option<String>,
    #[schema(example = "Ferragens")]
    pub categoria: Option<String>,
    #[schema(example = 120)]
    pub quantidade: Option<i32>,
    #[schema(example = 0.35)]
    pub preco: Option<Decimal>,
    pub dta: Option<NaiveDate>,
    #[schema(example = "Metalúrgica Silva")]
    pub fornecedor: Option<String>,
}

// Campos ausentes seguem como NULL até o banco.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductPayload {
    pub nome: Option<String>,
    pub categoria: Option<String>,
    pub quantidade: Option<i32>,
    pub preco: Option<Decimal>,
    pub dta: Option<NaiveDate>,
    pub fornecedor: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductPayload {
    pub nome: Option<String>,
    pub categoria: Option<String>,
    pub quantidade: Option<i32>,
    pub preco: Option<Decimal>,
    pub fornecedor: Option<String>,
}

/// Filtros opcionais de `GET /api/estoque`. Cada um só entra no WHERE se vier preenchido.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Trecho do nome (sem diferenciar maiúsculas)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub nome: Option<String>,
    /// `dta >= data_inicio`
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub data_inicio: Option<NaiveDate>,
    /// `dta <= data_fim`
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub data_fim: Option<NaiveDate>,
    /// Fornecedor exato
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub fornecedor: Option<String>,
}

// --- 2. Entradas e Saídas ---
// Ligadas ao produto pelo NOME, não pelo id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StockEntry {
    pub id: i32,
    pub produto_nome: Option<String>,
    pub quantidade: Option<i32>,
    pub data_entrada: Option<NaiveDate>,
    pub fornecedor: Option<String>,
    pub fatura: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StockExit {
    pub id: i32,
    pub produto_nome: Option<String>,
    pub quantidade: Option<i32>,
    pub data_saida: Option<NaiveDate>,
    pub recebedor: Option<String>,
    pub razao: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStockEntryPayload {
    #[schema(example = "Parafuso 6mm")]
    pub produto_nome: Option<String>,

    #[validate(
        required(message = "O campo 'quantidade' é obrigatório."),
        range(min = 1, message = "A quantidade deve ser positiva.")
    )]
    #[schema(example = 50)]
    pub quantidade: Option<i32>,

    pub data_entrada: Option<NaiveDate>,
    pub fornecedor: Option<String>,
    pub fatura: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStockExitPayload {
    #[schema(example = "Parafuso 6mm")]
    pub produto_nome: Option<String>,

    #[validate(
        required(message = "O campo 'quantidade' é obrigatório."),
        range(min = 1, message = "A quantidade deve ser positiva.")
    )]
    #[schema(example = 10)]
    pub quantidade: Option<i32>,

    pub data_saida: Option<NaiveDate>,
    pub recebedor: Option<String>,
    pub razao: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockEntryResult {
    pub entry: StockEntry,
    pub updated_product: Product,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockExitResult {
    pub exit: StockExit,
    pub updated_product: Product,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovementPeriod {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub data_inicio: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub data_fim: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StockMovementReport {
    pub entries: Vec<StockEntry>,
    pub exits: Vec<StockExit>,
}

// --- 3. Histórico combinado (UNION ALL de entradas e saídas) ---
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct StockHistoryEntry {
    #[schema(example = "entrada")]
    pub tipo: Option<String>,
    pub nome: Option<String>,
    pub quantidade: Option<i32>,
    pub data: Option<NaiveDate>,
    // fornecedor (entrada) ou recebedor (saída)
    pub responsavel: Option<String>,
}
