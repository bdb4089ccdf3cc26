// src/services/inventory_service.rs

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::InventoryRepository,
    models::inventory::{
        CreateProductPayload, CreateStockEntryPayload, CreateStockExitPayload, Product,
        ProductFilter, StockEntryResult, StockExitResult, StockHistoryEntry, StockMovementReport,
        UpdateProductPayload,
    },
};

#[derive(Clone)]
pub struct InventoryService {
    inventory_repo: InventoryRepository,
    pool: PgPool,
}

impl InventoryService {
    pub fn new(inventory_repo: InventoryRepository, pool: PgPool) -> Self {
        Self { inventory_repo, pool }
    }

    // --- PRODUTOS ---

    pub async fn create_product(&self, payload: &CreateProductPayload) -> Result<Product, AppError> {
        self.inventory_repo.create_product(payload).await
    }

    pub async fn search_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError> {
        self.inventory_repo.search_products(filter).await
    }

    pub async fn update_product(&self, id: i32, payload: &UpdateProductPayload) -> Result<(), AppError> {
        match self.inventory_repo.update_product(id, payload).await? {
            0 => Err(AppError::ProductNotFound),
            _ => Ok(()),
        }
    }

    pub async fn delete_product(&self, id: i32) -> Result<(), AppError> {
        match self.inventory_repo.delete_product(id).await? {
            0 => Err(AppError::ProductNotFound),
            _ => Ok(()),
        }
    }

    // --- ENTRADA DE ESTOQUE ---
    // Movimento + incremento na mesma transação.
    pub async fn register_entry(
        &self,
        payload: &CreateStockEntryPayload,
    ) -> Result<StockEntryResult, AppError> {
        let quantity = payload.quantidade.unwrap_or_default();
        let mut tx = self.pool.begin().await?;

        // 1. O produto precisa existir (linha travada até o commit)
        self.inventory_repo
            .lock_product_by_name(&mut *tx, payload.produto_nome.as_deref())
            .await?
            .ok_or(AppError::ProductNotFound)?;

        // 2. Registra a entrada
        let entry = self.inventory_repo.insert_entry(&mut *tx, payload).await?;

        // 3. Atualiza o estoque
        let updated_product = self
            .inventory_repo
            .adjust_quantity(&mut *tx, payload.produto_nome.as_deref(), quantity)
            .await?
            .ok_or(AppError::ProductNotFound)?;

        tx.commit().await?;

        tracing::info!(
            "Entrada de {} un. registrada para '{}'",
            quantity,
            payload.produto_nome.as_deref().unwrap_or_default()
        );
        Ok(StockEntryResult { entry, updated_product })
    }

    // --- SAÍDA DE ESTOQUE ---
    // O FOR UPDATE faz a checagem de saldo valer até o commit: duas saídas
    // simultâneas do mesmo produto são serializadas.
    pub async fn register_exit(
        &self,
        payload: &CreateStockExitPayload,
    ) -> Result<StockExitResult, AppError> {
        let quantity = payload.quantidade.unwrap_or_default();
        let mut tx = self.pool.begin().await?;

        // 1. Valida Saldo
        let product = self
            .inventory_repo
            .lock_product_by_name(&mut *tx, payload.produto_nome.as_deref())
            .await?
            .ok_or(AppError::ProductNotFound)?;

        if !has_enough_stock(product.quantidade, quantity) {
            // Rollback automático ao sair do escopo (drop)
            return Err(AppError::InsufficientStock);
        }

        // 2. Registra a saída
        let exit = self.inventory_repo.insert_exit(&mut *tx, payload).await?;

        // 3. Baixa o estoque
        let updated_product = self
            .inventory_repo
            .adjust_quantity(&mut *tx, payload.produto_nome.as_deref(), -quantity)
            .await?
            .ok_or(AppError::ProductNotFound)?;

        tx.commit().await?;

        tracing::info!(
            "Saída de {} un. registrada para '{}'",
            quantity,
            payload.produto_nome.as_deref().unwrap_or_default()
        );
        Ok(StockExitResult { exit, updated_product })
    }

    // --- RELATÓRIOS ---

    pub async fn movements_between(
        &self,
        data_inicio: Option<NaiveDate>,
        data_fim: Option<NaiveDate>,
    ) -> Result<StockMovementReport, AppError> {
        let entries = self.inventory_repo.entries_between(data_inicio, data_fim).await?;
        let exits = self.inventory_repo.exits_between(data_inicio, data_fim).await?;
        Ok(StockMovementReport { entries, exits })
    }

    pub async fn stock_history(&self) -> Result<Vec<StockHistoryEntry>, AppError> {
        self.inventory_repo.stock_history().await
    }
}

/// Estoque NULL conta como zero; pedir exatamente o saldo é permitido.
pub fn has_enough_stock(current: Option<i32>, requested: i32) -> bool {
    current.unwrap_or_default() >= requested
}
