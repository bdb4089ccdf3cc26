// src/services/operation_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::OperationsRepository,
    models::operations::{CreateOrderPayload, Order, OrderDetail},
};

#[derive(Clone)]
pub struct OperationsService {
    repo: OperationsRepository,
    pool: PgPool,
}

impl OperationsService {
    pub fn new(repo: OperationsRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        self.repo.list_orders().await
    }

    pub async fn get_order_detail(&self, id: i32) -> Result<OrderDetail, AppError> {
        let header = self
            .repo
            .find_order(id)
            .await?
            .ok_or(AppError::OrderNotFound)?;
        let items = self.repo.list_items(&self.pool, id).await?;
        Ok(OrderDetail { header, items })
    }

    /// Cabeçalho + N itens numa transação só: ou grava tudo, ou nada.
    pub async fn create_order(&self, payload: &CreateOrderPayload) -> Result<OrderDetail, AppError> {
        let mut tx = self.pool.begin().await?;

        let header = self
            .repo
            .create_order(&mut *tx, payload.cliente.as_deref(), payload.endereco.as_deref())
            .await?;

        let mut items = Vec::with_capacity(payload.items.len());
        for item in &payload.items {
            items.push(self.repo.add_item(&mut *tx, header.id, item).await?);
        }

        tx.commit().await?;

        tracing::info!("Pedido {} criado com {} itens", header.id, items.len());
        Ok(OrderDetail { header, items })
    }

    pub async fn delete_order(&self, id: i32) -> Result<(), AppError> {
        match self.repo.delete_order(id).await? {
            0 => Err(AppError::OrderNotFound),
            _ => Ok(()),
        }
    }

    pub async fn update_status(&self, id: i32, status: Option<&str>) -> Result<(), AppError> {
        match self.repo.update_status(id, status).await? {
            0 => Err(AppError::OrderNotFound),
            _ => Ok(()),
        }
    }
}
