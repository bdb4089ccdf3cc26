// src/db/operations_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use crate::{
    common::error::AppError,
    models::operations::{Order, OrderItem, OrderItemPayload},
};

#[derive(Clone)]
pub struct OperationsRepository {
    pool: PgPool,
}

impl OperationsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  LEITURA
    // =========================================================================

    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        let orders = sqlx::query_as::<_, Order>("SELECT * FROM pedidos ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(orders)
    }

    pub async fn find_order(&self, id: i32) -> Result<Option<Order>, AppError> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM pedidos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(order)
    }

    pub async fn list_items<'e, E>(&self, executor: E, pedido_id: i32) -> Result<Vec<OrderItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let items = sqlx::query_as::<_, OrderItem>(
            "SELECT * FROM itens_pedido WHERE pedido_id = $1 ORDER BY id",
        )
        .bind(pedido_id)
        .fetch_all(executor)
        .await?;
        Ok(items)
    }

    // =========================================================================
    //  ESCRITA
    // =========================================================================

    pub async fn create_order<'e, E>(
        &self,
        executor: E,
        cliente: Option<&str>,
        endereco: Option<&str>,
    ) -> Result<Order, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO pedidos (cliente, endereco) VALUES ($1, $2) RETURNING *",
        )
        .bind(cliente)
        .bind(endereco)
        .fetch_one(executor)
        .await?;
        Ok(order)
    }

    pub async fn add_item<'e, E>(
        &self,
        executor: E,
        pedido_id: i32,
        item: &OrderItemPayload,
    ) -> Result<OrderItem, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let item = sqlx::query_as::<_, OrderItem>(
            r#"
            INSERT INTO itens_pedido (pedido_id, nome_produto, quantidade, preco)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(pedido_id)
        .bind(&item.nome_produto)
        .bind(item.quantidade)
        .bind(item.preco)
        .fetch_one(executor)
        .await?;
        Ok(item)
    }

    /// Os itens saem junto via `ON DELETE CASCADE`.
    pub async fn delete_order(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM pedidos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn update_status(&self, id: i32, status: Option<&str>) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE pedidos SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
