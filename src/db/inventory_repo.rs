// src/db/inventory_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, PgPool, Postgres, QueryBuilder};
use crate::{
    common::error::AppError,
    models::inventory::{
        CreateProductPayload, CreateStockEntryPayload, CreateStockExitPayload, Product,
        ProductFilter, StockEntry, StockExit, StockHistoryEntry, UpdateProductPayload,
    },
};

#[derive(Clone)]
pub struct InventoryRepository {
    pool: PgPool,
}

/// Monta o `SELECT` de `GET /api/estoque`: cada filtro presente acrescenta
/// um `AND` e o seu parâmetro posicional, na ordem nome, data_inicio, data_fim, fornecedor.
pub fn build_product_search(filter: &ProductFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("SELECT * FROM produtos WHERE 1=1");

    if let Some(nome) = &filter.nome {
        query
            .push(" AND nome ILIKE ")
            .push_bind(format!("%{}%", escape_like(nome)));
    }
    if let Some(data_inicio) = filter.data_inicio {
        query.push(" AND dta >= ").push_bind(data_inicio);
    }
    if let Some(data_fim) = filter.data_fim {
        query.push(" AND dta <= ").push_bind(data_fim);
    }
    if let Some(fornecedor) = &filter.fornecedor {
        query.push(" AND fornecedor = ").push_bind(fornecedor.clone());
    }

    query
}

// '%' e '_' digitados pelo usuário são literais, não curingas
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl InventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Produtos
    // ---

    pub async fn create_product(&self, payload: &CreateProductPayload) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO produtos (nome, categoria, quantidade, preco, dta, fornecedor)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&payload.nome)
        .bind(&payload.categoria)
        .bind(payload.quantidade)
        .bind(payload.preco)
        .bind(payload.dta)
        .bind(&payload.fornecedor)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    pub async fn search_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError> {
        let mut query = build_product_search(filter);
        let products = query
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    /// Retorna quantas linhas foram alteradas (0 = produto inexistente).
    pub async fn update_product(
        &self,
        id: i32,
        payload: &UpdateProductPayload,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE produtos
            SET nome = $1, categoria = $2, quantidade = $3, preco = $4, fornecedor = $5
            WHERE id = $6
            "#,
        )
        .bind(&payload.nome)
        .bind(&payload.categoria)
        .bind(payload.quantidade)
        .bind(payload.preco)
        .bind(&payload.fornecedor)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_product(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // ---
    // Funções de "Escrita" (Transacionais)
    // ---
    // Estas usam o padrão genérico 'Executor' para rodar dentro de uma transação.

    /// Busca o produto pelo nome travando as linhas (`FOR UPDATE`) até o fim da transação.
    /// Se houver nomes repetidos, todas ficam travadas e a primeira (menor id) é devolvida.
    pub async fn lock_product_by_name<'e, E>(
        &self,
        executor: E,
        nome: Option<&str>,
    ) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM produtos WHERE nome = $1 ORDER BY id FOR UPDATE",
        )
        .bind(nome)
        .fetch_all(executor)
        .await?;

        Ok(products.into_iter().next())
    }

    /// Soma `delta` (positivo ou negativo) à quantidade de todos os produtos com esse nome.
    pub async fn adjust_quantity<'e, E>(
        &self,
        executor: E,
        nome: Option<&str>,
        delta: i32,
    ) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let products = sqlx::query_as::<_, Product>(
            r#"
            UPDATE produtos
            SET quantidade = COALESCE(quantidade, 0) + $1
            WHERE nome = $2
            RETURNING *
            "#,
        )
        .bind(delta)
        .bind(nome)
        .fetch_all(executor)
        .await?;

        Ok(products.into_iter().min_by_key(|p| p.id))
    }

    pub async fn insert_entry<'e, E>(
        &self,
        executor: E,
        payload: &CreateStockEntryPayload,
    ) -> Result<StockEntry, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let entry = sqlx::query_as::<_, StockEntry>(
            r#"
            INSERT INTO entradas (produto_nome, quantidade, data_entrada, fornecedor, fatura)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.produto_nome)
        .bind(payload.quantidade)
        .bind(payload.data_entrada)
        .bind(&payload.fornecedor)
        .bind(&payload.fatura)
        .fetch_one(executor)
        .await?;

        Ok(entry)
    }

    pub async fn insert_exit<'e, E>(
        &self,
        executor: E,
        payload: &CreateStockExitPayload,
    ) -> Result<StockExit, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exit = sqlx::query_as::<_, StockExit>(
            r#"
            INSERT INTO saidas (produto_nome, quantidade, data_saida, recebedor, razao)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.produto_nome)
        .bind(payload.quantidade)
        .bind(payload.data_saida)
        .bind(&payload.recebedor)
        .bind(&payload.razao)
        .fetch_one(executor)
        .await?;

        Ok(exit)
    }

    // ---
    // Relatórios de movimentação
    // ---

    // Datas ausentes viram NULL e a comparação não casa com nada.
    pub async fn entries_between(
        &self,
        data_inicio: Option<NaiveDate>,
        data_fim: Option<NaiveDate>,
    ) -> Result<Vec<StockEntry>, AppError> {
        let entries = sqlx::query_as::<_, StockEntry>(
            "SELECT * FROM entradas WHERE data_entrada >= $1 AND data_entrada <= $2",
        )
        .bind(data_inicio)
        .bind(data_fim)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    pub async fn exits_between(
        &self,
        data_inicio: Option<NaiveDate>,
        data_fim: Option<NaiveDate>,
    ) -> Result<Vec<StockExit>, AppError> {
        let exits = sqlx::query_as::<_, StockExit>(
            "SELECT * FROM saidas WHERE data_saida >= $1 AND data_saida <= $2",
        )
        .bind(data_inicio)
        .bind(data_fim)
        .fetch_all(&self.pool)
        .await?;
        Ok(exits)
    }

    pub async fn stock_history(&self) -> Result<Vec<StockHistoryEntry>, AppError> {
        let history = sqlx::query_as::<_, StockHistoryEntry>(
            r#"
            SELECT 'entrada' AS tipo, produto_nome AS nome, quantidade, data_entrada AS data, fornecedor AS responsavel
            FROM entradas
            UNION ALL
            SELECT 'saida' AS tipo, produto_nome AS nome, quantidade, data_saida AS data, recebedor AS responsavel
            FROM saidas
            ORDER BY data DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(history)
    }
}
