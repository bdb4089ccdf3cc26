// src/db/process_repo.rs

use serde_json::Value;
use sqlx::{Executor, PgPool, Postgres, QueryBuilder};
use crate::{
    common::{db_utils::SqlIdent, error::AppError},
    models::process::{Process, ProcessSummary},
};

#[derive(Clone)]
pub struct ProcessRepository {
    pool: PgPool,
}

/// `CREATE TABLE "<tabela>" (id SERIAL PRIMARY KEY, "<col>" TEXT, ...)`
pub fn create_table_sql(table: &SqlIdent, columns: &[SqlIdent]) -> String {
    let mut sql = format!("CREATE TABLE {} (id SERIAL PRIMARY KEY", table.quoted());
    for column in columns {
        sql.push_str(", ");
        sql.push_str(&column.quoted());
        sql.push_str(" TEXT");
    }
    sql.push(')');
    sql
}

/// INSERT com nomes entre aspas e todos os valores como parâmetros.
pub fn build_insert(table: &SqlIdent, row: Vec<(SqlIdent, Option<String>)>) -> QueryBuilder<'static, Postgres> {
    if row.is_empty() {
        return QueryBuilder::new(format!("INSERT INTO {} DEFAULT VALUES", table.quoted()));
    }

    let (columns, values): (Vec<_>, Vec<_>) = row.into_iter().unzip();

    let mut query = QueryBuilder::new(format!("INSERT INTO {} (", table.quoted()));
    {
        let mut separated = query.separated(", ");
        for column in &columns {
            separated.push(column.quoted());
        }
    }
    query.push(") VALUES (");
    {
        let mut separated = query.separated(", ");
        for value in values {
            separated.push_bind(value);
        }
    }
    query.push(")");
    query
}

impl ProcessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  REGISTRO (tabela 'processos')
    // =========================================================================

    pub async fn list_processes(&self) -> Result<Vec<ProcessSummary>, AppError> {
        let processes = sqlx::query_as::<_, ProcessSummary>(
            "SELECT nome AS title, tabela AS path FROM processos ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(processes)
    }

    pub async fn find_by_table<'e, E>(&self, executor: E, tabela: &str) -> Result<Option<Process>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let process = sqlx::query_as::<_, Process>("SELECT * FROM processos WHERE tabela = $1")
            .bind(tabela)
            .fetch_optional(executor)
            .await?;
        Ok(process)
    }

    pub async fn insert_process<'e, E>(
        &self,
        executor: E,
        nome: Option<&str>,
        tabela: &SqlIdent,
        colunas: &[SqlIdent],
    ) -> Result<Process, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let colunas: Vec<String> = colunas.iter().map(|c| c.as_str().to_string()).collect();

        let process = sqlx::query_as::<_, Process>(
            "INSERT INTO processos (nome, tabela, colunas) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(nome)
        .bind(tabela.as_str())
        .bind(colunas)
        .fetch_one(executor)
        .await?;
        Ok(process)
    }

    pub async fn delete_process<'e, E>(&self, executor: E, tabela: &str) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM processos WHERE tabela = $1")
            .bind(tabela)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  DDL DAS TABELAS DINÂMICAS
    // =========================================================================

    pub async fn create_table<'e, E>(
        &self,
        executor: E,
        table: &SqlIdent,
        columns: &[SqlIdent],
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = create_table_sql(table, columns);
        sqlx::query(&sql).execute(executor).await?;
        Ok(())
    }

    pub async fn drop_table<'e, E>(&self, executor: E, table: &SqlIdent) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("DROP TABLE IF EXISTS {}", table.quoted());
        sqlx::query(&sql).execute(executor).await?;
        Ok(())
    }

    // =========================================================================
    //  DADOS DAS TABELAS DINÂMICAS
    // =========================================================================

    pub async fn table_columns(&self, tabela: &str) -> Result<Vec<String>, AppError> {
        let columns = sqlx::query_scalar::<_, String>(
            r#"
            SELECT column_name::text
            FROM information_schema.columns
            WHERE table_name = $1 AND table_schema = current_schema()
            ORDER BY ordinal_position
            "#,
        )
        .bind(tabela)
        .fetch_all(&self.pool)
        .await?;
        Ok(columns)
    }

    pub async fn insert_row(
        &self,
        table: &SqlIdent,
        row: Vec<(SqlIdent, Option<String>)>,
    ) -> Result<u64, AppError> {
        let mut query = build_insert(table, row);
        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Todas as linhas como um array JSON (as colunas variam por tabela).
    pub async fn fetch_rows(&self, table: &SqlIdent) -> Result<Value, AppError> {
        let sql = format!(
            "SELECT COALESCE(json_agg(linha ORDER BY linha.id), '[]'::json) FROM {} AS linha",
            table.quoted()
        );
        let rows = sqlx::query_scalar::<_, Value>(&sql)
            .fetch_one(&self.pool)
            .await?;
        Ok(rows)
    }
}
