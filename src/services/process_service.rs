// src/services/process_service.rs

use serde_json::Value;
use sqlx::PgPool;

use crate::{
    common::{
        db_utils::{strip_identifier, table_name_from_title, SqlIdent},
        error::AppError,
    },
    db::ProcessRepository,
    models::process::{CreateProcessPayload, Process, ProcessSummary, TableColumns},
};

/// Tabela dinâmica encontrada no registro `processos`, com as colunas que ela aceita.
#[derive(Debug, Clone)]
pub struct RegisteredTable {
    pub table: SqlIdent,
    pub columns: Vec<SqlIdent>,
}

impl RegisteredTable {
    /// Casa as chaves do corpo JSON com as colunas registradas.
    /// Qualquer chave fora do registro é recusada.
    pub fn bind_row(&self, body: Value) -> Result<Vec<(SqlIdent, Option<String>)>, AppError> {
        let Value::Object(fields) = body else {
            return Err(AppError::ExpectedJsonObject);
        };

        let mut row: Vec<(SqlIdent, Option<String>)> = Vec::with_capacity(fields.len());
        for (key, value) in fields {
            let lower = key.to_ascii_lowercase();
            let column = self
                .columns
                .iter()
                .find(|c| c.as_str() == lower)
                .cloned()
                .ok_or_else(|| AppError::UnknownColumn {
                    table: self.table.to_string(),
                    column: key,
                })?;

            // "etapa" e "ETAPA" caem na mesma coluna
            if row.iter().any(|(bound, _)| *bound == column) {
                return Err(AppError::DuplicateColumn(column.to_string()));
            }
            row.push((column, json_to_text(value)));
        }
        Ok(row)
    }
}

// As colunas dinâmicas são TEXT
fn json_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[derive(Clone)]
pub struct ProcessService {
    repo: ProcessRepository,
    pool: PgPool,
}

impl ProcessService {
    pub fn new(repo: ProcessRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    // Cria a tabela e o registro juntos; se um falhar, nada fica.
    pub async fn create_process(&self, payload: &CreateProcessPayload) -> Result<Process, AppError> {
        let table = SqlIdent::parse_table(&payload.table_name)?;
        let columns = payload
            .columns
            .iter()
            .map(|c| SqlIdent::parse(c))
            .collect::<Result<Vec<_>, _>>()?;

        let mut tx = self.pool.begin().await?;

        self.repo.create_table(&mut *tx, &table, &columns).await?;
        let process = self
            .repo
            .insert_process(&mut *tx, payload.process_name.as_deref(), &table, &columns)
            .await?;

        tx.commit().await?;

        tracing::info!("Processo '{}' criado (tabela {})", process.nome.as_deref().unwrap_or_default(), table);
        Ok(process)
    }

    pub async fn list_processes(&self) -> Result<Vec<ProcessSummary>, AppError> {
        self.repo.list_processes().await
    }

    pub async fn delete_process(&self, titulo: &str) -> Result<(), AppError> {
        let table = SqlIdent::parse_table(&strip_identifier(titulo))?;

        let mut tx = self.pool.begin().await?;

        self.repo
            .find_by_table(&mut *tx, table.as_str())
            .await?
            .ok_or_else(|| AppError::ProcessNotFound(table.to_string()))?;

        self.repo.drop_table(&mut *tx, &table).await?;
        self.repo.delete_process(&mut *tx, table.as_str()).await?;

        tx.commit().await?;

        tracing::info!("Processo da tabela {} excluído", table);
        Ok(())
    }

    /// Resolve o nome vindo da URL para uma tabela registrada.
    pub async fn resolve(&self, raw: &str) -> Result<RegisteredTable, AppError> {
        let table = SqlIdent::parse_table(&table_name_from_title(raw))?;

        let process = self
            .repo
            .find_by_table(&self.pool, table.as_str())
            .await?
            .ok_or_else(|| AppError::ProcessNotFound(table.to_string()))?;

        let columns = process
            .colunas
            .iter()
            .map(|c| SqlIdent::parse(c))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RegisteredTable { table, columns })
    }

    pub async fn table_columns(&self, raw: &str) -> Result<TableColumns, AppError> {
        let registered = self.resolve(raw).await?;
        let columns = self.repo.table_columns(registered.table.as_str()).await?;
        Ok(TableColumns { columns })
    }

    pub async fn insert_row(&self, raw: &str, body: Value) -> Result<(), AppError> {
        let registered = self.resolve(raw).await?;
        let row = registered.bind_row(body)?;
        self.repo.insert_row(&registered.table, row).await?;
        Ok(())
    }

    pub async fn fetch_rows(&self, raw: &str) -> Result<Value, AppError> {
        let registered = self.resolve(raw).await?;
        self.repo.fetch_rows(&registered.table).await
    }
}
