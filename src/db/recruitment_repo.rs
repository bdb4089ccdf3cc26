// src/db/recruitment_repo.rs

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use crate::{
    common::error::AppError,
    models::recruitment::{Candidate, CandidateStep},
};

#[derive(Clone)]
pub struct RecruitmentRepository {
    pool: PgPool,
}

impl RecruitmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_candidates(&self) -> Result<Vec<Candidate>, AppError> {
        let candidates = sqlx::query_as::<_, Candidate>("SELECT * FROM candidatos ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(candidates)
    }

    pub async fn update_status(&self, id: i32, status: Option<&str>) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE candidatos SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn update_active(&self, id: i32, ativo: Option<bool>) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE candidatos SET ativo = $1 WHERE id = $2")
            .bind(ativo)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Só o status da etapa; a coluna `<etapa>_date` fica como está.
    pub async fn update_step_status(
        &self,
        id: i32,
        step: CandidateStep,
        status: Option<String>,
    ) -> Result<u64, AppError> {
        let sql = format!("UPDATE candidatos SET {} = $1 WHERE id = $2", step.column());

        let result = sqlx::query(&sql)
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Grava o status e a data de uma etapa. As colunas vêm de `CandidateStep`
    /// (nomes fixos), o resto vai como parâmetro.
    pub async fn update_step(
        &self,
        id: i32,
        step: CandidateStep,
        status: Option<String>,
        date: DateTime<Utc>,
    ) -> Result<Option<Candidate>, AppError> {
        let sql = format!(
            "UPDATE candidatos SET {} = $1, {} = $2 WHERE id = $3 RETURNING *",
            step.column(),
            step.date_column()
        );

        let candidate = sqlx::query_as::<_, Candidate>(&sql)
            .bind(status)
            .bind(date)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(candidate)
    }
}
