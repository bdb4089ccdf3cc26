// src/services/recruitment_service.rs

use chrono::{DateTime, Utc};

use crate::{
    common::error::AppError,
    db::RecruitmentRepository,
    models::recruitment::{Candidate, CandidateStep, StepStatus},
};

#[derive(Clone)]
pub struct RecruitmentService {
    repo: RecruitmentRepository,
}

impl RecruitmentService {
    pub fn new(repo: RecruitmentRepository) -> Self {
        Self { repo }
    }

    pub async fn list_candidates(&self) -> Result<Vec<Candidate>, AppError> {
        self.repo.list_candidates().await
    }

    pub async fn update_status(&self, id: i32, status: Option<&str>) -> Result<(), AppError> {
        match self.repo.update_status(id, status).await? {
            0 => Err(AppError::CandidateNotFound),
            _ => Ok(()),
        }
    }

    pub async fn update_active(&self, id: i32, ativo: Option<bool>) -> Result<(), AppError> {
        match self.repo.update_active(id, ativo).await? {
            0 => Err(AppError::CandidateNotFound),
            _ => Ok(()),
        }
    }

    pub async fn update_step_status(
        &self,
        id: i32,
        step: CandidateStep,
        status: Option<StepStatus>,
    ) -> Result<(), AppError> {
        match self
            .repo
            .update_step_status(id, step, status.map(StepStatus::into_db_text))
            .await?
        {
            0 => Err(AppError::CandidateNotFound),
            _ => Ok(()),
        }
    }

    /// Todas as rotas de etapa gravam o mesmo par de colunas; `date` ausente usa agora.
    pub async fn update_step(
        &self,
        id: i32,
        step: CandidateStep,
        status: Option<StepStatus>,
        date: Option<DateTime<Utc>>,
    ) -> Result<Candidate, AppError> {
        let candidate = self
            .repo
            .update_step(
                id,
                step,
                status.map(StepStatus::into_db_text),
                date.unwrap_or_else(Utc::now),
            )
            .await?
            .ok_or(AppError::CandidateNotFound)?;

        tracing::debug!("Etapa {} do candidato {} atualizada", step.column(), id);
        Ok(candidate)
    }
}
