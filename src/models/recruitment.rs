// src/models/recruitment.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// --- Candidato persistido (tabela 'candidatos') ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Candidate {
    pub id: i32,
    #[schema(example = "João Lima")]
    pub nome: Option<String>,
    #[schema(example = "Desenvolvedor Backend")]
    pub funcao: Option<String>,
    #[schema(example = "em andamento")]
    pub status: Option<String>,
    pub ativo: Option<bool>,

    pub analise_curriculo: Option<String>,
    pub analise_curriculo_date: Option<DateTime<Utc>>,
    pub entrevista_rh: Option<String>,
    pub entrevista_rh_date: Option<DateTime<Utc>>,
    pub entrevista_tecnica: Option<String>,
    pub entrevista_tecnica_date: Option<DateTime<Utc>>,
    pub contratacao_concluida: Option<String>,
    pub contratacao_concluida_date: Option<DateTime<Utc>>,
}

/// Etapas do processo seletivo. Cada uma tem um par de colunas
/// `<etapa>` / `<etapa>_date`; os nomes vêm daqui, nunca da requisição.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStep {
    AnaliseCurriculo,
    EntrevistaRh,
    EntrevistaTecnica,
    ContratacaoConcluida,
}

impl CandidateStep {
    pub fn column(self) -> &'static str {
        match self {
            CandidateStep::AnaliseCurriculo => "analise_curriculo",
            CandidateStep::EntrevistaRh => "entrevista_rh",
            CandidateStep::EntrevistaTecnica => "entrevista_tecnica",
            CandidateStep::ContratacaoConcluida => "contratacao_concluida",
        }
    }

    pub fn date_column(self) -> &'static str {
        match self {
            CandidateStep::AnaliseCurriculo => "analise_curriculo_date",
            CandidateStep::EntrevistaRh => "entrevista_rh_date",
            CandidateStep::EntrevistaTecnica => "entrevista_tecnica_date",
            CandidateStep::ContratacaoConcluida => "contratacao_concluida_date",
        }
    }

    // Nome exibido nas mensagens de sucesso/erro
    pub fn label(self) -> &'static str {
        match self {
            CandidateStep::AnaliseCurriculo => "Análise do Currículo",
            CandidateStep::EntrevistaRh => "Entrevista com RH",
            CandidateStep::EntrevistaTecnica => "Entrevista Técnica",
            CandidateStep::ContratacaoConcluida => "Contratação Concluída",
        }
    }
}

/// O front manda tanto `true/false` quanto textos ("aprovado") como status de etapa.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum StepStatus {
    Flag(bool),
    Label(String),
}

impl StepStatus {
    pub fn into_db_text(self) -> String {
        match self {
            StepStatus::Flag(flag) => flag.to_string(),
            StepStatus::Label(label) => label,
        }
    }
}

// --- Payloads ---

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCandidateStatusPayload {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCandidateActivePayload {
    // O front antigo mandava 'active'
    #[serde(alias = "active")]
    pub ativo: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStepPayload {
    pub status: Option<StepStatus>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStepWithDatePayload {
    pub status: Option<StepStatus>,
    // Se ausente, usa o horário atual
    pub date: Option<DateTime<Utc>>,
}

// --- Lista de rascunho em memória (ver `cache::CandidateScratchList`) ---

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScratchCandidate {
    pub id: i32,
    pub nome: Option<String>,
    pub funcao: Option<String>,
    pub status: Option<String>,
    pub ativo: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateScratchCandidatePayload {
    pub nome: Option<String>,
    pub funcao: Option<String>,
    pub status: Option<String>,
}
