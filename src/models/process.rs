// src/models/process.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::db_utils::{validate_column_list, validate_identifier};

// Registro de um processo (tabela 'processos'). É a allow-list das
// tabelas dinâmicas: só o que estiver aqui pode ser lido ou escrito.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Process {
    pub id: i32,
    #[schema(example = "Onboarding")]
    pub nome: Option<String>,
    #[schema(example = "onboarding")]
    pub tabela: String,
    #[schema(example = json!(["colaborador", "etapa"]))]
    pub colunas: Vec<String>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct ProcessSummary {
    #[schema(example = "Onboarding")]
    pub title: Option<String>,
    #[schema(example = "onboarding")]
    pub path: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcessPayload {
    #[schema(example = "Onboarding")]
    pub process_name: Option<String>,

    #[validate(custom(function = "validate_identifier"))]
    #[schema(example = "onboarding")]
    pub table_name: String,

    #[validate(custom(function = "validate_column_list"))]
    #[schema(example = json!(["colaborador", "etapa"]))]
    pub columns: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TableColumns {
    pub columns: Vec<String>,
}
