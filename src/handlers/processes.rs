// src/handlers/processes.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    models::{
        process::{CreateProcessPayload, Process, ProcessSummary, TableColumns},
        MessageResponse,
    },
};

// =============================================================================
//  1. REGISTRO DE PROCESSOS
// =============================================================================

// POST /api/adcProcessos
#[utoipa::path(
    post,
    path = "/api/adcProcessos",
    tag = "Processes",
    request_body = CreateProcessPayload,
    responses(
        (status = 201, description = "Tabela criada e processo registrado", body = MessageResponse),
        (status = 400, description = "Nome de tabela ou coluna inválido")
    )
)]
pub async fn create_process(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProcessPayload>,
) -> Result<impl IntoResponse, ApiError> {
    const CONTEXT: &str = "Erro ao criar novo processo";

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(CONTEXT))?;

    let process: Process = app_state
        .process_service
        .create_process(&payload)
        .await
        .map_err(|e| e.to_api_error(CONTEXT))?;

    tracing::debug!("Processo {} registrado", process.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Processo criado com sucesso")),
    ))
}

// GET /api/processes
#[utoipa::path(
    get,
    path = "/api/processes",
    tag = "Processes",
    responses(
        (status = 200, description = "Processos registrados", body = Vec<ProcessSummary>)
    )
)]
pub async fn list_processes(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let processes = app_state
        .process_service
        .list_processes()
        .await
        .map_err(|e| e.to_api_error("Erro ao buscar processos"))?;

    Ok(Json(processes))
}

// DELETE /api/processos/{titulo}
#[utoipa::path(
    delete,
    path = "/api/processos/{titulo}",
    tag = "Processes",
    params(("titulo" = String, Path, description = "Nome da tabela do processo")),
    responses(
        (status = 200, description = "Tabela removida e registro apagado", body = MessageResponse),
        (status = 400, description = "Nome inválido ou tabela reservada"),
        (status = 404, description = "Processo não encontrado")
    )
)]
pub async fn delete_process(
    State(app_state): State<AppState>,
    Path(titulo): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .process_service
        .delete_process(&titulo)
        .await
        .map_err(|e| e.to_api_error("Erro ao excluir processo"))?;

    Ok(Json(MessageResponse::new("Processo excluído com sucesso")))
}

// =============================================================================
//  2. TABELAS DINÂMICAS
// =============================================================================

// GET /api/{table_name}
#[utoipa::path(
    get,
    path = "/api/{table_name}",
    tag = "Processes",
    params(("table_name" = String, Path, description = "Tabela registrada em 'processos'")),
    responses(
        (status = 200, description = "Colunas da tabela", body = TableColumns),
        (status = 404, description = "Processo não encontrado")
    )
)]
pub async fn table_columns(
    State(app_state): State<AppState>,
    Path(table_name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let columns = app_state
        .process_service
        .table_columns(&table_name)
        .await
        .map_err(|e| e.to_api_error("Erro ao buscar colunas da tabela"))?;

    Ok(Json(columns))
}

// POST /api/{table_name}
#[utoipa::path(
    post,
    path = "/api/{table_name}",
    tag = "Processes",
    request_body = Object,
    params(("table_name" = String, Path, description = "Tabela registrada em 'processos'")),
    responses(
        (status = 201, description = "Linha inserida", body = MessageResponse),
        (status = 400, description = "Coluna não registrada ou corpo inválido"),
        (status = 404, description = "Processo não encontrado")
    )
)]
pub async fn insert_row(
    State(app_state): State<AppState>,
    Path(table_name): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .process_service
        .insert_row(&table_name, body)
        .await
        .map_err(|e| e.to_api_error("Erro ao inserir dados"))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Dados inseridos com sucesso")),
    ))
}

// GET /api/{table_name}/data
#[utoipa::path(
    get,
    path = "/api/{table_name}/data",
    tag = "Processes",
    params(("table_name" = String, Path, description = "Tabela registrada em 'processos'")),
    responses(
        (status = 200, description = "Linhas da tabela como objetos JSON", body = Vec<Object>),
        (status = 404, description = "Processo não encontrado")
    )
)]
pub async fn fetch_rows(
    State(app_state): State<AppState>,
    Path(table_name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = app_state
        .process_service
        .fetch_rows(&table_name)
        .await
        .map_err(|e| e.to_api_error("Erro ao buscar dados"))?;

    Ok(Json(rows))
}
