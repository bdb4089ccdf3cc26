// src/handlers/recruitment.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    models::{
        recruitment::{
            Candidate, CandidateStep, CreateScratchCandidatePayload, ScratchCandidate,
            UpdateCandidateActivePayload, UpdateCandidateStatusPayload, UpdateStepPayload,
            UpdateStepWithDatePayload,
        },
        MessageResponse,
    },
};

// =============================================================================
//  1. CANDIDATOS PERSISTIDOS (tabela 'candidatos')
// =============================================================================

// GET /candidatos
#[utoipa::path(
    get,
    path = "/candidatos",
    tag = "Recruitment",
    responses(
        (status = 200, description = "Candidatos cadastrados", body = Vec<Candidate>)
    )
)]
pub async fn list_candidates(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let candidates = app_state
        .recruitment_service
        .list_candidates()
        .await
        .map_err(|e| e.to_api_error("Erro ao buscar candidatos"))?;

    Ok(Json(candidates))
}

// PUT /candidatos/{id}/status
#[utoipa::path(
    put,
    path = "/candidatos/{id}/status",
    tag = "Recruitment",
    request_body = UpdateCandidateStatusPayload,
    params(("id" = i32, Path, description = "ID do candidato")),
    responses(
        (status = 200, description = "Status alterado", body = MessageResponse),
        (status = 404, description = "Candidato não encontrado")
    )
)]
pub async fn update_candidate_status(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCandidateStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .recruitment_service
        .update_status(id, payload.status.as_deref())
        .await
        .map_err(|e| e.to_api_error("Erro ao atualizar status do candidato"))?;

    Ok(Json(MessageResponse::new("Status atualizado com sucesso")))
}

// PUT /candidatos/{id}/ativo
#[utoipa::path(
    put,
    path = "/candidatos/{id}/ativo",
    tag = "Recruitment",
    request_body = UpdateCandidateActivePayload,
    params(("id" = i32, Path, description = "ID do candidato")),
    responses(
        (status = 200, description = "Flag de atividade alterada", body = MessageResponse),
        (status = 404, description = "Candidato não encontrado")
    )
)]
pub async fn update_candidate_active(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCandidateActivePayload>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .recruitment_service
        .update_active(id, payload.ativo)
        .await
        .map_err(|e| e.to_api_error("Erro ao atualizar status de atividade do candidato"))?;

    Ok(Json(MessageResponse::new("Status de atividade atualizado com sucesso")))
}

// PUT /candidatos/{id}/passos/{step}
// Grava o status enviado e a data atual da etapa.
#[utoipa::path(
    put,
    path = "/candidatos/{id}/passos/{step}",
    tag = "Recruitment",
    request_body = UpdateStepPayload,
    params(
        ("id" = i32, Path, description = "ID do candidato"),
        ("step" = CandidateStep, Path, description = "Etapa do processo seletivo")
    ),
    responses(
        (status = 200, description = "Etapa marcada", body = MessageResponse),
        (status = 404, description = "Candidato não encontrado")
    )
)]
pub async fn complete_candidate_step(
    State(app_state): State<AppState>,
    Path((id, step)): Path<(i32, CandidateStep)>,
    Json(payload): Json<UpdateStepPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let error_context = format!("Erro ao atualizar {}", step.label());

    app_state
        .recruitment_service
        .update_step(id, step, payload.status, None)
        .await
        .map_err(|e| e.to_api_error(&error_context))?;

    Ok(Json(MessageResponse::new(format!("{} atualizada com sucesso", step.label()))))
}

// PUT /api/rh/candidatos/{id}/{step}
// Só o status; a data da etapa não muda.
#[utoipa::path(
    put,
    path = "/api/rh/candidatos/{id}/{step}",
    tag = "Recruitment",
    request_body = UpdateStepPayload,
    params(
        ("id" = i32, Path, description = "ID do candidato"),
        ("step" = CandidateStep, Path, description = "Etapa do processo seletivo")
    ),
    responses(
        (status = 200, description = "Status da etapa gravado", body = MessageResponse),
        (status = 404, description = "Candidato não encontrado")
    )
)]
pub async fn update_candidate_step(
    State(app_state): State<AppState>,
    Path((id, step)): Path<(i32, CandidateStep)>,
    Json(payload): Json<UpdateStepPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let error_context = format!("Erro ao atualizar {}", step.label());

    app_state
        .recruitment_service
        .update_step_status(id, step, payload.status)
        .await
        .map_err(|e| e.to_api_error(&error_context))?;

    Ok(Json(MessageResponse::new(format!("{} atualizada com sucesso", step.label()))))
}

// PUT /api/rh/candidatos/{id}/steps/{step}
#[utoipa::path(
    put,
    path = "/api/rh/candidatos/{id}/steps/{step}",
    tag = "Recruitment",
    request_body = UpdateStepWithDatePayload,
    params(
        ("id" = i32, Path, description = "ID do candidato"),
        ("step" = CandidateStep, Path, description = "Etapa do processo seletivo")
    ),
    responses(
        (status = 200, description = "Candidato após a atualização", body = Candidate),
        (status = 404, description = "Candidato não encontrado")
    )
)]
pub async fn update_candidate_step_with_date(
    State(app_state): State<AppState>,
    Path((id, step)): Path<(i32, CandidateStep)>,
    Json(payload): Json<UpdateStepWithDatePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let candidate = app_state
        .recruitment_service
        .update_step(id, step, payload.status, payload.date)
        .await
        .map_err(|e| e.to_api_error("Erro ao atualizar status"))?;

    Ok(Json(candidate))
}

// =============================================================================
//  2. LISTA EM MEMÓRIA (/api/rh/candidatos)
// =============================================================================

// POST /api/rh/candidatos
#[utoipa::path(
    post,
    path = "/api/rh/candidatos",
    tag = "Recruitment",
    request_body = CreateScratchCandidatePayload,
    responses(
        (status = 201, description = "Candidato adicionado à lista em memória", body = ScratchCandidate)
    )
)]
pub async fn add_scratch_candidate(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateScratchCandidatePayload>,
) -> impl IntoResponse {
    let candidate = app_state
        .candidate_scratch
        .add(payload.nome, payload.funcao, payload.status)
        .await;

    (StatusCode::CREATED, Json(candidate))
}

// GET /api/rh/candidatos
#[utoipa::path(
    get,
    path = "/api/rh/candidatos",
    tag = "Recruitment",
    responses(
        (status = 200, description = "Lista em memória", body = Vec<ScratchCandidate>)
    )
)]
pub async fn list_scratch_candidates(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.candidate_scratch.list().await)
}

// PUT /api/rh/candidatos/{id}/status
#[utoipa::path(
    put,
    path = "/api/rh/candidatos/{id}/status",
    tag = "Recruitment",
    request_body = UpdateCandidateStatusPayload,
    params(("id" = i32, Path, description = "Posição do candidato na lista")),
    responses(
        (status = 200, description = "Candidato atualizado", body = ScratchCandidate),
        (status = 404, description = "Candidato não encontrado")
    )
)]
pub async fn update_scratch_status(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCandidateStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let candidate = app_state
        .candidate_scratch
        .set_status(id, payload.status)
        .await
        .ok_or_else(|| AppError::CandidateNotFound.to_api_error("Candidato não encontrado"))?;

    Ok(Json(candidate))
}

// PUT /api/rh/candidatos/{id}/ativo
#[utoipa::path(
    put,
    path = "/api/rh/candidatos/{id}/ativo",
    tag = "Recruitment",
    request_body = UpdateCandidateActivePayload,
    params(("id" = i32, Path, description = "Posição do candidato na lista")),
    responses(
        (status = 200, description = "Candidato atualizado", body = ScratchCandidate),
        (status = 404, description = "Candidato não encontrado")
    )
)]
pub async fn update_scratch_active(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCandidateActivePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let candidate = app_state
        .candidate_scratch
        .set_active(id, payload.ativo)
        .await
        .ok_or_else(|| AppError::CandidateNotFound.to_api_error("Candidato não encontrado"))?;

    Ok(Json(candidate))
}
