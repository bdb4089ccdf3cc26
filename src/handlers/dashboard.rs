// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    // Importamos os models para referenciar no Swagger
    models::dashboard::{FinancialReportEntry, SalesRankEntry, SalesTrends},
};

// GET /api/vendas/mais-vendidos
#[utoipa::path(
    get,
    path = "/api/vendas/mais-vendidos",
    tag = "Sales",
    responses(
        (status = 200, description = "Os 10 produtos com maior quantidade vendida", body = Vec<SalesRankEntry>)
    )
)]
pub async fn best_sellers(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let ranking = app_state
        .dashboard_service
        .best_sellers()
        .await
        .map_err(|e| e.to_api_error("Erro ao obter produtos mais vendidos"))?;

    Ok((StatusCode::OK, Json(ranking)))
}

// GET /api/vendas/menos-vendidos
#[utoipa::path(
    get,
    path = "/api/vendas/menos-vendidos",
    tag = "Sales",
    responses(
        (status = 200, description = "Os 10 produtos com menor quantidade vendida", body = Vec<SalesRankEntry>)
    )
)]
pub async fn worst_sellers(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let ranking = app_state
        .dashboard_service
        .worst_sellers()
        .await
        .map_err(|e| e.to_api_error("Erro ao obter produtos menos vendidos"))?;

    Ok((StatusCode::OK, Json(ranking)))
}

// GET /api/vendas/tendencias
#[utoipa::path(
    get,
    path = "/api/vendas/tendencias",
    tag = "Sales",
    responses(
        (status = 200, description = "Quantidade vendida por dia, semana e mês", body = SalesTrends)
    )
)]
pub async fn sales_trends(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let trends = app_state
        .dashboard_service
        .sales_trends()
        .await
        .map_err(|e| e.to_api_error("Erro ao obter tendências de vendas"))?;

    Ok((StatusCode::OK, Json(trends)))
}

// GET /api/vendas/relatorios-financeiros
#[utoipa::path(
    get,
    path = "/api/vendas/relatorios-financeiros",
    tag = "Sales",
    responses(
        (status = 200, description = "Total vendido por dia", body = Vec<FinancialReportEntry>)
    )
)]
pub async fn financial_report(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let report = app_state
        .dashboard_service
        .financial_report()
        .await
        .map_err(|e| e.to_api_error("Erro ao obter relatórios financeiros"))?;

    Ok((StatusCode::OK, Json(report)))
}
