// src/common/error.rs

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Erros de domínio e de infraestrutura. Cada handler converte para ApiError
// com a mensagem de contexto do endpoint (ver `to_api_error`).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Um ou mais campos são inválidos.")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Usuário ou senha inválidos")]
    InvalidCredentials,

    #[error("Produto não encontrado")]
    ProductNotFound,

    #[error("Pedido não encontrado")]
    OrderNotFound,

    #[error("Candidato não encontrado")]
    CandidateNotFound,

    #[error("Processo '{0}' não encontrado")]
    ProcessNotFound(String),

    #[error("Quantidade insuficiente em estoque")]
    InsufficientStock,

    #[error("Identificador inválido: '{0}'")]
    InvalidIdentifier(String),

    #[error("O nome '{0}' é reservado pelo sistema")]
    ReservedTable(String),

    #[error("A coluna '{column}' não pertence ao processo '{table}'")]
    UnknownColumn { table: String, column: String },

    #[error("A coluna '{0}' foi informada mais de uma vez")]
    DuplicateColumn(String),

    #[error("O corpo da requisição deve ser um objeto JSON")]
    ExpectedJsonObject,

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InsufficientStock
            | AppError::InvalidIdentifier(_)
            | AppError::ReservedTable(_)
            | AppError::UnknownColumn { .. }
            | AppError::DuplicateColumn(_)
            | AppError::ExpectedJsonObject => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::ProductNotFound
            | AppError::OrderNotFound
            | AppError::CandidateNotFound
            | AppError::ProcessNotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converte para a resposta do endpoint.
    ///
    /// Erros 5xx são logados com o detalhe e respondem só com `context`
    /// (a mensagem fixa do endpoint, ex: "Erro ao adicionar produto").
    /// Os demais respondem com a própria mensagem do erro.
    pub fn to_api_error(self, context: &str) -> ApiError {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("{}: {}", context, self);
            return ApiError {
                status,
                message: context.to_string(),
                details: None,
                error_field: true,
            };
        }

        let details = match &self {
            AppError::ValidationError(errors) => Some(validation_details(errors)),
            _ => None,
        };

        ApiError {
            status,
            message: self.to_string(),
            details,
            error_field: false,
        }
    }
}

fn validation_details(errors: &validator::ValidationErrors) -> HashMap<String, Vec<String>> {
    let mut details = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), messages);
    }
    details
}

// O que os handlers devolvem de fato.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<HashMap<String, Vec<String>>>,
    // true => corpo `{"error": ...}` (sempre para 5xx)
    pub error_field: bool,
}

impl ApiError {
    /// Responde com `{"error": message}` mesmo sendo 4xx; rotas cujo cliente
    /// já lê a chave "error" (ex: exclusão de pedido inexistente).
    pub fn with_error_field(mut self) -> Self {
        self.error_field = true;
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // 4xx usam "message", 5xx (e rotas marcadas) usam "error"
        let body = if self.error_field {
            json!({ "error": self.message })
        } else if let Some(details) = self.details {
            json!({ "message": self.message, "details": details })
        } else {
            json!({ "message": self.message })
        };

        (self.status, Json(body)).into_response()
    }
}
