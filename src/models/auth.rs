// src/models/auth.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Representa um usuário vindo da tabela 'users'
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Maria Souza")]
    pub nome: Option<String>,
    #[schema(example = "maria@empresa.com")]
    pub email: Option<String>,

    // Hash bcrypt (ou texto puro em registros antigos)
    #[serde(skip_serializing)] // IMPORTANTE para segurança
    #[schema(ignore)]
    pub senha: Option<String>,
}

// Dados para cadastro de um novo usuário
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserPayload {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
}

// Dados para login
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub senha: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Maria Souza")]
    pub nome: Option<String>,
}
