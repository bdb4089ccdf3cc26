pub mod auth;
pub mod dashboard;
pub mod inventory;
pub mod operations;
pub mod process;
pub mod recruitment;

use serde::Serialize;
use utoipa::ToSchema;

// Resposta padrão dos endpoints que só confirmam a operação
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Produto atualizado com sucesso")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
