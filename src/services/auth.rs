// src/services/auth.rs

use bcrypt::{hash, verify, BcryptError};

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{CreateUserPayload, User},
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
}

impl AuthService {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.list_users().await
    }

    pub async fn register_user(&self, payload: CreateUserPayload) -> Result<User, AppError> {
        // Hashing em thread separada (bcrypt é CPU-bound)
        let hashed_password = match payload.senha {
            Some(senha) => Some(
                tokio::task::spawn_blocking(move || hash(&senha, bcrypt::DEFAULT_COST))
                    .await
                    .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??,
            ),
            None => None,
        };

        let user = self
            .user_repo
            .create_user(
                payload.nome.as_deref(),
                payload.email.as_deref(),
                hashed_password.as_deref(),
            )
            .await?;

        tracing::info!("Usuário {} cadastrado", user.id);
        Ok(user)
    }

    /// Devolve o nome do usuário quando e-mail e senha conferem.
    pub async fn login_user(
        &self,
        email: Option<&str>,
        senha: Option<&str>,
    ) -> Result<Option<String>, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let (Some(provided), Some(stored)) = (senha, user.senha.clone()) else {
            return Err(AppError::InvalidCredentials);
        };
        let provided = provided.to_owned();

        // Executa a verificação em um thread separado
        let is_password_valid =
            tokio::task::spawn_blocking(move || password_matches(&provided, &stored))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user.nome)
    }
}

pub fn is_bcrypt_hash(stored: &str) -> bool {
    stored.len() == 60
        && ["$2a$", "$2b$", "$2x$", "$2y$"]
            .iter()
            .any(|prefix| stored.starts_with(prefix))
}

/// Senhas novas são hash bcrypt; registros antigos ainda guardam o texto puro
/// e são comparados byte a byte.
pub fn password_matches(provided: &str, stored: &str) -> Result<bool, BcryptError> {
    if is_bcrypt_hash(stored) {
        verify(provided, stored)
    } else {
        Ok(provided == stored)
    }
}
