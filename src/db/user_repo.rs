use sqlx::PgPool;
use crate::{common::error::AppError, models::auth::User};

// O repositório de usuários, responsável por todas as interações com a tabela 'users'
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    // Busca um usuário pelo seu e-mail (NULL nunca encontra ninguém)
    pub async fn find_by_email(&self, email: Option<&str>) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    // Cria um novo usuário no banco de dados
    pub async fn create_user(
        &self,
        nome: Option<&str>,
        email: Option<&str>,
        senha: Option<&str>,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (nome, email, senha) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(nome)
        .bind(email)
        .bind(senha)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }
}
