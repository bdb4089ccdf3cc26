// src/config.rs

use crate::{
    cache::CandidateScratchList,
    db::{
        DashboardRepository, InventoryRepository, OperationsRepository, ProcessRepository,
        RecruitmentRepository, UserRepository,
    },
    services::{
        auth::AuthService, dashboard_service::DashboardService, inventory_service::InventoryService,
        operation_service::OperationsService, process_service::ProcessService,
        recruitment_service::RecruitmentService,
    },
};
use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

// Porta histórica do serviço
pub const DEFAULT_PORT: u16 = 6543;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let port = parse_or("PORT", DEFAULT_PORT)?;
        let max_connections = parse_or("DB_MAX_CONNECTIONS", 5)?;
        let acquire_timeout = Duration::from_secs(parse_or("DB_ACQUIRE_TIMEOUT_SECS", 3)?);

        Ok(Self {
            database_url,
            port,
            max_connections,
            acquire_timeout,
        })
    }

    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{key} inválida: '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub inventory_service: InventoryService,
    pub operations_service: OperationsService,
    pub dashboard_service: DashboardService,
    pub recruitment_service: RecruitmentService,
    pub process_service: ProcessService,
    pub candidate_scratch: CandidateScratchList,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = config
            .pool_options()
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool))
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_pool(db_pool: PgPool) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let inventory_repo = InventoryRepository::new(db_pool.clone());
        let operations_repo = OperationsRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());
        let recruitment_repo = RecruitmentRepository::new(db_pool.clone());
        let process_repo = ProcessRepository::new(db_pool.clone());

        Self {
            auth_service: AuthService::new(user_repo),
            inventory_service: InventoryService::new(inventory_repo, db_pool.clone()),
            operations_service: OperationsService::new(operations_repo, db_pool.clone()),
            dashboard_service: DashboardService::new(dashboard_repo),
            recruitment_service: RecruitmentService::new(recruitment_repo),
            process_service: ProcessService::new(process_repo, db_pool.clone()),
            candidate_scratch: CandidateScratchList::default(),
            db_pool,
        }
    }
}
