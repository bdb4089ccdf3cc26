// src/db/dashboard_repo.rs

use sqlx::PgPool;
use crate::{
    common::error::AppError,
    models::dashboard::{DailySales, FinancialReportEntry, MonthlySales, SalesRankEntry, WeeklySales},
};

// Tamanho dos rankings de mais/menos vendidos
pub const RANKING_LIMIT: i64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankOrder {
    BestSellers,
    WorstSellers,
}

impl RankOrder {
    fn sql_direction(self) -> &'static str {
        match self {
            RankOrder::BestSellers => "DESC",
            RankOrder::WorstSellers => "ASC",
        }
    }
}

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 1. Ranking por quantidade vendida
    pub async fn sales_ranking(&self, order: RankOrder) -> Result<Vec<SalesRankEntry>, AppError> {
        let sql = format!(
            r#"
            SELECT vendas.id_produto, produtos.nome, SUM(vendas.quantidade) AS sold
            FROM vendas
            JOIN produtos ON vendas.id_produto = produtos.id
            GROUP BY vendas.id_produto, produtos.nome
            ORDER BY sold {}
            LIMIT $1
            "#,
            order.sql_direction()
        );

        let data = sqlx::query_as::<_, SalesRankEntry>(&sql)
            .bind(RANKING_LIMIT)
            .fetch_all(&self.pool)
            .await?;

        Ok(data)
    }

    // 2. Tendências (dia / semana / mês)
    pub async fn daily_sales(&self) -> Result<Vec<DailySales>, AppError> {
        let data = sqlx::query_as::<_, DailySales>(
            r#"
            SELECT dta AS date, SUM(quantidade) AS sales
            FROM vendas
            GROUP BY dta
            ORDER BY dta
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(data)
    }

    pub async fn weekly_sales(&self) -> Result<Vec<WeeklySales>, AppError> {
        let data = sqlx::query_as::<_, WeeklySales>(
            r#"
            SELECT date_trunc('week', dta)::date AS week, SUM(quantidade) AS sales
            FROM vendas
            GROUP BY week
            ORDER BY week
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(data)
    }

    pub async fn monthly_sales(&self) -> Result<Vec<MonthlySales>, AppError> {
        let data = sqlx::query_as::<_, MonthlySales>(
            r#"
            SELECT date_trunc('month', dta)::date AS month, SUM(quantidade) AS sales
            FROM vendas
            GROUP BY month
            ORDER BY month
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(data)
    }

    // 3. Total vendido por dia
    pub async fn financial_report(&self) -> Result<Vec<FinancialReportEntry>, AppError> {
        let data = sqlx::query_as::<_, FinancialReportEntry>(
            r#"
            SELECT dta, SUM(total_vendido) AS totalvendas
            FROM vendas
            GROUP BY dta
            ORDER BY dta
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(data)
    }
}
