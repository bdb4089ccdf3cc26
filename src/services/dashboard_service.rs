// src/services/dashboard_service.rs

use crate::{
    common::error::AppError,
    db::{dashboard_repo::RankOrder, DashboardRepository},
    models::dashboard::{FinancialReportEntry, SalesRankEntry, SalesTrends},
};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    pub async fn best_sellers(&self) -> Result<Vec<SalesRankEntry>, AppError> {
        self.repo.sales_ranking(RankOrder::BestSellers).await
    }

    pub async fn worst_sellers(&self) -> Result<Vec<SalesRankEntry>, AppError> {
        self.repo.sales_ranking(RankOrder::WorstSellers).await
    }

    pub async fn sales_trends(&self) -> Result<SalesTrends, AppError> {
        let daily = self.repo.daily_sales().await?;
        let weekly = self.repo.weekly_sales().await?;
        let monthly = self.repo.monthly_sales().await?;

        Ok(SalesTrends { daily, weekly, monthly })
    }

    pub async fn financial_report(&self) -> Result<Vec<FinancialReportEntry>, AppError> {
        self.repo.financial_report().await
    }
}
