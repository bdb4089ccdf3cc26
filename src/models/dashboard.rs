// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// 1. Ranking de produtos (mais / menos vendidos)
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct SalesRankEntry {
    pub id_produto: Option<i32>,
    pub nome: Option<String>,
    // SUM(integer) no Postgres vira bigint
    #[schema(example = 320)]
    pub sold: Option<i64>,
}

// 2. Tendências de vendas
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct DailySales {
    pub date: Option<NaiveDate>,
    pub sales: Option<i64>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct WeeklySales {
    // Segunda-feira da semana
    pub week: Option<NaiveDate>,
    pub sales: Option<i64>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct MonthlySales {
    // Primeiro dia do mês
    pub month: Option<NaiveDate>,
    pub sales: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SalesTrends {
    pub daily: Vec<DailySales>,
    pub weekly: Vec<WeeklySales>,
    pub monthly: Vec<MonthlySales>,
}

// 3. Relatório financeiro (total vendido por dia)
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct FinancialReportEntry {
    pub dta: Option<NaiveDate>,
    pub totalvendas: Option<Decimal>,
}
