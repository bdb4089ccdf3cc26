// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(title = "Controle de Processos", description = "Estoque, pedidos, vendas, RH e processos dinâmicos"),
    paths(
        // --- Users ---
        handlers::auth::list_users,
        handlers::auth::create_user,
        handlers::auth::login,

        // --- INVENTORY ---
        handlers::inventory::create_product,
        handlers::inventory::list_stock,
        handlers::inventory::update_product,
        handlers::inventory::delete_product,
        handlers::inventory::add_stock_entry,
        handlers::inventory::add_stock_exit,
        handlers::inventory::stock_movements,
        handlers::inventory::stock_history,

        // --- ORDERS ---
        handlers::operations::list_orders,
        handlers::operations::get_order,
        handlers::operations::create_order,
        handlers::operations::delete_order,
        handlers::operations::update_order_status,

        // --- Sales ---
        handlers::dashboard::best_sellers,
        handlers::dashboard::worst_sellers,
        handlers::dashboard::sales_trends,
        handlers::dashboard::financial_report,

        // --- Recruitment ---
        handlers::recruitment::list_candidates,
        handlers::recruitment::update_candidate_status,
        handlers::recruitment::update_candidate_active,
        handlers::recruitment::complete_candidate_step,
        handlers::recruitment::update_candidate_step,
        handlers::recruitment::update_candidate_step_with_date,
        handlers::recruitment::add_scratch_candidate,
        handlers::recruitment::list_scratch_candidates,
        handlers::recruitment::update_scratch_status,
        handlers::recruitment::update_scratch_active,

        // --- Processes ---
        handlers::processes::create_process,
        handlers::processes::list_processes,
        handlers::processes::delete_process,
        handlers::processes::table_columns,
        handlers::processes::insert_row,
        handlers::processes::fetch_rows,
    ),
    components(
        schemas(
            models::MessageResponse,

            // --- Auth ---
            models::auth::User,
            models::auth::CreateUserPayload,
            models::auth::LoginPayload,
            models::auth::LoginResponse,

            // --- Inventory ---
            models::inventory::Product,
            models::inventory::CreateProductPayload,
            models::inventory::UpdateProductPayload,
            models::inventory::StockEntry,
            models::inventory::StockExit,
            models::inventory::CreateStockEntryPayload,
            models::inventory::CreateStockExitPayload,
            models::inventory::StockEntryResult,
            models::inventory::StockExitResult,
            models::inventory::StockMovementReport,
            models::inventory::StockHistoryEntry,

            // --- Operations ---
            models::operations::Order,
            models::operations::OrderItem,
            models::operations::OrderDetail,
            models::operations::OrderItemPayload,
            models::operations::CreateOrderPayload,
            models::operations::OrderCreated,
            models::operations::UpdateOrderStatusPayload,

            // --- DASHBOARD ---
            models::dashboard::SalesRankEntry,
            models::dashboard::DailySales,
            models::dashboard::WeeklySales,
            models::dashboard::MonthlySales,
            models::dashboard::SalesTrends,
            models::dashboard::FinancialReportEntry,

            // --- Recruitment ---
            models::recruitment::Candidate,
            models::recruitment::CandidateStep,
            models::recruitment::StepStatus,
            models::recruitment::UpdateCandidateStatusPayload,
            models::recruitment::UpdateCandidateActivePayload,
            models::recruitment::UpdateStepPayload,
            models::recruitment::UpdateStepWithDatePayload,
            models::recruitment::ScratchCandidate,
            models::recruitment::CreateScratchCandidatePayload,

            // --- Processes ---
            models::process::Process,
            models::process::ProcessSummary,
            models::process::CreateProcessPayload,
            models::process::TableColumns,
        )
    ),
    tags(
        (name = "Users", description = "Cadastro e login de usuários"),
        (name = "Inventory", description = "Produtos, entradas e saídas de estoque"),
        (name = "Orders", description = "Pedidos e itens"),
        (name = "Sales", description = "Rankings, tendências e relatórios de vendas"),
        (name = "Recruitment", description = "Candidatos e etapas do processo seletivo"),
        (name = "Processes", description = "Processos e tabelas dinâmicas")
    )
)]
pub struct ApiDoc;
