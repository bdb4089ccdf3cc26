pub mod user_repo;
pub use user_repo::UserRepository;
pub mod inventory_repo;
pub use inventory_repo::InventoryRepository;
pub mod operations_repo;
pub use operations_repo::OperationsRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
pub mod recruitment_repo;
pub use recruitment_repo::RecruitmentRepository;
pub mod process_repo;
pub use process_repo::ProcessRepository;
