pub mod auth;
pub mod dashboard_service;
pub mod inventory_service;
pub mod operation_service;
pub mod process_service;
pub mod recruitment_service;
