// src/handlers.rs

pub mod auth;
pub mod dashboard;
pub mod inventory;
pub mod operations;
pub mod processes;
pub mod recruitment;
