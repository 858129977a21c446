// src/repository/mod.rs
pub mod group_repository;
pub mod member_repository;
pub mod project_repository;
pub mod user_repository;
