// src/domain/mod.rs
pub mod permission;
pub mod principal;
pub mod project_member_model;
pub mod project_model;
pub mod role;
pub mod role_model;
pub mod user_group_model;
pub mod user_model;
