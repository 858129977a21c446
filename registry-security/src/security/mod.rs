// src/security/mod.rs
pub mod context;
pub mod resolver;
pub mod stores;
