// src/lib.rs
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod repository;
pub mod security;

// Re-export commonly used types
pub use domain::permission::Access;
pub use domain::principal::Principal;
pub use domain::project_model::{Project, ProjectIdentifier};
pub use domain::role::{ProjectRole, RoleSet};
pub use error::{AppError, AppResult};
pub use security::context::{Context, SecurityContext};
pub use security::resolver::GroupRoles;
pub use security::stores::SecurityStores;
