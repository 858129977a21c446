// src/domain/permission.rs

use super::role::{ProjectRole, RoleSet};
use serde::{Deserialize, Serialize};

/// プロジェクトに対するアクセス種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Read,
    Write,
    All,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Read => "read",
            Access::Write => "write",
            Access::All => "all",
        }
    }
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ProjectRole {
    /// このロールが指定のアクセスを許可するか
    pub fn grants(&self, access: Access) -> bool {
        match access {
            Access::Read => true,
            Access::Write => matches!(self, ProjectRole::ProjectAdmin | ProjectRole::Developer),
            Access::All => matches!(self, ProjectRole::ProjectAdmin),
        }
    }
}

/// ロール集合のいずれかがアクセスを許可するか
pub fn roles_grant(roles: &RoleSet, access: Access) -> bool {
    roles.iter().any(|role| role.grants(access))
}
