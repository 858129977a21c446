// src/domain/role.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// プロジェクト単位のロール
///
/// 宣言順がそのまま権限の強さの順序（`Ord`）になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectRole {
    Guest,
    Developer,
    ProjectAdmin,
}

/// 解決済みロールの集合（空集合 = プロジェクト権限なし）
pub type RoleSet = BTreeSet<ProjectRole>;

impl ProjectRole {
    pub const ALL: [ProjectRole; 3] = [
        ProjectRole::ProjectAdmin,
        ProjectRole::Developer,
        ProjectRole::Guest,
    ];

    /// ストアのロールコードからロールへ変換
    ///
    /// 未知のコードは `None`（権限昇格として扱わない）。
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MDRWS" => Some(ProjectRole::ProjectAdmin),
            "RWS" => Some(ProjectRole::Developer),
            "RS" => Some(ProjectRole::Guest),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ProjectRole::ProjectAdmin => "MDRWS",
            ProjectRole::Developer => "RWS",
            ProjectRole::Guest => "RS",
        }
    }

    /// `role` テーブルの role_id
    pub fn role_id(&self) -> i32 {
        match self {
            ProjectRole::ProjectAdmin => 1,
            ProjectRole::Developer => 2,
            ProjectRole::Guest => 3,
        }
    }

    pub fn from_role_id(role_id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.role_id() == role_id)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectRole::ProjectAdmin => "projectAdmin",
            ProjectRole::Developer => "developer",
            ProjectRole::Guest => "guest",
        }
    }

    /// 権限レベルを数値で取得（高いほど強い権限）
    pub fn permission_level(&self) -> u8 {
        match self {
            ProjectRole::ProjectAdmin => 100,
            ProjectRole::Developer => 50,
            ProjectRole::Guest => 10,
        }
    }
}

impl std::fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProjectRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "projectadmin" | "project_admin" => Ok(ProjectRole::ProjectAdmin),
            "developer" => Ok(ProjectRole::Developer),
            "guest" => Ok(ProjectRole::Guest),
            _ => Err(format!("Invalid project role: {}", s)),
        }
    }
}

/// ロールコード列をロール集合へ変換（未知のコードは黙って捨てる）
pub fn roles_from_codes<I, S>(codes: I) -> RoleSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    codes
        .into_iter()
        .filter_map(|code| ProjectRole::from_code(code.as_ref()))
        .collect()
}

/// 最も強いロール
pub fn highest_role(roles: &RoleSet) -> Option<ProjectRole> {
    roles.iter().next_back().copied()
}
