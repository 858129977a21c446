// src/domain/principal.rs

use super::user_model::User;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 認証済みの主体
///
/// 未認証は `Option<Principal>` の `None` で表す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub username: String,
    pub is_system_admin: bool,
    /// 所属ディレクトリグループ（LDAP DN）
    pub group_memberships: BTreeSet<String>,
}

impl Principal {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            is_system_admin: false,
            group_memberships: BTreeSet::new(),
        }
    }

    pub fn with_system_admin(mut self, is_system_admin: bool) -> Self {
        self.is_system_admin = is_system_admin;
        self
    }

    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_memberships
            .extend(groups.into_iter().map(Into::into));
        self
    }

    /// 保存済みユーザーとディレクトリから得たグループから主体を組み立てる
    pub fn from_user<I, S>(user: &User, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(user.username.clone())
            .with_system_admin(user.sysadmin_flag)
            .with_groups(groups)
    }

    pub fn has_groups(&self) -> bool {
        !self.group_memberships.is_empty()
    }
}
