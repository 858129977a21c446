// src/security/resolver.rs

//! 主体とプロジェクトから有効なロール集合を解決する
//!
//! 直接のメンバーロールが1つでもあればそれを返し、グループ経由のロールは参照しない。
//! どの経路で失敗しても結果は空集合（= 権限なし）になる。

use super::stores::SecurityStores;
use crate::domain::principal::Principal;
use crate::domain::project_member_model::MemberKind;
use crate::domain::project_model::{Project, ProjectIdentifier};
use crate::domain::role::{roles_from_codes, RoleSet};
use crate::domain::user_model::UserCriteria;
use crate::log_with_context;

/// グループ経由のロール解決結果
///
/// 「該当ロールなし」と「問い合わせ失敗」を区別して保持する。
/// 現在の呼び出し側はどちらも権限なしとして扱う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupRoles {
    Granted(RoleSet),
    Empty,
    Failed,
}

impl GroupRoles {
    pub fn is_failed(&self) -> bool {
        matches!(self, GroupRoles::Failed)
    }

    pub fn roles(&self) -> Option<&RoleSet> {
        match self {
            GroupRoles::Granted(roles) => Some(roles),
            GroupRoles::Empty | GroupRoles::Failed => None,
        }
    }

    /// 権限判定用に集合へ畳み込む（Failed も空集合）
    pub fn into_roles(self) -> RoleSet {
        match self {
            GroupRoles::Granted(roles) => roles,
            GroupRoles::Empty | GroupRoles::Failed => RoleSet::new(),
        }
    }
}

pub struct RoleResolver<'a> {
    stores: &'a SecurityStores,
}

impl<'a> RoleResolver<'a> {
    pub fn new(stores: &'a SecurityStores) -> Self {
        Self { stores }
    }

    /// 有効なロール集合（直接ロール優先、なければグループロール）
    pub async fn project_roles(
        &self,
        principal: Option<&Principal>,
        project: &ProjectIdentifier,
    ) -> RoleSet {
        let Some(principal) = principal else {
            return RoleSet::new();
        };

        if let Err(err) = project.validate() {
            log_with_context!(
                tracing::Level::DEBUG,
                "Invalid project identifier",
                "project" => project,
                "error" => err.to_string(),
            );
            return RoleSet::new();
        }

        let user = match self
            .stores
            .users
            .get_user(&UserCriteria::by_username(principal.username.as_str()))
            .await
        {
            Ok(Some(user)) => user,
            Ok(None) => {
                log_with_context!(
                    tracing::Level::DEBUG,
                    "User not found",
                    "username" => &principal.username,
                );
                return RoleSet::new();
            }
            Err(err) => {
                log_with_context!(
                    tracing::Level::ERROR,
                    "Failed to get user",
                    "username" => &principal.username,
                    "error_kind" => err.kind(),
                    "error" => err.to_string(),
                );
                return RoleSet::new();
            }
        };

        let Some(project) = self.lookup_project(project).await else {
            return RoleSet::new();
        };

        let codes = match self
            .stores
            .roles
            .get_user_project_roles(user.user_id, project.project_id, MemberKind::User)
            .await
        {
            Ok(codes) => codes,
            Err(err) => {
                log_with_context!(
                    tracing::Level::ERROR,
                    "Failed to get roles of user to project",
                    "user_id" => user.user_id,
                    "project_id" => project.project_id,
                    "error" => err.to_string(),
                );
                return RoleSet::new();
            }
        };

        let roles = roles_from_codes(&codes);
        if !roles.is_empty() {
            return roles;
        }

        self.group_roles_for(principal, &project).await.into_roles()
    }

    /// グループ経由のロール（プロジェクトを自前で解決する）
    pub async fn group_roles(
        &self,
        principal: Option<&Principal>,
        project: &ProjectIdentifier,
    ) -> GroupRoles {
        let Some(principal) = principal else {
            return GroupRoles::Empty;
        };
        if !principal.has_groups() || project.validate().is_err() {
            return GroupRoles::Empty;
        }

        match self.lookup_project(project).await {
            Some(project) => self.group_roles_for(principal, &project).await,
            None => GroupRoles::Empty,
        }
    }

    async fn group_roles_for(&self, principal: &Principal, project: &Project) -> GroupRoles {
        if !principal.has_groups() {
            return GroupRoles::Empty;
        }

        let condition = self
            .stores
            .group_query
            .build_condition(&principal.group_memberships);
        if condition.is_empty() {
            return GroupRoles::Empty;
        }

        match self
            .stores
            .group_roles
            .get_roles_by_group(project.project_id, &condition)
            .await
        {
            Ok(codes) => {
                let roles = roles_from_codes(&codes);
                if roles.is_empty() {
                    GroupRoles::Empty
                } else {
                    GroupRoles::Granted(roles)
                }
            }
            Err(err) => {
                // TODO: 失敗時に権限なしで良いのか（再試行・エラー返却など）はプロダクト側の判断待ち
                log_with_context!(
                    tracing::Level::WARN,
                    "Failed to get group roles; treating as no permission",
                    "username" => &principal.username,
                    "project_id" => project.project_id,
                    "error" => err.to_string(),
                );
                GroupRoles::Failed
            }
        }
    }

    async fn lookup_project(&self, project: &ProjectIdentifier) -> Option<Project> {
        match self.stores.projects.get(project).await {
            Ok(Some(found)) => Some(found),
            Ok(None) => {
                log_with_context!(
                    tracing::Level::DEBUG,
                    "Project not found",
                    "project" => project,
                );
                None
            }
            Err(err) => {
                log_with_context!(
                    tracing::Level::ERROR,
                    "Failed to get project",
                    "project" => project,
                    "error" => err.to_string(),
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::role::ProjectRole;

    #[test]
    fn test_group_roles_collapse() {
        let granted = GroupRoles::Granted(RoleSet::from([ProjectRole::Guest]));
        assert_eq!(granted.roles(), Some(&RoleSet::from([ProjectRole::Guest])));
        assert_eq!(granted.into_roles(), RoleSet::from([ProjectRole::Guest]));

        assert!(GroupRoles::Empty.into_roles().is_empty());
        assert!(GroupRoles::Failed.into_roles().is_empty());
        assert!(GroupRoles::Failed.is_failed());
        assert!(!GroupRoles::Empty.is_failed());
        assert_eq!(GroupRoles::Failed.roles(), None);
    }
}
