// src/security/context.rs

//! リクエスト単位のセキュリティコンテキスト
//!
//! 判定の優先順位:
//! 1. 公開プロジェクトは誰でも読み取り可（未認証でも）
//! 2. 未認証はそれ以外すべて不可
//! 3. システム管理者はすべて可（プロジェクトの存在確認もしない）
//! 4. 解決済みロール集合で判定
//!
//! 権限判定は常に fail-closed で、エラーは呼び出し側へ返さずログに残す。
//! エラーを返すのはプロジェクト一覧（`get_my_projects`）だけ。

use super::resolver::{GroupRoles, RoleResolver};
use super::stores::SecurityStores;
use crate::domain::permission::{roles_grant, Access};
use crate::domain::principal::Principal;
use crate::domain::project_model::{MemberQuery, Project, ProjectIdentifier, ProjectQueryParam};
use crate::domain::role::RoleSet;
use crate::error::AppResult;
use crate::log_with_context;
use async_trait::async_trait;
use std::sync::Arc;

/// API 層から見た権限判定の窓口
#[async_trait]
pub trait Context: Send + Sync {
    fn is_authenticated(&self) -> bool;

    fn username(&self) -> &str;

    fn is_system_admin(&self) -> bool;

    /// ソリューション（サービス間連携）ユーザーか。ローカル認証では常に false
    fn is_solution_user(&self) -> bool {
        false
    }

    async fn has_read_perm(&self, project: &ProjectIdentifier) -> bool;

    async fn has_write_perm(&self, project: &ProjectIdentifier) -> bool;

    async fn has_all_perm(&self, project: &ProjectIdentifier) -> bool;

    async fn get_project_roles(&self, project: &ProjectIdentifier) -> RoleSet;

    async fn get_my_projects(&self) -> AppResult<Vec<Project>>;
}

#[derive(Debug, Clone)]
pub struct SecurityContext {
    principal: Option<Principal>,
    stores: Arc<SecurityStores>,
}

impl SecurityContext {
    pub fn new(principal: Option<Principal>, stores: Arc<SecurityStores>) -> Self {
        Self { principal, stores }
    }

    pub fn anonymous(stores: Arc<SecurityStores>) -> Self {
        Self::new(None, stores)
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    /// 未認証なら空文字列
    pub fn username(&self) -> &str {
        self.principal
            .as_ref()
            .map_or("", |principal| principal.username.as_str())
    }

    pub fn is_system_admin(&self) -> bool {
        self.principal
            .as_ref()
            .is_some_and(|principal| principal.is_system_admin)
    }

    pub async fn has_read_perm(&self, project: &ProjectIdentifier) -> bool {
        match self.stores.projects.is_public(project).await {
            Ok(true) => return true,
            Ok(false) => {}
            Err(err) => {
                log_with_context!(
                    tracing::Level::ERROR,
                    "Failed to check the public of project",
                    "project" => project,
                    "error_kind" => err.kind(),
                    "error" => err.to_string(),
                );
                return false;
            }
        }

        self.check_role_access(project, Access::Read).await
    }

    pub async fn has_write_perm(&self, project: &ProjectIdentifier) -> bool {
        self.check_role_access(project, Access::Write).await
    }

    pub async fn has_all_perm(&self, project: &ProjectIdentifier) -> bool {
        self.check_role_access(project, Access::All).await
    }

    /// アクセス種別を値として受け取る版
    pub async fn has_perm(&self, project: &ProjectIdentifier, access: Access) -> bool {
        match access {
            Access::Read => self.has_read_perm(project).await,
            Access::Write => self.has_write_perm(project).await,
            Access::All => self.has_all_perm(project).await,
        }
    }

    /// 有効なロール集合（直接ロール優先、なければグループロール）
    pub async fn get_project_roles(&self, project: &ProjectIdentifier) -> RoleSet {
        self.resolver()
            .project_roles(self.principal.as_ref(), project)
            .await
    }

    /// グループ経由のロールのみ（失敗と該当なしを区別する）
    pub async fn get_roles_by_group(&self, project: &ProjectIdentifier) -> GroupRoles {
        self.resolver()
            .group_roles(self.principal.as_ref(), project)
            .await
    }

    /// 自分（または所属グループ）がメンバーのプロジェクト
    pub async fn get_my_projects(&self) -> AppResult<Vec<Project>> {
        let Some(principal) = &self.principal else {
            return Ok(Vec::new());
        };

        let query = ProjectQueryParam {
            member: Some(MemberQuery {
                name: principal.username.clone(),
                group_list: principal.group_memberships.iter().cloned().collect(),
            }),
        };

        self.stores.projects.list(&query).await
    }

    fn resolver(&self) -> RoleResolver<'_> {
        RoleResolver::new(&self.stores)
    }

    /// 認証・管理者・ロールの順で判定する共通処理
    async fn check_role_access(&self, project: &ProjectIdentifier, access: Access) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        if self.is_system_admin() {
            return true;
        }

        let roles = self.get_project_roles(project).await;
        let allowed = roles_grant(&roles, access);
        log_with_context!(
            tracing::Level::DEBUG,
            "Project permission resolved",
            "username" => self.username(),
            "project" => project,
            "access" => access,
            "roles" => &roles,
            "allowed" => allowed,
        );
        allowed
    }
}

#[async_trait]
impl Context for SecurityContext {
    fn is_authenticated(&self) -> bool {
        SecurityContext::is_authenticated(self)
    }

    fn username(&self) -> &str {
        SecurityContext::username(self)
    }

    fn is_system_admin(&self) -> bool {
        SecurityContext::is_system_admin(self)
    }

    async fn has_read_perm(&self, project: &ProjectIdentifier) -> bool {
        SecurityContext::has_read_perm(self, project).await
    }

    async fn has_write_perm(&self, project: &ProjectIdentifier) -> bool {
        SecurityContext::has_write_perm(self, project).await
    }

    async fn has_all_perm(&self, project: &ProjectIdentifier) -> bool {
        SecurityContext::has_all_perm(self, project).await
    }

    async fn get_project_roles(&self, project: &ProjectIdentifier) -> RoleSet {
        SecurityContext::get_project_roles(self, project).await
    }

    async fn get_my_projects(&self) -> AppResult<Vec<Project>> {
        SecurityContext::get_my_projects(self).await
    }
}
