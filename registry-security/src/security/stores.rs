// src/security/stores.rs

//! 権限判定が依存する外部ストアの契約
//!
//! 実装はすべて読み取り専用で、同時に複数リクエストから呼ばれてもよいこと。

use crate::domain::project_member_model::MemberKind;
use crate::domain::project_model::{Project, ProjectIdentifier, ProjectQueryParam};
use crate::domain::user_model::{User, UserCriteria};
use crate::error::AppResult;
use crate::repository::group_repository::{GroupRepository, LdapGroupQueryBuilder};
use crate::repository::member_repository::MemberRepository;
use crate::repository::project_repository::ProjectRepository;
use crate::repository::user_repository::UserRepository;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::collections::BTreeSet;
use std::sync::Arc;

#[async_trait]
pub trait ProjectLookup: Send + Sync {
    /// 存在しないプロジェクトは公開扱いしない（`Ok(false)`）
    async fn is_public(&self, project: &ProjectIdentifier) -> AppResult<bool>;

    async fn get(&self, project: &ProjectIdentifier) -> AppResult<Option<Project>>;

    async fn list(&self, query: &ProjectQueryParam) -> AppResult<Vec<Project>>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, criteria: &UserCriteria) -> AppResult<Option<User>>;
}

#[async_trait]
pub trait RoleStore: Send + Sync {
    /// 直接割り当てられたロールコード
    async fn get_user_project_roles(
        &self,
        user_id: i64,
        project_id: i64,
        kind: MemberKind,
    ) -> AppResult<Vec<String>>;
}

#[async_trait]
pub trait GroupRoleStore: Send + Sync {
    /// グループ経由で割り当てられたロールコード
    async fn get_roles_by_group(
        &self,
        project_id: i64,
        condition: &GroupQueryCondition,
    ) -> AppResult<Vec<String>>;
}

pub trait GroupQueryBuilder: Send + Sync {
    fn build_condition(&self, groups: &BTreeSet<String>) -> GroupQueryCondition;
}

/// グループロール検索の条件（正規化済みのグループ DN）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupQueryCondition {
    group_dns: Vec<String>,
}

impl GroupQueryCondition {
    pub fn new(group_dns: Vec<String>) -> Self {
        Self { group_dns }
    }

    pub fn group_dns(&self) -> &[String] {
        &self.group_dns
    }

    pub fn is_empty(&self) -> bool {
        self.group_dns.is_empty()
    }
}

/// SecurityContext に注入する協調オブジェクト一式
#[derive(Clone)]
pub struct SecurityStores {
    pub projects: Arc<dyn ProjectLookup>,
    pub users: Arc<dyn UserStore>,
    pub roles: Arc<dyn RoleStore>,
    pub group_roles: Arc<dyn GroupRoleStore>,
    pub group_query: Arc<dyn GroupQueryBuilder>,
}

impl SecurityStores {
    pub fn new(
        projects: Arc<dyn ProjectLookup>,
        users: Arc<dyn UserStore>,
        roles: Arc<dyn RoleStore>,
        group_roles: Arc<dyn GroupRoleStore>,
        group_query: Arc<dyn GroupQueryBuilder>,
    ) -> Self {
        Self {
            projects,
            users,
            roles,
            group_roles,
            group_query,
        }
    }

    /// データベース実装で一式を組み立てる
    ///
    /// 接続はリポジトリ間で共有する。
    pub fn from_connection(db: Arc<DatabaseConnection>) -> Self {
        Self::new(
            Arc::new(ProjectRepository::new(Arc::clone(&db))),
            Arc::new(UserRepository::new(Arc::clone(&db))),
            Arc::new(MemberRepository::new(Arc::clone(&db))),
            Arc::new(GroupRepository::new(db)),
            Arc::new(LdapGroupQueryBuilder),
        )
    }
}

impl std::fmt::Debug for SecurityStores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityStores").finish_non_exhaustive()
    }
}
