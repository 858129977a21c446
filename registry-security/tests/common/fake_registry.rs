// tests/common/fake_registry.rs

//! インメモリの協調オブジェクト（プロジェクト・ユーザー・ロール・グループロール）

use async_trait::async_trait;
use chrono::Utc;
use registry_security::domain::project_member_model::MemberKind;
use registry_security::domain::project_model::{Project, ProjectIdentifier, ProjectQueryParam};
use registry_security::domain::user_model::{User, UserCriteria};
use registry_security::error::{AppError, AppResult};
use registry_security::repository::group_repository::LdapGroupQueryBuilder;
use registry_security::security::stores::{
    GroupQueryCondition, GroupRoleStore, ProjectLookup, RoleStore, SecurityStores, UserStore,
};
use registry_security::{Principal, SecurityContext};
use sea_orm::DbErr;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const DEV_GROUP: &str = "cn=dev,ou=groups,dc=example,dc=com";
pub const QA_GROUP: &str = "cn=qa,ou=groups,dc=example,dc=com";

/// 各ストアを任意に失敗させられる箇所
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failure {
    IsPublic,
    GetProject,
    GetUser,
    UserRoles,
    GroupRoles,
    List,
}

#[derive(Default)]
pub struct FakeRegistry {
    projects: Vec<Project>,
    users: Vec<User>,
    // (user_id, project_id) -> role codes
    user_roles: HashMap<(i64, i64), Vec<String>>,
    // (project_id, group dn) -> role codes
    group_roles: HashMap<(i64, String), Vec<String>>,
    failures: HashSet<Failure>,
    pub user_role_calls: AtomicUsize,
    pub group_role_calls: AtomicUsize,
    pub project_get_calls: AtomicUsize,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, id: i64, name: &str, public: bool) -> Self {
        self.projects.push(Project {
            project_id: id,
            owner_id: 1,
            name: name.to_string(),
            public,
            deleted: false,
            creation_time: Utc::now(),
            update_time: Utc::now(),
        });
        self
    }

    pub fn with_user(mut self, id: i64, username: &str) -> Self {
        self.users.push(User {
            user_id: id,
            username: username.to_string(),
            email: None,
            realname: None,
            sysadmin_flag: false,
            deleted: false,
            creation_time: Utc::now(),
            update_time: Utc::now(),
        });
        self
    }

    pub fn with_user_role(mut self, user_id: i64, project_id: i64, code: &str) -> Self {
        self.user_roles
            .entry((user_id, project_id))
            .or_default()
            .push(code.to_string());
        self
    }

    pub fn with_group_role(mut self, project_id: i64, group_dn: &str, code: &str) -> Self {
        self.group_roles
            .entry((project_id, group_dn.to_string()))
            .or_default()
            .push(code.to_string());
        self
    }

    pub fn failing(mut self, failure: Failure) -> Self {
        self.failures.insert(failure);
        self
    }

    fn check(&self, failure: Failure) -> AppResult<()> {
        if self.failures.contains(&failure) {
            return Err(AppError::StoreError(DbErr::Custom(format!(
                "injected failure: {:?}",
                failure
            ))));
        }
        Ok(())
    }

    fn find_project(&self, project: &ProjectIdentifier) -> Option<Project> {
        self.projects.iter().find(|p| project.matches(p)).cloned()
    }

    fn user_id_of(&self, username: &str) -> Option<i64> {
        self.users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.user_id)
    }
}

#[async_trait]
impl ProjectLookup for FakeRegistry {
    async fn is_public(&self, project: &ProjectIdentifier) -> AppResult<bool> {
        self.check(Failure::IsPublic)?;
        Ok(self.find_project(project).is_some_and(|p| p.public))
    }

    async fn get(&self, project: &ProjectIdentifier) -> AppResult<Option<Project>> {
        self.project_get_calls.fetch_add(1, Ordering::SeqCst);
        self.check(Failure::GetProject)?;
        Ok(self.find_project(project))
    }

    async fn list(&self, query: &ProjectQueryParam) -> AppResult<Vec<Project>> {
        self.check(Failure::List)?;
        let Some(member) = &query.member else {
            return Ok(self.projects.clone());
        };

        let user_id = self.user_id_of(&member.name);
        let mut projects: Vec<Project> = self
            .projects
            .iter()
            .filter(|p| {
                let direct = user_id
                    .is_some_and(|uid| self.user_roles.contains_key(&(uid, p.project_id)));
                let via_group = member
                    .group_list
                    .iter()
                    .any(|dn| self.group_roles.contains_key(&(p.project_id, dn.clone())));
                direct || via_group
            })
            .cloned()
            .collect();
        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(projects)
    }
}

#[async_trait]
impl UserStore for FakeRegistry {
    async fn get_user(&self, criteria: &UserCriteria) -> AppResult<Option<User>> {
        self.check(Failure::GetUser)?;
        Ok(self
            .users
            .iter()
            .find(|u| u.username == criteria.username)
            .cloned())
    }
}

#[async_trait]
impl RoleStore for FakeRegistry {
    async fn get_user_project_roles(
        &self,
        user_id: i64,
        project_id: i64,
        kind: MemberKind,
    ) -> AppResult<Vec<String>> {
        self.user_role_calls.fetch_add(1, Ordering::SeqCst);
        self.check(Failure::UserRoles)?;
        assert_eq!(kind, MemberKind::User);
        Ok(self
            .user_roles
            .get(&(user_id, project_id))
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl GroupRoleStore for FakeRegistry {
    async fn get_roles_by_group(
        &self,
        project_id: i64,
        condition: &GroupQueryCondition,
    ) -> AppResult<Vec<String>> {
        self.group_role_calls.fetch_add(1, Ordering::SeqCst);
        self.check(Failure::GroupRoles)?;
        Ok(condition
            .group_dns()
            .iter()
            .filter_map(|dn| self.group_roles.get(&(project_id, dn.clone())))
            .flatten()
            .cloned()
            .collect())
    }
}

/// 共有レジストリから SecurityStores を組み立てる
pub fn stores(registry: &Arc<FakeRegistry>) -> Arc<SecurityStores> {
    Arc::new(SecurityStores::new(
        registry.clone(),
        registry.clone(),
        registry.clone(),
        registry.clone(),
        Arc::new(LdapGroupQueryBuilder),
    ))
}

pub fn context(registry: &Arc<FakeRegistry>, principal: Option<Principal>) -> SecurityContext {
    SecurityContext::new(principal, stores(registry))
}

/// テストで共通に使うレジストリ
///
/// - 1: "library"（公開）
/// - 2: "private"（非公開）
/// - alice(10): private に RWS
/// - bob(11): private に MDRWS
/// - carol(12): 直接ロールなし、QA グループが private に RS
/// - dave(13): private に未知コードのみ
pub fn standard_registry() -> FakeRegistry {
    FakeRegistry::new()
        .with_project(1, "library", true)
        .with_project(2, "private", false)
        .with_user(10, "alice")
        .with_user(11, "bob")
        .with_user(12, "carol")
        .with_user(13, "dave")
        .with_user_role(10, 2, "RWS")
        .with_user_role(11, 2, "MDRWS")
        .with_user_role(13, 2, "LIMITED")
        .with_group_role(2, QA_GROUP, "RS")
}
