// src/repository/project_repository.rs

use crate::domain::project_member_model::{self, Entity as ProjectMemberEntity, MemberKind};
use crate::domain::project_model::{
    self, Entity as ProjectEntity, Project, ProjectIdentifier, ProjectQueryParam,
};
use crate::domain::user_group_model::{self, Entity as UserGroupEntity, LDAP_GROUP_TYPE};
use crate::domain::user_model::{self, Entity as UserEntity};
use crate::error::AppResult;
use crate::security::stores::ProjectLookup;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    QueryTrait, Select,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ProjectRepository {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 削除されていないプロジェクトを識別子で検索
    pub async fn find_by_identifier(
        &self,
        project: &ProjectIdentifier,
    ) -> AppResult<Option<Project>> {
        let model = ProjectEntity::find()
            .filter(project.condition())
            .filter(project_model::Column::Deleted.eq(false))
            .one(self.db.as_ref())
            .await?;
        Ok(model)
    }

    /// ユーザー本人またはそのグループがメンバーになっているプロジェクト
    pub async fn find_by_member(
        &self,
        username: &str,
        group_dns: &[String],
    ) -> AppResult<Vec<Project>> {
        let models = Self::member_projects_query(username, group_dns)
            .all(self.db.as_ref())
            .await?;
        Ok(models)
    }

    /// メンバー経由のプロジェクト検索クエリ
    ///
    /// グループは LDAP 種別のみ対象（グループロール解決と同じ条件）。
    fn member_projects_query(username: &str, group_dns: &[String]) -> Select<ProjectEntity> {
        let user_ids = UserEntity::find()
            .select_only()
            .column(user_model::Column::UserId)
            .filter(user_model::Column::Username.eq(username))
            .filter(user_model::Column::Deleted.eq(false))
            .into_query();

        let mut membership = Condition::any().add(
            Condition::all()
                .add(project_member_model::Column::EntityType.eq(MemberKind::User.entity_type()))
                .add(project_member_model::Column::EntityId.in_subquery(user_ids)),
        );

        if !group_dns.is_empty() {
            let group_ids = UserGroupEntity::find()
                .select_only()
                .column(user_group_model::Column::Id)
                .filter(user_group_model::Column::GroupType.eq(LDAP_GROUP_TYPE))
                .filter(user_group_model::Column::LdapGroupDn.is_in(group_dns.iter().cloned()))
                .into_query();

            membership = membership.add(
                Condition::all()
                    .add(
                        project_member_model::Column::EntityType
                            .eq(MemberKind::Group.entity_type()),
                    )
                    .add(project_member_model::Column::EntityId.in_subquery(group_ids)),
            );
        }

        let member_projects = ProjectMemberEntity::find()
            .select_only()
            .column(project_member_model::Column::ProjectId)
            .filter(membership)
            .into_query();

        ProjectEntity::find()
            .filter(project_model::Column::Deleted.eq(false))
            .filter(project_model::Column::ProjectId.in_subquery(member_projects))
            .order_by_asc(project_model::Column::Name)
    }

    /// 削除されていない全プロジェクト
    pub async fn find_all(&self) -> AppResult<Vec<Project>> {
        let models = ProjectEntity::find()
            .filter(project_model::Column::Deleted.eq(false))
            .order_by_asc(project_model::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models)
    }
}

#[async_trait]
impl ProjectLookup for ProjectRepository {
    async fn is_public(&self, project: &ProjectIdentifier) -> AppResult<bool> {
        Ok(self
            .find_by_identifier(project)
            .await?
            .is_some_and(|p| p.public))
    }

    async fn get(&self, project: &ProjectIdentifier) -> AppResult<Option<Project>> {
        self.find_by_identifier(project).await
    }

    async fn list(&self, query: &ProjectQueryParam) -> AppResult<Vec<Project>> {
        match &query.member {
            Some(member) => self.find_by_member(&member.name, &member.group_list).await,
            None => self.find_all().await,
        }
    }
}
